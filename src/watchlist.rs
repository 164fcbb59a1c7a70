use crate::models::WatchlistEntry;

/// Resulting membership after a [`Watchlist::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Added,
    Removed,
}

/// In-memory watchlist: insertion-ordered, at most one entry per id.
///
/// There is exactly one instance per session, owned by the controller and
/// never persisted. Membership checks are linear scans; n is the number of
/// items a person adds by hand.
#[derive(Debug, Default)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Appends at the end unless an entry with the same id already exists.
    pub fn add(&mut self, entry: WatchlistEntry) {
        if !self.contains(&entry.id) {
            self.entries.push(entry);
        }
    }

    /// Removes the entry with that id; no-op when absent.
    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
    }

    /// Removes when present, otherwise builds an entry and appends it.
    /// Reports the resulting membership so the caller can resync views.
    pub fn toggle(
        &mut self,
        id: &str,
        entry_factory: impl FnOnce() -> WatchlistEntry,
    ) -> Membership {
        if self.contains(id) {
            self.remove(id);
            Membership::Removed
        } else {
            self.add(entry_factory());
            Membership::Added
        }
    }

    /// Entries in display order (insertion order).
    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str) -> WatchlistEntry {
        WatchlistEntry {
            id: id.to_string(),
            title: title.to_string(),
            poster_url: None,
        }
    }

    #[test]
    fn contains_tracks_add_and_remove() {
        let mut list = Watchlist::new();
        assert!(!list.contains("tt0372784"));
        list.add(entry("tt0372784", "Batman Begins"));
        assert!(list.contains("tt0372784"));
        list.remove("tt0372784");
        assert!(!list.contains("tt0372784"));
    }

    #[test]
    fn adding_existing_id_is_a_noop() {
        let mut list = Watchlist::new();
        list.add(entry("tt0372784", "Batman Begins"));
        list.add(entry("tt0372784", "Batman Begins (duplicate)"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].title, "Batman Begins");
    }

    #[test]
    fn removing_absent_id_is_a_noop() {
        let mut list = Watchlist::new();
        list.add(entry("tt0372784", "Batman Begins"));
        list.remove("tt0468569");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut list = Watchlist::new();
        assert_eq!(
            list.toggle("tt0372784", || entry("tt0372784", "Batman Begins")),
            Membership::Added
        );
        assert!(list.contains("tt0372784"));
        assert_eq!(
            list.toggle("tt0372784", || entry("tt0372784", "Batman Begins")),
            Membership::Removed
        );
        assert!(list.is_empty());
    }

    #[test]
    fn insertion_order_is_display_order() {
        let mut list = Watchlist::new();
        list.add(entry("tt0372784", "Batman Begins"));
        list.add(entry("tt0468569", "The Dark Knight"));
        list.add(entry("tt1345836", "The Dark Knight Rises"));
        list.remove("tt0468569");
        let ids: Vec<&str> = list.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["tt0372784", "tt1345836"]);
    }
}
