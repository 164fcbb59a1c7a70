use crate::models::{MovieDetail, MovieSummary, WatchlistEntry};

/// One result card as the surface should draw it: the summary fields plus
/// the current state of its watchlist-toggle control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub summary: MovieSummary,
    pub in_watchlist: bool,
}

/// Visual treatment of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Normal,
    Error,
}

/// Content of a card's expandable detail region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailRegion<'a> {
    /// Collapsed; nothing to show.
    Hidden,
    /// A fetch is in flight.
    Loading,
    Loaded(&'a MovieDetail),
    /// The remote service has no record for this id. Terminal.
    Unavailable,
    /// The fetch failed. Re-expanding the card retries.
    Failed(&'a str),
}

/// The presentation collaborator. The controller pushes declarative state
/// into it and never reads anything back; the surface owns no business
/// logic. State flows one way (state -> view), input events flow back in
/// through the controller's entry points.
pub trait RenderSurface {
    /// Replace the whole result grid with these cards, in order.
    fn show_results(&mut self, cards: &[CardView]);

    /// Show the status line. An empty string clears it.
    fn show_status(&mut self, text: &str, style: StatusStyle);

    /// Show or hide the clear affordance.
    fn set_clear_visible(&mut self, visible: bool);

    /// Rebuild the watchlist view from scratch, in the given order. The
    /// count indicator shows `entries.len()`.
    fn show_watchlist(&mut self, entries: &[WatchlistEntry]);

    /// Flip one result card's toggle control in place, without re-rendering
    /// the grid. The id may no longer be on screen; ignore it then.
    fn set_card_marked(&mut self, id: &str, marked: bool);

    /// Update one card's detail region.
    fn set_detail(&mut self, id: &str, region: DetailRegion<'_>);

    /// Empty the search input box.
    fn reset_input(&mut self);
}
