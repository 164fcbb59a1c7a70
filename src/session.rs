use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cache::{DetailCache, DetailRecord};
use crate::models::{MovieSummary, WatchlistEntry};
use crate::omdb::{DetailOutcome, MovieLookup, SearchOutcome};
use crate::view::{CardView, DetailRegion, RenderSurface, StatusStyle};
use crate::watchlist::{Membership, Watchlist};

/// Top-level phase of the search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    Results,
    Empty,
    Failed,
}

/// Orchestrates one page-lifetime of searching and watchlisting.
///
/// Every entry point corresponds to a discrete user action (submit, clear,
/// click a card, click a toggle, remove an entry); all state lives here and
/// the render surface is pushed declarative updates after each one. The
/// watchlist store is the single source of truth for membership; the result
/// grid and the watchlist view both resync against it after every mutation.
///
/// Lookups are the only suspension points. [`submit_search`] and
/// [`toggle_card`] await their fetch inline; a driver that lets requests
/// overlap instead splits them into [`begin_search`] / [`finish_search`]
/// (and [`finish_detail`]), where a request token makes resolution
/// last-request-wins: a slow response issued before the latest request is
/// discarded rather than overwriting newer results.
///
/// [`submit_search`]: SearchSession::submit_search
/// [`toggle_card`]: SearchSession::toggle_card
/// [`begin_search`]: SearchSession::begin_search
/// [`finish_search`]: SearchSession::finish_search
/// [`finish_detail`]: SearchSession::finish_detail
pub struct SearchSession<S: RenderSurface> {
    lookup: Arc<dyn MovieLookup>,
    surface: S,
    watchlist: Watchlist,
    cache: DetailCache,
    results: Vec<MovieSummary>,
    expanded: HashSet<String>,
    phase: SearchPhase,
    search_token: u64,
    grid_generation: u64,
}

impl<S: RenderSurface> SearchSession<S> {
    pub fn new(lookup: Arc<dyn MovieLookup>, surface: S) -> Self {
        Self {
            lookup,
            surface,
            watchlist: Watchlist::new(),
            cache: DetailCache::new(),
            results: Vec::new(),
            expanded: HashSet::new(),
            phase: SearchPhase::Idle,
            search_token: 0,
            grid_generation: 0,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn results(&self) -> &[MovieSummary] {
        &self.results
    }

    /// Generation of the currently displayed result grid; bumps whenever the
    /// grid is replaced or cleared. Capture it when starting a detail fetch
    /// and hand it back to [`finish_detail`](SearchSession::finish_detail).
    pub fn results_generation(&self) -> u64 {
        self.grid_generation
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Entry point for a submitted search: validates, performs the lookup,
    /// renders the outcome.
    pub async fn submit_search(&mut self, raw_query: &str) {
        let Some(token) = self.begin_search(raw_query) else {
            return;
        };
        let query = raw_query.trim().to_string();
        let outcome = self.lookup.search_by_title(&query).await;
        self.finish_search(token, &query, outcome);
    }

    /// Validation gate plus request-token issue. Returns `None` for a blank
    /// (or whitespace-only) query: a prompt is shown and no request may be
    /// made.
    pub fn begin_search(&mut self, raw_query: &str) -> Option<u64> {
        if raw_query.trim().is_empty() {
            self.surface
                .show_status("Please type a movie name first.", StatusStyle::Error);
            return None;
        }
        self.phase = SearchPhase::Searching;
        self.search_token += 1;
        self.surface.show_status("Searching…", StatusStyle::Normal);
        debug!(token = self.search_token, "search request issued");
        Some(self.search_token)
    }

    /// Applies a resolved search unless a newer one has been issued since.
    pub fn finish_search(&mut self, token: u64, query: &str, outcome: Result<SearchOutcome>) {
        if token != self.search_token {
            debug!(
                token,
                latest = self.search_token,
                "dropping stale search response"
            );
            return;
        }
        match outcome {
            Ok(SearchOutcome::Found(summaries)) => {
                info!(count = summaries.len(), query, "search matched");
                self.phase = SearchPhase::Results;
                self.replace_results(summaries);
                let message = format!(
                    "Found {} result(s) for \"{}\"",
                    self.results.len(),
                    query
                );
                self.surface.show_status(&message, StatusStyle::Normal);
                self.surface.set_clear_visible(true);
            }
            Ok(SearchOutcome::NotFound) => {
                info!(query, "search matched nothing");
                self.phase = SearchPhase::Empty;
                self.replace_results(Vec::new());
                self.surface.show_status(
                    "No movies found. Try a different search term!",
                    StatusStyle::Error,
                );
                self.surface.set_clear_visible(false);
            }
            Err(e) => {
                warn!(query, error = %e, "search failed");
                self.phase = SearchPhase::Failed;
                self.replace_results(Vec::new());
                let message = format!("Search failed: {:#}", e);
                self.surface.show_status(&message, StatusStyle::Error);
                self.surface.set_clear_visible(false);
            }
        }
    }

    /// The clear affordance: input, grid and status all reset, back to
    /// `Idle`. The watchlist is untouched.
    pub fn clear(&mut self) {
        self.phase = SearchPhase::Idle;
        self.replace_results(Vec::new());
        self.surface.reset_input();
        self.surface.show_status("", StatusStyle::Normal);
        self.surface.set_clear_visible(false);
    }

    /// Watchlist toggle on a result card. The card's own control is flipped
    /// in place (no grid re-render) and the watchlist view is rebuilt from
    /// the store.
    pub fn toggle_watchlist(&mut self, id: &str) {
        let Some(summary) = self.results.iter().find(|s| s.id == id).cloned() else {
            warn!(id, "watchlist toggle for a card that is not displayed");
            return;
        };
        let membership = self.watchlist.toggle(id, || WatchlistEntry {
            id: summary.id.clone(),
            title: summary.title.clone(),
            poster_url: summary.poster_url.clone(),
        });
        info!(id, ?membership, "watchlist toggled");
        self.surface
            .set_card_marked(id, membership == Membership::Added);
        self.render_watchlist();
    }

    /// Removal from the watchlist view. When the matching result card is
    /// still on screen its control reverts to unmarked.
    pub fn remove_entry(&mut self, id: &str) {
        self.watchlist.remove(id);
        if self.results.iter().any(|s| s.id == id) {
            self.surface.set_card_marked(id, false);
        }
        self.render_watchlist();
    }

    /// Click on a card body (not its toggle control): collapses when
    /// expanded, otherwise expands and resolves the detail region, fetching
    /// at most once per id per session.
    pub async fn toggle_card(&mut self, id: &str) {
        if !self.results.iter().any(|s| s.id == id) {
            return;
        }
        if self.expanded.remove(id) {
            self.surface.set_detail(id, DetailRegion::Hidden);
            return;
        }
        self.expanded.insert(id.to_string());
        match self.cache.get(id) {
            Some(DetailRecord::Loaded(detail)) => {
                self.surface.set_detail(id, DetailRegion::Loaded(detail));
                return;
            }
            Some(DetailRecord::Unavailable) => {
                self.surface.set_detail(id, DetailRegion::Unavailable);
                return;
            }
            None => {}
        }
        self.surface.set_detail(id, DetailRegion::Loading);
        let generation = self.grid_generation;
        let outcome = self.lookup.fetch_by_id(id).await;
        self.finish_detail(generation, id, outcome);
    }

    /// Applies a resolved detail fetch. A resolution for a grid that has
    /// been replaced or cleared since the fetch started is dropped; its
    /// target region no longer exists.
    pub fn finish_detail(&mut self, generation: u64, id: &str, outcome: Result<DetailOutcome>) {
        if generation != self.grid_generation {
            debug!(id, "dropping detail response for a replaced grid");
            return;
        }
        match outcome {
            Ok(DetailOutcome::Found(detail)) => {
                debug!(id, "detail loaded");
                self.surface.set_detail(id, DetailRegion::Loaded(&detail));
                self.cache.insert(id.to_string(), DetailRecord::Loaded(detail));
            }
            Ok(DetailOutcome::NotFound) => {
                debug!(id, "detail unavailable");
                self.surface.set_detail(id, DetailRegion::Unavailable);
                self.cache.insert(id.to_string(), DetailRecord::Unavailable);
            }
            Err(e) => {
                warn!(id, error = %e, "detail fetch failed");
                // Not cached: re-expanding the card retries.
                self.surface.set_detail(
                    id,
                    DetailRegion::Failed("Could not load details. Check your connection."),
                );
            }
        }
    }

    /// Replaces the result grid wholesale. Expansion state belongs to the
    /// grid, so it resets; pending detail fetches for the old grid are
    /// invalidated by the generation bump.
    fn replace_results(&mut self, summaries: Vec<MovieSummary>) {
        self.results = summaries;
        self.expanded.clear();
        self.grid_generation += 1;
        let cards: Vec<CardView> = self
            .results
            .iter()
            .map(|s| CardView {
                summary: s.clone(),
                in_watchlist: self.watchlist.contains(&s.id),
            })
            .collect();
        self.surface.show_results(&cards);
    }

    fn render_watchlist(&mut self) {
        self.surface.show_watchlist(self.watchlist.entries());
    }
}
