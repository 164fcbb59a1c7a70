//! reelshelf — the state/render engine behind a movie search and watchlist
//! widget.
//!
//! A session ties together an OMDb lookup client, an in-memory watchlist,
//! and a per-session detail cache, and pushes declarative updates into a
//! [`RenderSurface`] the presentation layer implements. Nothing persists
//! beyond the session; configuration is the OMDb credential and base URL
//! from the environment.
//!
//! [`RenderSurface`]: view::RenderSurface

pub mod cache;
pub mod models;
pub mod omdb;
pub mod session;
pub mod view;
pub mod watchlist;

pub use models::{MovieDetail, MovieSummary, WatchlistEntry};
pub use omdb::{DetailOutcome, MovieLookup, OmdbClient, SearchOutcome};
pub use session::{SearchPhase, SearchSession};
pub use view::{CardView, DetailRegion, RenderSurface, StatusStyle};
pub use watchlist::{Membership, Watchlist};
