//! Position resolver - from a Lichess handle to the live position
//!
//! # Steps
//!
//! 1. Validate the handle locally (nothing is sent for an empty handle)
//! 2. Fetch the player's current game and read its `GameId` tag
//! 3. Fetch the game page
//! 4. Extract the latest FEN from the page
//!
//! Each step reports a [`ResolveProgress`] so the UI can show what is going
//! on. The first failure ends the attempt; there are no retries.
//!
//! Network access goes through [`GameSource`] and page scraping through
//! [`PositionExtractor`], so both can be replaced in tests.

pub mod extract;
pub mod http;
pub mod task;

pub use extract::{parse_game_id, PageInitData, PositionExtractor};
pub use http::{LichessClient, ResolverConfig};
pub use task::{
    spawn_fetch, spawn_lichess_fetch, FetchJob, FetchMessage, FetchRequested, ResolverPlugin,
    NO_MOVABLE_PIECE,
};

use crate::core::{ResolveError, ResolveResult};
use std::fmt;
use tracing::{debug, info};

/// A FEN string as served by Lichess, not yet validated as a position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionString(String);

impl PositionString {
    pub fn new(fen: impl Into<String>) -> Self {
        Self(fen.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote operations the resolver needs
pub trait GameSource {
    /// Body of the "current game" resource for `handle`
    fn current_game(&self, handle: &str) -> ResolveResult<String>;

    /// Body of the game page for `game_id`
    fn game_page(&self, game_id: &str) -> ResolveResult<String>;
}

impl<T: GameSource + ?Sized> GameSource for &T {
    fn current_game(&self, handle: &str) -> ResolveResult<String> {
        (**self).current_game(handle)
    }

    fn game_page(&self, game_id: &str) -> ResolveResult<String> {
        (**self).game_page(game_id)
    }
}

/// Progress reported between resolver steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveProgress {
    LookingUpGame { handle: String },
    FetchingGamePage { game_id: String },
    PositionFound { game_id: String },
}

impl fmt::Display for ResolveProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveProgress::LookingUpGame { handle } => {
                write!(f, "Looking for an active game of {handle}...")
            }
            ResolveProgress::FetchingGamePage { game_id } => {
                write!(f, "Fetching game page: {game_id}")
            }
            ResolveProgress::PositionFound { game_id } => {
                write!(f, "Position of game {game_id} received.")
            }
        }
    }
}

/// Trim a handle and reject anything that cannot be a Lichess username
pub fn validate_handle(handle: &str) -> ResolveResult<&str> {
    let handle = handle.trim();
    if handle.is_empty() {
        return Err(ResolveError::EmptyHandle);
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-';
    if !handle.chars().all(allowed) {
        return Err(ResolveError::InvalidHandle {
            handle: handle.to_string(),
        });
    }
    Ok(handle)
}

/// Runs the four resolver steps against a source and an extractor
pub struct Resolver<S, E = PageInitData> {
    source: S,
    extractor: E,
}

impl<S: GameSource> Resolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            extractor: PageInitData,
        }
    }
}

impl<S: GameSource, E: PositionExtractor> Resolver<S, E> {
    pub fn with_extractor(source: S, extractor: E) -> Self {
        Self { source, extractor }
    }

    pub fn resolve(
        &self,
        handle: &str,
        mut progress: impl FnMut(ResolveProgress),
    ) -> ResolveResult<PositionString> {
        let handle = validate_handle(handle)?;

        progress(ResolveProgress::LookingUpGame {
            handle: handle.to_string(),
        });
        let body = self.source.current_game(handle)?;
        let game_id = parse_game_id(&body).ok_or_else(|| ResolveError::NoActiveGame {
            handle: handle.to_string(),
        })?;
        debug!(handle, game_id, "found active game");

        progress(ResolveProgress::FetchingGamePage {
            game_id: game_id.to_string(),
        });
        let page = self.source.game_page(game_id)?;
        let position = self.extractor.extract(&page)?;
        info!(game_id, fen = position.as_str(), "resolved position");

        progress(ResolveProgress::PositionFound {
            game_id: game_id.to_string(),
        });
        Ok(position)
    }
}

/// Resolve without progress reporting
pub fn resolve_position(source: impl GameSource, handle: &str) -> ResolveResult<PositionString> {
    Resolver::new(source).resolve(handle, |_| {})
}
