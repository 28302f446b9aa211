//! Text scraping for Lichess responses
//!
//! Both parsers are tied to what Lichess serves today: a PGN header with a
//! `GameId` tag, and a game page whose `page-init-data` script carries the
//! latest `"fen":"..."`. They sit behind [`PositionExtractor`] so the page
//! scraping can be swapped without touching anything else.

use super::PositionString;
use crate::core::{ResolveError, ResolveResult};
use regex::Regex;
use std::sync::LazyLock;

static GAME_ID_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\[GameId "([^"]+)"\]"#).expect("GameId pattern is valid"));

static PAGE_INIT_DATA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<script\b[^>]*\bid\s*=\s*["']page-init-data["'][^>]*>(.*?)</script>"#)
        .expect("page-init-data pattern is valid")
});

const FEN_MARKER: &str = r#""fen":""#;

/// Pull the game id out of a current-game response
pub fn parse_game_id(body: &str) -> Option<&str> {
    GAME_ID_TAG
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Recovers a position string from a game page body
pub trait PositionExtractor {
    fn extract(&self, page: &str) -> ResolveResult<PositionString>;
}

/// Reads the last `"fen"` value from the page's `page-init-data` script
#[derive(Debug, Clone, Copy, Default)]
pub struct PageInitData;

impl PositionExtractor for PageInitData {
    fn extract(&self, page: &str) -> ResolveResult<PositionString> {
        let payload = PAGE_INIT_DATA
            .captures(page)
            .and_then(|captures| captures.get(1))
            .ok_or(ResolveError::ExtractionFailed)?
            .as_str();

        // The payload lists every ply; the last fen is the current position.
        let (_, tail) = payload
            .rsplit_once(FEN_MARKER)
            .ok_or(ResolveError::ExtractionFailed)?;
        let fen = tail.split('"').next().unwrap_or_default();
        if fen.is_empty() {
            return Err(ResolveError::ExtractionFailed);
        }

        Ok(PositionString::new(fen.replace(r"\/", "/")))
    }
}
