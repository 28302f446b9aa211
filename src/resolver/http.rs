//! Lichess access over blocking HTTP
//!
//! Uses `reqwest::blocking` so the resolver can run on a plain thread without
//! an async runtime. Every request carries the same user agent and timeout;
//! none is retried.

use super::GameSource;
use crate::core::{ResolveError, ResolveResult};
use bevy::prelude::Resource;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://lichess.org";

/// Identifies this client to Lichess
pub const USER_AGENT: &str = "DumenDunyam/1.0 (chess piece picker wheel)";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how the resolver talks to Lichess
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Scheme and host, without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn current_game_url(&self, handle: &str) -> String {
        format!(
            "{}/api/user/{}/current-game",
            self.base_url.trim_end_matches('/'),
            handle
        )
    }

    pub fn game_page_url(&self, game_id: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), game_id)
    }
}

/// [`GameSource`] backed by the Lichess website
pub struct LichessClient {
    client: reqwest::blocking::Client,
    config: ResolverConfig,
}

impl LichessClient {
    pub fn new(config: ResolverConfig) -> ResolveResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ResolveError::ClientInit {
                message: e.to_string(),
            })?;
        Ok(Self { client, config })
    }

    fn get_text(&self, url: &str) -> ResolveResult<String> {
        debug!(url, "GET");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Remote {
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

impl GameSource for LichessClient {
    fn current_game(&self, handle: &str) -> ResolveResult<String> {
        self.get_text(&self.config.current_game_url(handle))
    }

    fn game_page(&self, game_id: &str) -> ResolveResult<String> {
        self.get_text(&self.config.game_page_url(game_id))
    }
}
