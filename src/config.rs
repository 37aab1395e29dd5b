use gloo_net::http::Request;
use serde::Deserialize;

use crate::error::{BoardError, Result};
use crate::logging;

/// Optional override file, resolved relative to the page.
pub const CONFIG_PATH: &str = "./board-config.json";

pub const DEFAULT_TITLE: &str = "Mergington High School";
pub const DEFAULT_MESSAGE_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Page heading.
    pub title: String,
    /// Prefix for every API path. Empty means same origin.
    pub api_base: String,
    /// How long a status message stays visible.
    pub message_timeout_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            api_base: String::new(),
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: BoardConfig = serde_json::from_str(json)?;
        Ok(cfg)
    }

    /// Fetches [`CONFIG_PATH`], falling back to defaults when it is missing
    /// or unreadable.
    pub async fn load() -> Self {
        match Self::fetch(CONFIG_PATH).await {
            Ok(cfg) => cfg,
            Err(BoardError::Status { status: 404, .. }) => {
                logging::info(format!("{CONFIG_PATH} not found, using defaults"));
                Self::default()
            }
            Err(e) => {
                logging::error(&format!("Failed loading {CONFIG_PATH}"), e);
                Self::default()
            }
        }
    }

    async fn fetch(path: &str) -> Result<Self> {
        let resp = Request::get(path).send().await?;
        if !resp.ok() {
            return Err(BoardError::Status {
                status: resp.status(),
                detail: None,
            });
        }
        let text = resp.text().await?;
        Self::from_json(&text)
    }
}
