use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::{
    AnalyticsRecord, GameDetails, GameEntry, GameSummary, MetadataRow, PackedHistory,
};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("invalid upstream payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl FetchError {
    /// A 404 means "no data for this game", not a failure worth retrying.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status(404))
    }
}

/// Client for the upstream stats API. One GET per logical payload; the
/// caller decides what to compose out of the responses.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let base =
            std::env::var("STEAM_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(base)
    }

    pub async fn top_current_games(&self) -> Result<Vec<GameSummary>, FetchError> {
        self.get_json("topcurrentgames").await
    }

    pub async fn game(&self, appid: u64) -> Result<GameDetails, FetchError> {
        self.get_json(&format!("steam/game/{appid}")).await
    }

    pub async fn player_history(&self, appid: u64) -> Result<Vec<PackedHistory>, FetchError> {
        self.get_json(&format!("steam/playercount/{appid}")).await
    }

    pub async fn all_games(&self) -> Result<Vec<GameEntry>, FetchError> {
        self.get_json("steam/getallgameslist").await
    }

    /// The metadata dump is known to carry literal `NaN` tokens where
    /// numbers are missing; they are rewritten to `null` before decoding,
    /// then each row is ingested into an `AnalyticsRecord`.
    pub async fn all_metadata(&self) -> Result<Vec<AnalyticsRecord>, FetchError> {
        let text = self.get_text("steam/allmetadata").await?;
        let rows: Vec<MetadataRow> = serde_json::from_str(&sanitize_nan(&text))?;
        Ok(rows.into_iter().map(AnalyticsRecord::from).collect())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let response = self.http.get(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn get_text(&self, path: &str) -> Result<String, FetchError> {
        let response = self.http.get(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }
}

static NAN_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bNaN\b").expect("valid regex"));

pub fn sanitize_nan(text: &str) -> String {
    NAN_TOKEN.replace_all(text, "null").into_owned()
}
