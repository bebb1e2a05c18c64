use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analytics::FrequencyEntry;
use crate::charts::ChartKind;
use crate::history::TimeSeriesPoint;
use crate::pager::PageItem;
use crate::window::{DateWindow, NavStep};

/// Delimiter the upstream uses to pack multiple values into one string field.
pub const MULTI_VALUE_DELIMITER: &str = ", ";

/// Name under which a missing scalar value is tallied. Callers exclude it
/// explicitly via `analytics::exclude_name`; it is never dropped silently.
pub const NULL_PLACEHOLDER: &str = "null";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSummary {
    pub rank: u32,
    pub appid: u64,
    pub name: String,
    pub concurrent_in_game: u64,
    pub header_image: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameDetails {
    pub appid: u64,
    pub name: String,
    pub header_image: String,
    pub short_description: String,
    pub developers: String,
    pub publishers: String,
    pub release_date: String,
    pub platforms: Vec<String>,
    pub price: String,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub website: String,
    pub screenshots: Vec<String>,
    pub background: String,
}

/// One game's player-count history in the packed wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackedHistory {
    pub appid: u64,
    pub name: String,
    pub date_playerscount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    pub appid: u64,
    pub name: String,
}

/// Raw row of the full metadata dump. Every field is optional: the upstream
/// emits `NaN` for missing numbers (sanitized to `null` before decoding) and
/// omits string fields it has no data for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetadataRow {
    pub appid: Option<u64>,
    pub name: Option<String>,
    pub developers: Option<String>,
    pub publishers: Option<String>,
    pub release_date: Option<String>,
    pub platforms: Option<String>,
    pub categories: Option<String>,
    pub genres: Option<String>,
}

/// Ingested analytics record. Multi-valued fields are split here, exactly
/// once; nothing downstream re-splits them.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsRecord {
    pub appid: Option<u64>,
    pub name: String,
    pub developers: String,
    pub publishers: String,
    pub release_date: String,
    pub platforms: Vec<String>,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
}

impl From<MetadataRow> for AnalyticsRecord {
    fn from(row: MetadataRow) -> Self {
        Self {
            appid: row.appid,
            name: row.name.unwrap_or_default(),
            developers: scalar_or_null(row.developers),
            publishers: scalar_or_null(row.publishers),
            release_date: scalar_or_null(row.release_date),
            platforms: split_multi(row.platforms.as_deref()),
            categories: split_multi(row.categories.as_deref()),
            genres: split_multi(row.genres.as_deref()),
        }
    }
}

fn scalar_or_null(value: Option<String>) -> String {
    value.unwrap_or_else(|| NULL_PLACEHOLDER.to_string())
}

pub fn split_multi(value: Option<&str>) -> Vec<String> {
    let Some(raw) = value else {
        return Vec::new();
    };
    raw.split(MULTI_VALUE_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Serialize)]
pub struct PagedGamesResponse {
    pub items: Vec<GameSummary>,
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    pub page_window: Vec<PageItem>,
}

/// Summary block for the "hall of glory" view: the top slice of the ranked
/// list plus live totals and share percentages.
#[derive(Debug, Serialize)]
pub struct GameStatsSummary {
    pub top_games: Vec<GameSummary>,
    pub total_players_all: u64,
    pub total_players_top: u64,
    pub top_share_percent: f64,
    pub rest_share_percent: f64,
    pub pie_data: Vec<FrequencyEntry>,
}

#[derive(Debug, Serialize)]
pub struct PlayerHistoryResponse {
    pub appid: u64,
    pub window: DateWindow,
    pub points: Vec<TimeSeriesPoint>,
}

/// Chart spec resolved against the live metadata for rendering.
#[derive(Debug, Serialize)]
pub struct ChartData {
    pub title: String,
    pub kind: ChartKind,
    pub entries: Vec<FrequencyEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub nav: Option<NavStep>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub top: Option<usize>,
    pub exclude_null: Option<bool>,
}
