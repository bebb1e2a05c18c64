use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::models::MULTI_VALUE_DELIMITER;

/// Failure while decoding a packed history string. One bad entry fails the
/// whole reconstruction; a partial series would hide upstream corruption.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed history entry `{0}`: expected `<epoch_ms> <count>`")]
    MalformedEntry(String),
    #[error("invalid epoch timestamp `{0}`")]
    InvalidEpoch(String),
    #[error("invalid player count `{0}`")]
    InvalidCount(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: u64,
}

/// Decodes `"<epoch_ms> <count>, <epoch_ms> <count>, ..."` into a series of
/// UTC calendar-day points, preserving source order. Entries with count
/// `"0"` are a no-sample sentinel and are dropped, not emitted as zero.
pub fn reconstruct(packed: &str) -> Result<Vec<TimeSeriesPoint>, ParseError> {
    if packed.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut points = Vec::new();
    for entry in packed.split(MULTI_VALUE_DELIMITER) {
        let (epoch, count) = entry
            .split_once(' ')
            .ok_or_else(|| ParseError::MalformedEntry(entry.to_string()))?;

        if count == "0" {
            continue;
        }

        let millis: i64 = epoch
            .parse()
            .map_err(|_| ParseError::InvalidEpoch(epoch.to_string()))?;
        let date = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| ParseError::InvalidEpoch(epoch.to_string()))?
            .date_naive();
        let value: u64 = count
            .parse()
            .map_err(|_| ParseError::InvalidCount(count.to_string()))?;

        points.push(TimeSeriesPoint { date, value });
    }

    Ok(points)
}
