use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::analytics::FrequencyEntry;
use crate::models::{AnalyticsRecord, MULTI_VALUE_DELIMITER};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv buffer error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// CSV form of a frequency distribution: header row, every field quoted,
/// embedded quotes doubled.
pub fn distribution_csv(distribution: &[FrequencyEntry]) -> Result<String, ExportError> {
    let mut writer = quoted_writer();
    writer.write_record(["name", "value"])?;
    for entry in distribution {
        writer.write_record([entry.name.clone(), entry.value.to_string()])?;
    }
    finish(writer)
}

/// CSV form of the analytics metadata table. Multi-valued fields are
/// re-joined with the upstream delimiter for the tabular view.
pub fn metadata_csv(records: &[AnalyticsRecord]) -> Result<String, ExportError> {
    let mut writer = quoted_writer();
    writer.write_record([
        "appid",
        "name",
        "developers",
        "publishers",
        "release_date",
        "platforms",
        "categories",
        "genres",
    ])?;
    for record in records {
        writer.write_record([
            record.appid.map(|id| id.to_string()).unwrap_or_default(),
            record.name.clone(),
            record.developers.clone(),
            record.publishers.clone(),
            record.release_date.clone(),
            record.platforms.join(MULTI_VALUE_DELIMITER),
            record.categories.join(MULTI_VALUE_DELIMITER),
            record.genres.join(MULTI_VALUE_DELIMITER),
        ])?;
    }
    finish(writer)
}

fn quoted_writer() -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
