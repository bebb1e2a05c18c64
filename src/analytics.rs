use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::AnalyticsRecord;

/// Default number of leading entries a chart shows from a distribution.
pub const DEFAULT_SLICES: usize = 20;

/// Datasets a frequency distribution can be built over. Developers and
/// publishers are scalar fields; the rest are multi-valued and arrive from
/// ingestion already split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Developers,
    Publishers,
    Platforms,
    Categories,
    Genres,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Developers => "developers",
            Field::Publishers => "publishers",
            Field::Platforms => "platforms",
            Field::Categories => "categories",
            Field::Genres => "genres",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Field::Developers => "Developers",
            Field::Publishers => "Publishers",
            Field::Platforms => "Platforms",
            Field::Categories => "Categories",
            Field::Genres => "Genres",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developers" => Ok(Field::Developers),
            "publishers" => Ok(Field::Publishers),
            "platforms" => Ok(Field::Platforms),
            "categories" => Ok(Field::Categories),
            "genres" => Ok(Field::Genres),
            _ => Err(format!("Unknown analytics field: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub name: String,
    pub value: u64,
}

/// Tallies the selected field across all records into a distribution sorted
/// by count descending. Ties keep first-seen order (stable sort). Empty
/// values contribute nothing; a missing scalar was mapped to the `"null"`
/// placeholder at ingestion and is tallied like any other name.
pub fn aggregate(records: &[AnalyticsRecord], field: Field) -> Vec<FrequencyEntry> {
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match field {
            Field::Developers => tally(&mut entries, &mut index, &record.developers),
            Field::Publishers => tally(&mut entries, &mut index, &record.publishers),
            Field::Platforms => {
                for value in &record.platforms {
                    tally(&mut entries, &mut index, value);
                }
            }
            Field::Categories => {
                for value in &record.categories {
                    tally(&mut entries, &mut index, value);
                }
            }
            Field::Genres => {
                for value in &record.genres {
                    tally(&mut entries, &mut index, value);
                }
            }
        }
    }

    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries
}

fn tally(entries: &mut Vec<FrequencyEntry>, index: &mut HashMap<String, usize>, name: &str) {
    if name.is_empty() {
        return;
    }
    match index.get(name) {
        Some(&at) => entries[at].value += 1,
        None => {
            index.insert(name.to_string(), entries.len());
            entries.push(FrequencyEntry {
                name: name.to_string(),
                value: 1,
            });
        }
    }
}

/// Leading `n` entries of a distribution, `n` clamped to `[1, len]`.
pub fn top(distribution: &[FrequencyEntry], n: usize) -> &[FrequencyEntry] {
    if distribution.is_empty() {
        return distribution;
    }
    &distribution[..n.clamp(1, distribution.len())]
}

/// Drops entries with the given name, e.g. the `"null"` placeholder.
/// Exclusion is always the caller's explicit choice.
pub fn exclude_name(distribution: Vec<FrequencyEntry>, name: &str) -> Vec<FrequencyEntry> {
    distribution
        .into_iter()
        .filter(|entry| entry.name != name)
        .collect()
}

/// Percentage of `part` in `total`; 0% on a zero total rather than NaN.
pub fn share(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(developers: &str, platforms: &[&str], genres: &[&str]) -> AnalyticsRecord {
        AnalyticsRecord {
            appid: Some(1),
            name: String::new(),
            developers: developers.to_string(),
            publishers: String::new(),
            release_date: String::new(),
            platforms: platforms.iter().map(|s| s.to_string()).collect(),
            categories: Vec::new(),
            genres: genres.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn aggregate_counts_every_multi_valued_token() {
        let records = vec![
            record("Valve", &["windows", "mac"], &["Action"]),
            record("Valve", &["windows"], &["Action", "FPS"]),
            record("id Software", &[], &["FPS"]),
        ];

        let platforms = aggregate(&records, Field::Platforms);
        let token_count: u64 = records.iter().map(|r| r.platforms.len() as u64).sum();
        let tallied: u64 = platforms.iter().map(|e| e.value).sum();
        assert_eq!(tallied, token_count);
        assert_eq!(platforms[0].name, "windows");
        assert_eq!(platforms[0].value, 2);
    }

    #[test]
    fn aggregate_is_deterministic_and_ties_keep_first_seen_order() {
        let records = vec![
            record("Valve", &["linux"], &[]),
            record("id Software", &["mac"], &[]),
            record("Valve", &[], &[]),
        ];

        let first = aggregate(&records, Field::Platforms);
        let second = aggregate(&records, Field::Platforms);
        assert_eq!(first, second);
        // linux and mac both count 1; linux was seen first
        assert_eq!(first[0].name, "linux");
        assert_eq!(first[1].name, "mac");
    }

    #[test]
    fn aggregate_sorts_by_count_descending() {
        let records = vec![
            record("A", &[], &["Indie"]),
            record("B", &[], &["Indie", "Action"]),
            record("C", &[], &["Indie"]),
        ];

        let genres = aggregate(&records, Field::Genres);
        assert_eq!(genres[0].name, "Indie");
        assert_eq!(genres[0].value, 3);
        assert_eq!(genres[1].name, "Action");
        assert_eq!(genres[1].value, 1);
    }

    #[test]
    fn aggregate_skips_empty_scalars_and_tolerates_no_records() {
        assert!(aggregate(&[], Field::Developers).is_empty());

        let records = vec![record("", &[], &[]), record("Valve", &[], &[])];
        let developers = aggregate(&records, Field::Developers);
        assert_eq!(developers.len(), 1);
        assert_eq!(developers[0].name, "Valve");
    }

    #[test]
    fn exclude_name_removes_null_placeholder_only_on_request() {
        let records = vec![record("null", &[], &[]), record("Valve", &[], &[])];
        let with_null = aggregate(&records, Field::Developers);
        assert_eq!(with_null.len(), 2);

        let filtered = exclude_name(with_null, "null");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Valve");
    }

    #[test]
    fn top_clamps_to_distribution_bounds() {
        let records = vec![
            record("A", &[], &[]),
            record("B", &[], &[]),
            record("C", &[], &[]),
        ];
        let dist = aggregate(&records, Field::Developers);

        assert_eq!(top(&dist, 2).len(), 2);
        assert_eq!(top(&dist, 0).len(), 1);
        assert_eq!(top(&dist, 99).len(), 3);
        assert!(top(&[], 5).is_empty());
    }

    #[test]
    fn share_reports_zero_on_zero_total() {
        assert_eq!(share(10, 0), 0.0);
        assert_eq!(share(1, 4), 25.0);
        assert_eq!(share(0, 7), 0.0);
    }
}
