use crate::models::GameEntry;

/// Maximum number of suggestions shown under the search box.
pub const SUGGESTION_LIMIT: usize = 5;

/// Case-insensitive prefix match against the trimmed query, truncated to
/// `limit` while preserving candidate order. An empty or whitespace-only
/// query yields no suggestions, not the full list.
pub fn prefix_filter(candidates: &[GameEntry], query: &str, limit: usize) -> Vec<GameEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|candidate| candidate.name.to_lowercase().starts_with(&query))
        .take(limit)
        .cloned()
        .collect()
}
