use super::domain::ScoredCandidate;

/// Number of coaches surfaced to the requester.
pub const TOP_MATCHES: usize = 3;

/// Order scored candidates by score descending and keep the first `top_k`.
///
/// Ties are expected (the scorer produces coarse buckets) and must preserve
/// the original pool order, which `sort_by` guarantees as a stable sort.
/// An empty pool yields an empty ranking, not an error.
pub fn rank(mut scored: Vec<ScoredCandidate>, top_k: usize) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(top_k);
    scored
}
