use crate::lod::clamped_linear_map;

/// Empirical log-length breakpoints from Wikipedia article data:
/// 10^2.7 ≈ 500 chars is a stub, 10^5.3 ≈ 200k chars an epic article.
const LENGTH_LOG_MIN: f64 = 2.7;
const LENGTH_LOG_MAX: f64 = 5.3;

/// Importance score (1.00-10.00, two decimals) derived from source
/// article length on a log scale. Missing or empty content scores the
/// minimum.
pub fn importance_from_length(length: Option<i64>) -> f64 {
    let Some(length) = length else {
        return 1.0;
    };
    if length <= 0 {
        return 1.0;
    }
    let score = clamped_linear_map(
        (length as f64).log10(),
        LENGTH_LOG_MIN,
        LENGTH_LOG_MAX,
        1.0,
        10.0,
    );
    (score * 100.0).round() / 100.0
}
