use serde::{Deserialize, Serialize};

/// Tuning breakpoints for the level-of-detail cutoff. The defaults are
/// product-tuned: a viewport span of one year or less scores 1 (show
/// everything), ~500 years (10^2.7) or more scores 10; map zoom 10
/// (street level) scores 1, zoom 5 (country level) scores 10.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LodConfig {
    pub time_log_min: f64,
    pub time_log_max: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub importance_min: f64,
    pub importance_max: f64,
}

impl Default for LodConfig {
    fn default() -> Self {
        Self {
            time_log_min: 0.0,
            time_log_max: 2.7,
            zoom_min: 5.0,
            zoom_max: 10.0,
            importance_min: 1.0,
            importance_max: 10.0,
        }
    }
}

/// Linear interpolation from one range onto another, clamped to the
/// target range. The target range may be reversed.
pub fn clamped_linear_map(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    let span = from_max - from_min;
    if span == 0.0 {
        return to_min;
    }
    let normalized = ((value - from_min) / span).clamp(0.0, 1.0);
    to_min + normalized * (to_max - to_min)
}

/// Importance cutoff for the current view: the mean of a log-scaled time
/// score and a zoom score, clamped to the importance range. Events at or
/// above the cutoff are eligible for rendering. Monotonically
/// non-decreasing as the time span widens or the zoom pulls out.
pub fn lod_threshold(time_span_years: f64, zoom: f64, config: &LodConfig) -> f64 {
    let time_lod = clamped_linear_map(
        time_span_years.max(1.0).log10(),
        config.time_log_min,
        config.time_log_max,
        config.importance_min,
        config.importance_max,
    );
    let zoom_lod = clamped_linear_map(
        zoom,
        config.zoom_min,
        config.zoom_max,
        config.importance_max,
        config.importance_min,
    );
    ((time_lod + zoom_lod) / 2.0).clamp(config.importance_min, config.importance_max)
}

/// Visibility gate. A selected (expanded) event bypasses the threshold.
pub fn is_visible(importance: f64, threshold: f64, selected: bool) -> bool {
    selected || importance >= threshold
}
