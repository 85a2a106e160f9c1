use std::path::Path;

use serde::Deserialize;

use crate::layout::CardLayoutConfig;
use crate::lod::LodConfig;

/// All tunable parameters of the engine, owned by the application entry
/// point and passed down explicitly.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub layout: CardLayoutConfig,
    pub lod: LodConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    card_width: Option<f32>,
    gap: Option<f32>,
    vertical_stagger: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LodConfigFile {
    time_log_min: Option<f64>,
    time_log_max: Option<f64>,
    zoom_min: Option<f64>,
    zoom_max: Option<f64>,
    importance_min: Option<f64>,
    importance_max: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    layout: Option<LayoutConfigFile>,
    lod: Option<LodConfigFile>,
}

/// Loads engine configuration, layering a camelCase JSON file of
/// overrides over the defaults. `None` yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let mut config = EngineConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.card_width {
            config.layout.card_width = v;
        }
        if let Some(v) = layout.gap {
            config.layout.gap = v;
        }
        if let Some(v) = layout.vertical_stagger {
            config.layout.vertical_stagger = v;
        }
    }

    if let Some(lod) = parsed.lod {
        if let Some(v) = lod.time_log_min {
            config.lod.time_log_min = v;
        }
        if let Some(v) = lod.time_log_max {
            config.lod.time_log_max = v;
        }
        if let Some(v) = lod.zoom_min {
            config.lod.zoom_min = v;
        }
        if let Some(v) = lod.zoom_max {
            config.lod.zoom_max = v;
        }
        if let Some(v) = lod.importance_min {
            config.lod.importance_min = v;
        }
        if let Some(v) = lod.importance_max {
            config.lod.importance_max = v;
        }
    }

    Ok(config)
}
