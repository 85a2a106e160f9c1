use serde::{Deserialize, Serialize};

use crate::chronos::ChronosTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeoPrecision {
    Spot,
    Area,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GeoCertainty {
    Definite,
    Approximate,
    #[default]
    Unknown,
}

/// Where an event happened. Coordinates are optional; events without them
/// never reach the layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub name: Option<String>,
    pub precision: GeoPrecision,
    pub certainty: GeoCertainty,
}

/// Parses a WKT `Point(lng lat)` string into `(lat, lng)`. WKT stores
/// longitude first. Returns `None` for malformed input or coordinates
/// outside the valid geographic range.
pub fn parse_wkt_point(wkt: &str) -> Option<(f64, f64)> {
    let clean = wkt
        .trim()
        .trim_start_matches("POINT")
        .trim_start_matches("Point")
        .trim_start_matches("point")
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')');
    let mut parts = clean.split_whitespace();
    let lng: f64 = parts.next()?.parse().ok()?;
    let lat: f64 = parts.next()?.parse().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some((lat, lng))
}

impl Location {
    pub fn from_wkt_point(wkt: &str) -> Option<Self> {
        let (lat, lng) = parse_wkt_point(wkt)?;
        Some(Self {
            lat: Some(lat),
            lng: Some(lng),
            ..Self::default()
        })
    }
}

/// An event record as delivered by the surrounding application. Importance
/// lives on a 1-10 scale; values outside it mean the score was never
/// computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub start: ChronosTime,
    pub end: Option<ChronosTime>,
    pub location: Location,
    pub importance: f64,
    pub sources: Vec<Link>,
    pub collections: Vec<String>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            summary: String::new(),
            start: ChronosTime::default(),
            end: None,
            location: Location::default(),
            importance: 0.0,
            sources: Vec::new(),
            collections: Vec::new(),
        }
    }
}

impl Event {
    /// Whether the event is temporally active at the playhead coordinate.
    /// Point events are active within `point_threshold` of their start;
    /// ranged events while the playhead sits inside the range.
    pub fn is_active(&self, current: f64, point_threshold: f64) -> bool {
        let start = self.start.slider_value();
        match &self.end {
            Some(end) => start <= current && current <= end.slider_value(),
            None => (current - start).abs() <= point_threshold,
        }
    }
}
