use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Card footprint and separation used by the collision layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardLayoutConfig {
    pub card_width: f32,
    pub gap: f32,
    pub vertical_stagger: f32,
}

impl Default for CardLayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 250.0,
            gap: 20.0,
            vertical_stagger: 25.0,
        }
    }
}

/// An event id with its raw projected anchor in screen pixels. Rebuilt on
/// every layout pass.
#[derive(Debug, Clone)]
pub struct ScreenItem {
    pub id: String,
    pub x: f32,
    pub y: f32,
}

/// Pixel displacement from an item's raw anchor, consumed by the renderer
/// for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardOffset {
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Projects events with known coordinates into screen space via the
/// caller-supplied map projection. Events without coordinates are skipped.
pub fn project_items<F>(events: &[Event], project: F) -> Vec<ScreenItem>
where
    F: Fn(f64, f64) -> (f32, f32),
{
    events
        .iter()
        .filter_map(|event| {
            let lat = event.location.lat?;
            let lng = event.location.lng?;
            let (x, y) = project(lat, lng);
            Some(ScreenItem {
                id: event.id.clone(),
                x,
                y,
            })
        })
        .collect()
}

/// Computes per-card pixel offsets that spread overlapping cards apart.
///
/// Items are sorted by x (stable, so equal anchors keep input order) and
/// chained into clusters: each item within `card_width + gap` of its
/// predecessor extends the current cluster, so a long run of mutually
/// close items forms one cluster even when its ends are far apart.
/// Singleton clusters stay untouched. Larger clusters are re-spread
/// symmetrically around their mean anchor x, and staggered vertically
/// into an arch so connector lines fan out without crossing.
pub fn compute_card_layout(
    items: &[ScreenItem],
    config: &CardLayoutConfig,
) -> BTreeMap<String, CardOffset> {
    let mut offsets = BTreeMap::new();
    if items.is_empty() {
        return offsets;
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        items[a]
            .x
            .partial_cmp(&items[b].x)
            .unwrap_or(Ordering::Equal)
    });

    let collision_distance = config.card_width + config.gap;
    let mut clusters: Vec<Vec<usize>> = Vec::new();
    let mut current = vec![order[0]];
    for &idx in &order[1..] {
        let prev = *current.last().unwrap_or(&order[0]);
        if items[idx].x - items[prev].x < collision_distance {
            current.push(idx);
        } else {
            clusters.push(std::mem::replace(&mut current, vec![idx]));
        }
    }
    clusters.push(current);

    for cluster in &clusters {
        if cluster.len() == 1 {
            offsets.insert(items[cluster[0]].id.clone(), CardOffset::default());
            continue;
        }

        let n = cluster.len();
        let average_anchor_x = cluster.iter().map(|&idx| items[idx].x).sum::<f32>() / n as f32;
        let spread = n as f32 * config.card_width + (n - 1) as f32 * config.gap;
        let start_screen_x = average_anchor_x - spread / 2.0 + config.card_width / 2.0;
        let mid_idx = (n - 1) as f32 / 2.0;

        for (i, &idx) in cluster.iter().enumerate() {
            let target_x = start_screen_x + i as f32 * (config.card_width + config.gap);
            offsets.insert(
                items[idx].id.clone(),
                CardOffset {
                    offset_x: target_x - items[idx].x,
                    offset_y: -(mid_idx - (i as f32 - mid_idx).abs()) * config.vertical_stagger,
                },
            );
        }
    }

    offsets
}
