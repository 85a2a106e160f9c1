pub mod chronos;
pub mod config;
pub mod event;
pub mod format;
pub mod layout;
pub mod lod;
pub mod parse;
pub mod score;

pub use chronos::{
    ChronosTime, DecodedTime, Era, Precision, astronomical_year, days_in_month, days_in_year,
    decode_slider_value, is_leap_year, to_slider_value,
};
pub use config::{EngineConfig, load_config};
pub use event::{Event, Location, parse_wkt_point};
pub use format::{format_chronos_time, format_event_date_range, format_slider_tick};
pub use layout::{CardLayoutConfig, CardOffset, ScreenItem, compute_card_layout, project_items};
pub use lod::{LodConfig, clamped_linear_map, is_visible, lod_threshold};
pub use parse::{TimeParseError, parse_chronos_date};
pub use score::importance_from_length;
