use crate::chronos::{ChronosTime, Era, Precision, decode_slider_value};
use crate::event::Event;

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Viewport spans (in years) below which slider ticks gain detail, from
/// widest to narrowest. Tuning constants, not load-bearing invariants; the
/// contract is only that narrower spans never show less detail.
const SPAN_SHOW_DATE: f64 = 1.5;
const SPAN_SHOW_TIME: f64 = 0.002;
const SPAN_SHOW_MILLIS: f64 = 5e-6;

fn era_label(year: i32) -> (i32, &'static str) {
    if year > 0 { (year, "AD") } else { (-year, "BC") }
}

fn month_name(month: u32) -> &'static str {
    MONTHS_SHORT[(month.clamp(1, 12) - 1) as usize]
}

/// Renders a timestamp at its own precision: `"Aug 15, 1945 AD"` at day
/// precision, `"Aug 1945 AD"` at month, `"1945 AD"` at year or coarser,
/// with an `" at HH:MM[:SS[.mmm]]"` suffix when the precision reaches into
/// the time of day.
pub fn format_chronos_time(time: &ChronosTime) -> String {
    let (display_year, era) = era_label(time.year);
    let month = time.month.unwrap_or(1);
    let day = time.day.unwrap_or(1);

    let date = match time.precision {
        Precision::Month => format!("{} {} {}", month_name(month), display_year, era),
        p if p.has_day() => format!("{} {}, {} {}", month_name(month), day, display_year, era),
        _ => format!("{} {}", display_year, era),
    };

    if !time.precision.has_time() {
        return date;
    }

    let hour = time.hour.unwrap_or(0);
    let minute = time.minute.unwrap_or(0);
    let mut clock = format!("{:02}:{:02}", hour, minute);
    if matches!(time.precision, Precision::Second | Precision::Millisecond) {
        clock.push_str(&format!(":{:02}", time.second.unwrap_or(0)));
    }
    if time.precision == Precision::Millisecond {
        clock.push_str(&format!(".{:03}", time.millisecond.unwrap_or(0)));
    }
    format!("{} at {}", date, clock)
}

/// A point event renders as its start; a ranged event as `"start – end"`.
pub fn format_event_date_range(event: &Event) -> String {
    let start = format_chronos_time(&event.start);
    match &event.end {
        Some(end) => format!("{} – {}", start, format_chronos_time(end)),
        None => start,
    }
}

/// Renders a slider coordinate as a tick label, choosing precision from
/// the current viewport span: year/era for wide views, calendar date for
/// spans under ~18 months, wall-clock time for sub-day spans, millisecond
/// time for spans of minutes.
pub fn format_slider_tick(value: f64, span_years: f64) -> String {
    let decoded = decode_slider_value(value);
    let precision = if span_years < SPAN_SHOW_MILLIS {
        Precision::Millisecond
    } else if span_years < SPAN_SHOW_TIME {
        Precision::Second
    } else if span_years < SPAN_SHOW_DATE {
        Precision::Day
    } else {
        Precision::Year
    };
    format_chronos_time(&decoded.to_chronos(precision))
}
