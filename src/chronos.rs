use serde::{Deserialize, Serialize};

/// Non-leap month lengths, January first.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day-offset guard against floating point underflow at exact month/day
/// boundaries during decoding. Any value well under one millisecond of a
/// day preserves round trips.
const DAY_EPSILON: f64 = 1e-9;

/// Gregorian leap-year rule over astronomical year numbering, so year 0
/// (1 BC) is evaluated by the same formula and is leap, year -1 (2 BC) is
/// not, year -4 (5 BC) is.
pub fn is_leap_year(astro_year: i32) -> bool {
    (astro_year % 4 == 0 && astro_year % 100 != 0) || (astro_year % 400 == 0)
}

/// Length of a month (1-12) in the proleptic Gregorian calendar. Months
/// outside 1-12 are a caller contract violation; release builds clamp.
pub fn days_in_month(astro_year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month), "month out of range: {month}");
    let idx = month.clamp(1, 12) as usize - 1;
    if idx == 1 && is_leap_year(astro_year) {
        29
    } else {
        MONTH_DAYS[idx]
    }
}

pub fn days_in_year(astro_year: i32) -> u32 {
    if is_leap_year(astro_year) { 366 } else { 365 }
}

/// Converts a historical year (-1 = 1 BC, no year zero) to astronomical
/// numbering (0 = 1 BC, -1 = 2 BC). AD years are identical in both.
pub fn astronomical_year(historical: i32) -> i32 {
    if historical < 0 { historical + 1 } else { historical }
}

/// Maps a historical year to the start of its span on the slider axis.
/// AD years shift down by 1 (1 AD starts at 0.0) while BC years are left
/// unshifted, which removes the discontinuity at the BC/AD boundary: the
/// coordinate is `astronomical year - 1` on both sides.
pub fn to_slider_value(year: i32) -> f64 {
    if year > 0 { (year - 1) as f64 } else { year as f64 }
}

/// Granularity tag telling consumers how much of a `ChronosTime` to trust.
/// Fields finer than the precision are semantically don't-care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Millennium,
    Century,
    Decade,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    #[default]
    Unknown,
}

impl Precision {
    /// True when the tag carries at least day granularity.
    pub fn has_day(self) -> bool {
        matches!(
            self,
            Precision::Day
                | Precision::Hour
                | Precision::Minute
                | Precision::Second
                | Precision::Millisecond
        )
    }

    pub fn has_time(self) -> bool {
        matches!(
            self,
            Precision::Hour | Precision::Minute | Precision::Second | Precision::Millisecond
        )
    }
}

/// A calendar timestamp. `year` uses historical numbering: -44 is 44 BC,
/// 1945 is 1945 AD, and there is no year zero — the zero-skip is handled
/// only by the slider-coordinate mapping. Absent fields default to the
/// start of their span (month/day to 1, time-of-day to 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChronosTime {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub millisecond: Option<u32>,
    pub precision: Precision,
}

impl ChronosTime {
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            precision: Precision::Year,
            ..Self::default()
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
            precision: Precision::Day,
            ..Self::default()
        }
    }

    pub fn with_time(mut self, hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        self.hour = Some(hour);
        self.minute = Some(minute);
        self.second = Some(second);
        self.millisecond = Some(millisecond);
        self.precision = Precision::Millisecond;
        self
    }

    /// Fraction of the year elapsed at this timestamp, always in [0, 1).
    /// Jan 1, 00:00:00.000 of any year yields exactly 0.0.
    pub fn year_fraction(&self) -> f64 {
        let astro = astronomical_year(self.year);
        let month = self.month.unwrap_or(1);
        let day = self.day.unwrap_or(1);

        let mut day_of_year = 0.0;
        for m in 1..month.clamp(1, 12) {
            day_of_year += days_in_month(astro, m) as f64;
        }
        day_of_year += (day.max(1) - 1) as f64;

        let time_of_day = self.hour.unwrap_or(0) as f64 / 24.0
            + self.minute.unwrap_or(0) as f64 / 1_440.0
            + self.second.unwrap_or(0) as f64 / 86_400.0
            + self.millisecond.unwrap_or(0) as f64 / 86_400_000.0;

        (day_of_year + time_of_day) / days_in_year(astro) as f64
    }

    /// Continuous astronomical year: `astronomical_year + year_fraction`.
    /// Suitable for sorting and comparison across the BC/AD boundary.
    pub fn astro_year(&self) -> f64 {
        astronomical_year(self.year) as f64 + self.year_fraction()
    }

    /// Slider-axis coordinate: the shifted integer year plus the plain
    /// year fraction. The shift applies at year granularity only, so BC
    /// and AD timestamps at the same fractional position stay comparable.
    pub fn slider_value(&self) -> f64 {
        to_slider_value(self.year) + self.year_fraction()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Era {
    Bc,
    Ad,
}

/// Calendar fields recovered from a slider coordinate. `year` is the
/// positive display year paired with an era tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedTime {
    pub year: i32,
    pub era: Era,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl DecodedTime {
    /// Signed historical year (-44 for 44 BC).
    pub fn historical_year(&self) -> i32 {
        match self.era {
            Era::Ad => self.year,
            Era::Bc => -self.year,
        }
    }

    pub fn to_chronos(&self, precision: Precision) -> ChronosTime {
        ChronosTime {
            year: self.historical_year(),
            month: Some(self.month),
            day: Some(self.day),
            hour: Some(self.hour),
            minute: Some(self.minute),
            second: Some(self.second),
            millisecond: Some(self.millisecond),
            precision,
        }
    }
}

/// Inverse of [`ChronosTime::slider_value`]: recovers calendar fields from
/// a slider coordinate. Integer-year boundaries round-trip exactly;
/// sub-day fields recover to the representable millisecond.
pub fn decode_slider_value(value: f64) -> DecodedTime {
    let floor_val = value.floor();
    let fraction = (value - floor_val).abs();

    let (year, era) = if floor_val >= 0.0 {
        (floor_val as i32 + 1, Era::Ad)
    } else {
        (floor_val.abs() as i32, Era::Bc)
    };
    let astro = match era {
        Era::Ad => year,
        Era::Bc => -(year - 1),
    };

    // Walk forward through the months until the remaining day count fits
    // inside the current one. The epsilon keeps exact boundaries from
    // landing a hair short of the next month.
    let mut remaining = fraction * days_in_year(astro) as f64 + DAY_EPSILON;
    let mut month = 1;
    while month < 12 {
        let len = days_in_month(astro, month) as f64;
        if remaining < len {
            break;
        }
        remaining -= len;
        month += 1;
    }
    let day = (remaining.floor() as u32 + 1).min(days_in_month(astro, month));

    let day_fraction = remaining - remaining.floor();
    let hours = day_fraction * 24.0;
    let hour = hours.floor();
    let minutes = (hours - hour) * 60.0;
    let minute = minutes.floor();
    let seconds = (minutes - minute) * 60.0;
    let second = seconds.floor();
    let millisecond = ((seconds - second) * 1000.0).floor();

    DecodedTime {
        year,
        era,
        month,
        day,
        hour: hour as u32,
        minute: minute as u32,
        second: second as u32,
        millisecond: millisecond as u32,
    }
}
