use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar day as an integer day-number since CE (0001-01-01 = day 1).
///
/// Every date entering the layout engine is truncated to a `Day` at the
/// boundary, so interval comparisons are plain integer comparisons and
/// time-of-day can never leak into overlap or span arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(i32);

impl Day {
    pub fn from_date(date: NaiveDate) -> Self {
        Day(date.num_days_from_ce())
    }

    /// Build a day from year/month/day-of-month, if the combination is valid.
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Day::from_date)
    }

    /// The current day on the local clock.
    pub fn today() -> Self {
        Day::from_date(chrono::Local::now().date_naive())
    }

    pub fn to_date(self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0).unwrap_or(NaiveDate::MIN)
    }

    pub fn add_days(self, n: i32) -> Self {
        Day(self.0.saturating_add(n))
    }

    /// Calendar-aware month offset. `n` may be negative. Day-of-month is
    /// clamped when the target month is shorter (Jan 31 + 1 month = Feb 28).
    pub fn add_months(self, n: i32) -> Self {
        let date = self.to_date();
        let shifted = if n >= 0 {
            date.checked_add_months(Months::new(n.unsigned_abs()))
        } else {
            date.checked_sub_months(Months::new(n.unsigned_abs()))
        };
        shifted.map_or(self, Day::from_date)
    }

    pub fn add_years(self, n: i32) -> Self {
        self.add_months(n.saturating_mul(12))
    }

    /// Inclusive day count between two days: same day = 1, consecutive = 2.
    ///
    /// Uses the absolute difference, so the result is order-independent.
    /// Inverted ranges are rejected upstream at board validation; the
    /// absolute value here only keeps this function total.
    pub fn days_between(self, other: Day) -> i64 {
        (i64::from(self.0) - i64::from(other.0)).abs() + 1
    }

    pub fn weekday(self) -> Weekday {
        self.to_date().weekday()
    }

    /// The Monday of the week containing this day. A Sunday rolls back six
    /// days to the preceding Monday, not forward.
    pub fn start_of_week(self) -> Self {
        let back = self.weekday().num_days_from_monday() as i32;
        self.add_days(-back)
    }

    pub fn start_of_month(self) -> Self {
        self.to_date().with_day(1).map_or(self, Day::from_date)
    }

    pub fn start_of_year(self) -> Self {
        Day::from_ymd_opt(self.year(), 1, 1).unwrap_or(self)
    }

    pub fn year(self) -> i32 {
        self.to_date().year()
    }

    pub fn month(self) -> u32 {
        self.to_date().month()
    }

    pub fn day_of_month(self) -> u32 {
        self.to_date().day()
    }
}

impl From<NaiveDate> for Day {
    fn from(date: NaiveDate) -> Self {
        Day::from_date(date)
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_date().fmt(f)
    }
}

// --- Serde (ISO `YYYY-MM-DD` strings, hand-rolled like the date it wraps) ---

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Day::from_date)
            .map_err(serde::de::Error::custom)
    }
}
