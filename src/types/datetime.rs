use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    // YYYYMMDD, optionally followed by T<digits>Z. Anything after is ignored.
    static ref RE_DATE_TIME: Regex = Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})(?:T([0-9]+)Z)?")
        .expect("date-time pattern is valid");
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CalDateTimeError {
    #[error("Invalid date-time format: {0}")]
    InvalidFormat(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

/// A decoded `DATE` or UTC `DATE-TIME` value.
///
/// Only the literal `Z` designator is understood. Values carrying a `TZID`
/// parameter or floating times are read as their date part, so the timezone
/// is always empty.
///
/// A time suffix whose digits do not form a time of day is kept as a
/// date-time without a time (`time()` is `None`) unless parsing is strict.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalDateTime {
    date: NaiveDate,
    time: Option<NaiveTime>,
    all_day: bool,
    timezone: String,
    legacy_offset: Option<u64>,
}

impl CalDateTime {
    pub fn parse(value: &str, strict_time: bool) -> Result<Self, CalDateTimeError> {
        let Some(captures) = RE_DATE_TIME.captures(value) else {
            return Err(CalDateTimeError::InvalidFormat(value.to_owned()));
        };
        // The pattern guarantees plain ASCII digits in every group
        let number = |idx: usize| captures[idx].parse::<u32>().unwrap_or_default();
        let year = captures[1].parse::<i32>().unwrap_or_default();

        let date = NaiveDate::from_ymd_opt(year, number(2), number(3))
            .ok_or_else(|| CalDateTimeError::InvalidDate(value.to_owned()))?;

        let Some(digits) = captures.get(4).map(|m| m.as_str()) else {
            return Ok(Self {
                date,
                time: Some(NaiveTime::MIN),
                all_day: true,
                timezone: String::new(),
                legacy_offset: None,
            });
        };

        let time = parse_time(digits);
        if time.is_none() && strict_time {
            return Err(CalDateTimeError::InvalidTime(value.to_owned()));
        }

        Ok(Self {
            date,
            time,
            all_day: false,
            timezone: String::new(),
            legacy_offset: digits.parse().ok(),
        })
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Midnight for bare dates, `None` when the time digits were unreadable.
    #[inline]
    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    #[inline]
    pub fn naive(&self) -> Option<NaiveDateTime> {
        self.time.map(|time| self.date.and_time(time))
    }

    /// Whether the value was a bare date.
    #[inline]
    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    #[inline]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// The time digits read as one integer, `90000` for `T090000Z`.
    ///
    /// Older readers of this format treated that number as an hour offset.
    /// `None` for bare dates and for digit runs that overflow.
    #[inline]
    pub fn legacy_offset(&self) -> Option<u64> {
        self.legacy_offset
    }
}

fn parse_time(digits: &str) -> Option<NaiveTime> {
    match digits.len() {
        6 => NaiveTime::parse_from_str(digits, "%H%M%S").ok(),
        4 => NaiveTime::parse_from_str(digits, "%H%M").ok(),
        2 => NaiveTime::from_hms_opt(digits.parse().ok()?, 0, 0),
        _ => None,
    }
}

impl fmt::Display for CalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.naive() {
            Some(naive) if !self.all_day => write!(f, "{}Z", naive.format("%Y-%m-%dT%H:%M:%S")),
            _ => write!(f, "{}", self.date.format("%Y-%m-%d")),
        }
    }
}
