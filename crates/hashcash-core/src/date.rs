//! Stamp dates.
//!
//! Dates are rendered with a truncatable pattern, `YYMMDDhhmmss` by default.
//! A stamp may carry any leading prefix of that pattern (`YYMMDD`, `YYMMDDhhmm`,
//! ...), so a date remembers its own precision.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StampError;
use crate::types::Field;
use crate::validation::validate_date_string;

/// The canonical strftime pattern for stamp dates.
pub const DEFAULT_DATE_FORMAT: &str = "%y%m%d%H%M%S";

/// Earliest year a two-digit stamp year can name.
pub const MIN_YEAR: i32 = 1970;

/// Latest year a two-digit stamp year can name.
pub const MAX_YEAR: i32 = 2069;

/// strftime tokens of the canonical pattern, in order.
const TOKENS: [&str; 6] = ["%y", "%m", "%d", "%H", "%M", "%S"];

/// How many components of `YYMMDDhhmmss` a date carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatePattern {
    /// `YY`
    Year = 1,
    /// `YYMM`
    Month = 2,
    /// `YYMMDD`
    Day = 3,
    /// `YYMMDDhh`
    Hour = 4,
    /// `YYMMDDhhmm`
    Minute = 5,
    /// `YYMMDDhhmmss`
    Second = 6,
}

impl DatePattern {
    /// The full pattern.
    pub const FULL: Self = Self::Second;

    fn from_components(n: usize) -> Option<Self> {
        match n {
            1 => Some(Self::Year),
            2 => Some(Self::Month),
            3 => Some(Self::Day),
            4 => Some(Self::Hour),
            5 => Some(Self::Minute),
            6 => Some(Self::Second),
            _ => None,
        }
    }

    /// Number of pattern components.
    pub const fn components(self) -> usize {
        self as usize
    }

    /// Number of digits a date with this pattern renders to.
    pub const fn digits(self) -> usize {
        self.components() * 2
    }

    /// Accept a strftime pattern only if it is a component-wise prefix of
    /// [`DEFAULT_DATE_FORMAT`].
    ///
    /// `"%y%m%d"` is accepted; `"%Y%m%d"`, `"%m%d"` and `"%y%m%d%S"` are not.
    pub fn from_format(format: &str) -> Result<Self, StampError> {
        let mut rest = format;
        let mut n = 0;
        while !rest.is_empty() {
            let token = TOKENS.get(n).ok_or_else(|| {
                StampError::format(format!("date pattern {format:?} is longer than {DEFAULT_DATE_FORMAT:?}"))
            })?;
            rest = rest.strip_prefix(*token).ok_or_else(|| {
                StampError::format(format!(
                    "date pattern {format:?} is not a prefix of {DEFAULT_DATE_FORMAT:?}"
                ))
            })?;
            n += 1;
        }
        Self::from_components(n)
            .ok_or_else(|| StampError::format("date pattern must not be empty"))
    }

    /// The strftime pattern for this precision.
    pub fn format_str(self) -> &'static str {
        &DEFAULT_DATE_FORMAT[..self.components() * 2]
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self::FULL
    }
}

/// A stamp date: a UTC timestamp plus the pattern it is rendered with.
///
/// Components finer than the pattern are zeroed on construction, so a date
/// always equals what parsing its rendering yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StampDate {
    when: NaiveDateTime,
    pattern: DatePattern,
}

impl StampDate {
    /// Create a date, truncating `when` to the precision of `pattern`.
    ///
    /// The year must lie in [`MIN_YEAR`]..=[`MAX_YEAR`]; outside that window
    /// the two-digit rendering would parse back to a different century.
    pub fn new(when: NaiveDateTime, pattern: DatePattern) -> Result<Self, StampError> {
        check_year(when.year())?;
        Ok(Self {
            when: truncate(when, pattern),
            pattern,
        })
    }

    /// Create a date using a caller-supplied strftime pattern, which must be
    /// a prefix of the canonical one.
    pub fn with_format(when: NaiveDateTime, format: &str) -> Result<Self, StampError> {
        Self::new(when, DatePattern::from_format(format)?)
    }

    /// The (truncated) timestamp.
    pub fn when(&self) -> NaiveDateTime {
        self.when
    }

    /// The rendering pattern.
    pub fn pattern(&self) -> DatePattern {
        self.pattern
    }

    /// Render the date as digits.
    pub fn render(&self) -> String {
        self.when.format(self.pattern.format_str()).to_string()
    }

    /// Parse a date component of a stamp.
    ///
    /// Two-digit years 00-69 map to 2000-2069 and 70-99 to 1970-1999. Missing
    /// components default to the start of the period.
    pub fn parse(s: &str) -> Result<Self, StampError> {
        validate_date_string(s)?;
        if s.len() % 2 != 0 {
            return Err(StampError::format(format!(
                "date {s:?} has an odd number of digits"
            )));
        }
        let pattern = DatePattern::from_components(s.len() / 2).ok_or_else(|| {
            StampError::format(format!("date {s:?} must have 2 to 12 digits"))
        })?;

        // Digits only, so every pair parses.
        let pairs: Vec<u32> = s
            .as_bytes()
            .chunks(2)
            .map(|p| u32::from(p[0] - b'0') * 10 + u32::from(p[1] - b'0'))
            .collect();
        let part = |i: usize, default: u32| pairs.get(i).copied().unwrap_or(default);

        let yy = part(0, 0);
        let year = if yy < 70 { 2000 + yy as i32 } else { 1900 + yy as i32 };
        let month = check_range(part(1, 1), 1, 12)?;
        let day = check_range(part(2, 1), 1, 31)?;
        let hour = check_range(part(3, 0), 0, 23)?;
        let minute = check_range(part(4, 0), 0, 59)?;
        let second = check_range(part(5, 0), 0, 59)?;

        let when = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .ok_or(StampError::OutOfRange {
                field: Field::Date,
                value: u64::from(day),
                max: u64::from(days_in_month(year, month)),
            })?;

        Ok(Self { when, pattern })
    }
}

impl fmt::Display for StampDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl TryFrom<String> for StampDate {
    type Error = StampError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<StampDate> for String {
    fn from(d: StampDate) -> Self {
        d.render()
    }
}

fn check_range(value: u32, min: u32, max: u32) -> Result<u32, StampError> {
    if value < min || value > max {
        return Err(StampError::OutOfRange {
            field: Field::Date,
            value: u64::from(value),
            max: u64::from(max),
        });
    }
    Ok(value)
}

fn check_year(year: i32) -> Result<(), StampError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(StampError::OutOfRange {
            field: Field::Date,
            value: u64::try_from(year).unwrap_or(0),
            max: MAX_YEAR as u64,
        });
    }
    Ok(())
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|n| n.pred_opt()).map(|d| d.day()).unwrap_or(31)
}

fn truncate(when: NaiveDateTime, pattern: DatePattern) -> NaiveDateTime {
    let n = pattern.components();
    let keep = |i: usize, value: u32, default: u32| if n > i { value } else { default };

    let month = keep(1, when.month(), 1);
    let day = keep(2, when.day(), 1);
    let hour = keep(3, when.hour(), 0);
    let minute = keep(4, when.minute(), 0);
    let second = keep(5, when.second(), 0);

    // Every component comes from a valid datetime or is the period start.
    NaiveDate::from_ymd_opt(when.year(), month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .unwrap_or(when)
}
