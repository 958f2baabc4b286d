mod composer;
mod consts;
mod keyword;
mod prelude;

pub use composer::{DayComposer, TimeComposer, TimeZoneComposer};
pub use consts::*;
pub use keyword::{KEYWORDS, KeywordCategory, KeywordEntry, lookup, lookup_word};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The shared output record of one parse attempt.
///
/// Each slot is owned by exactly one composer: [`DayComposer`] writes
/// year, month, and day, [`TimeComposer`] writes hour, minute, and
/// second, and [`TimeZoneComposer`] writes the UTC offset. A slot is
/// written at most once per parse, and the record is only meaningful
/// once all three finalize calls have succeeded; after any failure the
/// whole record must be discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRecord {
    pub year: i32,
    /// 0-based month, 0-11
    pub month: u8,
    /// Day of month, 1-31; validity against the specific month and
    /// year is a downstream concern.
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// Signed offset from UTC in seconds; `None` means no offset
    /// appeared in the input.
    pub utc_offset_seconds: Option<i32>,
}

impl fmt::Display for DateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year,
            self.month + 1,
            self.day,
            self.hour,
            self.minute,
            self.second
        )?;
        if let Some(offset) = self.utc_offset_seconds {
            let sign = if offset < 0 { '-' } else { '+' };
            let magnitude = offset.unsigned_abs();
            let hours = magnitude / SECONDS_PER_HOUR.unsigned_abs();
            let minutes = magnitude % SECONDS_PER_HOUR.unsigned_abs() / SECONDS_PER_MINUTE.unsigned_abs();
            write!(f, "{sign}{hours:02}:{minutes:02}")?;
        }
        Ok(())
    }
}

/// Why a composer's `finalize` rejected its collected components.
///
/// Callers only need success or failure to abort an overall parse; the
/// variants exist for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    /// Too few numeric components were collected to resolve a date.
    #[error("Expected at least {expected} date component(s), found {found}")]
    MissingComponents { expected: usize, found: usize },

    #[error("Invalid month: {0} (must be {min}-{max})", min = MIN_MONTH, max = MAX_MONTH)]
    InvalidMonth(i32),

    #[error("Invalid day: {0} (must be {min}-{max})", min = MIN_DAY, max = MAX_DAY)]
    InvalidDay(i32),

    #[error("Invalid hour: {0} (must be 0-{max})", max = MAX_HOUR)]
    InvalidHour(i32),

    /// A meridiem marker was seen but the hour does not read as a
    /// 12-hour clock value.
    #[error("Invalid 12-hour clock hour: {0} (must be {min}-{max})", min = MIN_HOUR_12, max = HOURS_PER_MERIDIEM)]
    InvalidHour12(i32),

    #[error("Invalid minute: {0} (must be 0-{max})", max = MAX_MINUTE)]
    InvalidMinute(i32),

    #[error("Invalid second: {0} (must be 0-{max})", max = MAX_SECOND)]
    InvalidSecond(i32),

    /// The UTC offset does not fit the record's seconds field.
    #[error("UTC offset out of range")]
    OffsetOverflow,
}
