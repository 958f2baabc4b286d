use crate::consts::{
    CENTURY_1900, CENTURY_2000, HOURS_PER_MERIDIEM, MAX_DAY, MAX_HOUR, MAX_MINUTE, MAX_MONTH,
    MAX_SECOND, MIN_DAY, MIN_HOUR_12, MIN_MONTH, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    YEAR_WINDOW_MAX, YEAR_WINDOW_PIVOT,
};
use crate::{ComposeError, DateRecord};

/// Number of numeric components a composer buffers
const COMPONENT_CAPACITY: usize = 3;

/// Accumulates the numeric date components of a parse, in token order,
/// plus an optional month resolved from a keyword. `finalize` decides
/// which component is the year, month, and day.
///
/// One instance serves exactly one parse attempt; `finalize` consumes it.
#[derive(Debug, Default, Clone)]
pub struct DayComposer {
    comp: [i32; COMPONENT_CAPACITY],
    len: usize,
    named_month: Option<i32>,
}

impl DayComposer {
    /// Appends a numeric component. Returns whether it was accepted;
    /// components past the buffer capacity are rejected.
    pub fn add(&mut self, value: i32) -> bool {
        if self.len < COMPONENT_CAPACITY {
            self.comp[self.len] = value;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Records a month resolved from a month-name keyword (1-based).
    /// Must be called at most once per parse.
    pub fn set_named_month(&mut self, value: i32) {
        debug_assert!(self.named_month.is_none());
        self.named_month = Some(value);
    }

    /// Resolves the collected components into year, month, and day and
    /// writes them to `out`. The month is written 0-based.
    ///
    /// Without a named month, three components whose first entry cannot
    /// be a day of month are read as year-month-day; everything else is
    /// read as month-day with an optional trailing year. With a named
    /// month, a lone component is the day, and a leading component that
    /// cannot be a day is the year. An absent year defaults to 0 and is
    /// windowed to 2000.
    ///
    /// # Errors
    /// Returns `ComposeError` if too few components were collected or
    /// the resolved month or day is out of range. Nothing is written to
    /// `out` on failure.
    pub fn finalize(self, out: &mut DateRecord) -> Result<(), ComposeError> {
        let (year, month, day) = if let Some(named) = self.named_month {
            if self.len == 0 {
                return Err(ComposeError::MissingComponents { expected: 1, found: self.len });
            }
            if self.len == 1 {
                (0, named, self.comp[0])
            } else if !is_day_value(self.comp[0]) {
                // year precedes day: YMD, MYD, YDM
                (self.comp[0], named, self.comp[1])
            } else {
                // day precedes year: DMY, MDY, DYM
                (self.comp[1], named, self.comp[0])
            }
        } else {
            if self.len < 2 {
                return Err(ComposeError::MissingComponents { expected: 2, found: self.len });
            }
            if self.len == 3 && !is_day_value(self.comp[0]) {
                // YMD
                (self.comp[0], self.comp[1], self.comp[2])
            } else {
                // MD(Y), year defaults to 0
                let year = if self.len == 3 { self.comp[2] } else { 0 };
                (year, self.comp[0], self.comp[1])
            }
        };

        let year = window_year(year);
        let month = check_month(month)?;
        let day = check_day(day)?;

        out.year = year;
        out.month = month - 1; // 0-based
        out.day = day;
        Ok(())
    }
}

/// Accumulates hour, minute, and second components in slot order, plus
/// an optional meridiem hour offset. `finalize` converts a 12-hour
/// clock reading to 24-hour form.
#[derive(Debug, Default, Clone)]
pub struct TimeComposer {
    comp: [i32; COMPONENT_CAPACITY],
    len: usize,
    meridiem_offset: Option<i32>,
}

impl TimeComposer {
    /// Fills the next unfilled slot (hour, then minute, then second).
    /// Returns whether the value was accepted.
    pub fn add(&mut self, value: i32) -> bool {
        if self.len < COMPONENT_CAPACITY {
            self.comp[self.len] = value;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Records the hour offset of a meridiem keyword (0 for AM, 12 for
    /// PM). Must be called at most once per parse.
    pub fn set_meridiem_offset(&mut self, offset: i32) {
        debug_assert!(offset == 0 || offset == i32::from(HOURS_PER_MERIDIEM));
        debug_assert!(self.meridiem_offset.is_none());
        self.meridiem_offset = Some(offset);
    }

    /// Validates the collected time and writes it to `out`. Unfilled
    /// slots default to 0.
    ///
    /// With a meridiem offset the hour must read as a 12-hour clock
    /// value (1-12); 12 AM collapses to 0 and 12 PM stays 12.
    ///
    /// # Errors
    /// Returns `ComposeError` if the hour is not a valid 12-hour value
    /// while a meridiem offset is set, or the final hour, minute, or
    /// second is out of range. Nothing is written to `out` on failure.
    pub fn finalize(self, out: &mut DateRecord) -> Result<(), ComposeError> {
        let mut hour = self.comp[0];
        let minute = self.comp[1];
        let second = self.comp[2];

        if let Some(offset) = self.meridiem_offset {
            if !is_hour12_value(hour) {
                return Err(ComposeError::InvalidHour12(hour));
            }
            hour = hour % i32::from(HOURS_PER_MERIDIEM) + offset;
        }

        let hour = check_hour(hour)?;
        let minute = check_minute(minute)?;
        let second = check_second(second)?;

        out.hour = hour;
        out.minute = minute;
        out.second = second;
        Ok(())
    }
}

/// Accumulates an explicit UTC offset: a sign plus hour and minute
/// magnitudes, or a pre-signed hour from a timezone keyword.
///
/// If no sign was ever recorded, `finalize` writes the "no offset
/// known" marker and succeeds; what that means is the caller's call.
#[derive(Debug, Default, Clone)]
pub struct TimeZoneComposer {
    sign: Option<i32>,
    hour: Option<i32>,
    minute: Option<i32>,
}

impl TimeZoneComposer {
    /// Records the offset sign (+1 or -1). Calling this at all marks
    /// the offset as present. Must be called at most once per parse.
    pub fn set_sign(&mut self, sign: i32) {
        debug_assert!(sign == 1 || sign == -1);
        debug_assert!(self.sign.is_none());
        self.sign = Some(sign);
    }

    /// Records the hour magnitude. Must be called at most once per parse.
    pub fn set_hour(&mut self, hour: i32) {
        debug_assert!(self.hour.is_none());
        self.hour = Some(hour);
    }

    /// Records the minute magnitude. Must be called at most once per parse.
    pub fn set_minute(&mut self, minute: i32) {
        debug_assert!(self.minute.is_none());
        self.minute = Some(minute);
    }

    /// Records a timezone resolved from a keyword. Keyword table rows
    /// store the final signed hour offset, not a magnitude, so the sign
    /// is fixed to +1 here; mixing this with `set_sign` would negate an
    /// already-signed hour.
    pub fn set_named_zone(&mut self, hours: i32) {
        debug_assert!(self.sign.is_none());
        self.sign = Some(1);
        self.hour = Some(hours);
        self.minute = Some(0);
    }

    /// Writes the resolved offset to `out`. No recorded sign means no
    /// offset appeared in the input, which writes the explicit
    /// "unspecified" marker and still succeeds. Unset hour and minute
    /// default to 0.
    ///
    /// # Errors
    /// Returns `ComposeError::OffsetOverflow` if the offset in seconds
    /// does not fit the record's offset field.
    pub fn finalize(self, out: &mut DateRecord) -> Result<(), ComposeError> {
        let Some(sign) = self.sign else {
            out.utc_offset_seconds = None;
            return Ok(());
        };

        let hour = i64::from(self.hour.unwrap_or(0));
        let minute = i64::from(self.minute.unwrap_or(0));
        let total = i64::from(sign)
            * (hour * i64::from(SECONDS_PER_HOUR) + minute * i64::from(SECONDS_PER_MINUTE));
        let total = i32::try_from(total).map_err(|_| ComposeError::OffsetOverflow)?;

        out.utc_offset_seconds = Some(total);
        Ok(())
    }
}

/// Maps a two-digit year into its century: [0,49] to the 2000s,
/// [50,99] to the 1900s. Anything else passes through unchanged.
fn window_year(year: i32) -> i32 {
    if (0..=YEAR_WINDOW_PIVOT).contains(&year) {
        year + CENTURY_2000
    } else if (YEAR_WINDOW_PIVOT + 1..=YEAR_WINDOW_MAX).contains(&year) {
        year + CENTURY_1900
    } else {
        year
    }
}

/// Whether a raw component is plausible as a day of month. Drives the
/// year/day ordering heuristic in `DayComposer::finalize`.
fn is_day_value(raw: i32) -> bool {
    (i32::from(MIN_DAY)..=i32::from(MAX_DAY)).contains(&raw)
}

fn is_hour12_value(raw: i32) -> bool {
    (i32::from(MIN_HOUR_12)..=i32::from(HOURS_PER_MERIDIEM)).contains(&raw)
}

fn check_month(raw: i32) -> Result<u8, ComposeError> {
    u8::try_from(raw)
        .ok()
        .filter(|month| (MIN_MONTH..=MAX_MONTH).contains(month))
        .ok_or(ComposeError::InvalidMonth(raw))
}

fn check_day(raw: i32) -> Result<u8, ComposeError> {
    u8::try_from(raw)
        .ok()
        .filter(|day| (MIN_DAY..=MAX_DAY).contains(day))
        .ok_or(ComposeError::InvalidDay(raw))
}

fn check_hour(raw: i32) -> Result<u8, ComposeError> {
    u8::try_from(raw)
        .ok()
        .filter(|hour| *hour <= MAX_HOUR)
        .ok_or(ComposeError::InvalidHour(raw))
}

fn check_minute(raw: i32) -> Result<u8, ComposeError> {
    u8::try_from(raw)
        .ok()
        .filter(|minute| *minute <= MAX_MINUTE)
        .ok_or(ComposeError::InvalidMinute(raw))
}

fn check_second(raw: i32) -> Result<u8, ComposeError> {
    u8::try_from(raw)
        .ok()
        .filter(|second| *second <= MAX_SECOND)
        .ok_or(ComposeError::InvalidSecond(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finalize_day(composer: DayComposer) -> Result<DateRecord, ComposeError> {
        let mut record = DateRecord::default();
        composer.finalize(&mut record)?;
        Ok(record)
    }

    fn finalize_time(composer: TimeComposer) -> Result<DateRecord, ComposeError> {
        let mut record = DateRecord::default();
        composer.finalize(&mut record)?;
        Ok(record)
    }

    fn finalize_zone(composer: TimeZoneComposer) -> Result<DateRecord, ComposeError> {
        let mut record = DateRecord::default();
        composer.finalize(&mut record)?;
        Ok(record)
    }

    #[test]
    fn test_day_year_month_day_order() {
        // 85 cannot be a day, so the order reads as year-month-day.
        let mut composer = DayComposer::default();
        composer.add(85);
        composer.add(6);
        composer.add(21);
        let record = finalize_day(composer).unwrap();
        assert_eq!(record.year, 1985);
        assert_eq!(record.month, 5);
        assert_eq!(record.day, 21);
    }

    #[test]
    fn test_day_month_day_order_with_trailing_year() {
        // 6 is a plausible day, so the order reads as month-day-year.
        let mut composer = DayComposer::default();
        composer.add(6);
        composer.add(21);
        composer.add(1985);
        let record = finalize_day(composer).unwrap();
        assert_eq!(record.year, 1985);
        assert_eq!(record.month, 5);
        assert_eq!(record.day, 21);
    }

    #[test]
    fn test_day_month_day_defaults_year() {
        let mut composer = DayComposer::default();
        composer.add(6);
        composer.add(21);
        let record = finalize_day(composer).unwrap();
        assert_eq!(record.year, 2000);
        assert_eq!(record.month, 5);
        assert_eq!(record.day, 21);
    }

    #[test]
    fn test_day_named_month_single_component() {
        let mut composer = DayComposer::default();
        composer.set_named_month(12);
        composer.add(25);
        let record = finalize_day(composer).unwrap();
        assert_eq!(record.year, 2000);
        assert_eq!(record.month, 11);
        assert_eq!(record.day, 25);
    }

    #[test]
    fn test_day_named_month_year_before_day() {
        let mut composer = DayComposer::default();
        composer.set_named_month(6);
        composer.add(1985);
        composer.add(21);
        let record = finalize_day(composer).unwrap();
        assert_eq!(record.year, 1985);
        assert_eq!(record.month, 5);
        assert_eq!(record.day, 21);
    }

    #[test]
    fn test_day_named_month_day_before_year() {
        let mut composer = DayComposer::default();
        composer.set_named_month(6);
        composer.add(21);
        composer.add(85);
        let record = finalize_day(composer).unwrap();
        assert_eq!(record.year, 1985);
        assert_eq!(record.month, 5);
        assert_eq!(record.day, 21);
    }

    #[test]
    fn test_day_too_few_components() {
        let mut composer = DayComposer::default();
        composer.add(6);
        assert!(matches!(
            finalize_day(composer),
            Err(ComposeError::MissingComponents { expected: 2, found: 1 })
        ));

        let composer = DayComposer::default();
        assert!(matches!(
            finalize_day(composer),
            Err(ComposeError::MissingComponents { expected: 2, found: 0 })
        ));
    }

    #[test]
    fn test_day_named_month_requires_a_component() {
        let mut composer = DayComposer::default();
        composer.set_named_month(12);
        assert!(matches!(
            finalize_day(composer),
            Err(ComposeError::MissingComponents { expected: 1, found: 0 })
        ));
    }

    #[test]
    fn test_day_rejects_out_of_range_month_and_day() {
        let mut composer = DayComposer::default();
        composer.add(13);
        composer.add(32);
        composer.add(1985);
        // 13 is still a plausible day, so this reads as month-day-year.
        assert!(matches!(finalize_day(composer), Err(ComposeError::InvalidMonth(13))));

        let mut composer = DayComposer::default();
        composer.add(6);
        composer.add(0);
        assert!(matches!(finalize_day(composer), Err(ComposeError::InvalidDay(0))));
    }

    #[test]
    fn test_day_failure_leaves_record_untouched() {
        let mut record = DateRecord::default();
        let mut composer = DayComposer::default();
        composer.add(6);
        composer.add(40);
        assert!(composer.finalize(&mut record).is_err());
        assert_eq!(record, DateRecord::default());
    }

    #[test]
    fn test_day_add_rejects_fourth_component() {
        let mut composer = DayComposer::default();
        assert!(composer.add(1));
        assert!(composer.add(2));
        assert!(composer.add(3));
        assert!(!composer.add(4));
    }

    #[test]
    fn test_year_windowing() {
        assert_eq!(window_year(0), 2000);
        assert_eq!(window_year(49), 2049);
        assert_eq!(window_year(50), 1950);
        assert_eq!(window_year(99), 1999);
        assert_eq!(window_year(100), 100);
        assert_eq!(window_year(1985), 1985);
        assert_eq!(window_year(-1), -1);
    }

    #[test]
    fn test_time_pm_offset() {
        let mut composer = TimeComposer::default();
        composer.add(11);
        composer.set_meridiem_offset(12);
        let record = finalize_time(composer).unwrap();
        assert_eq!(record.hour, 23);
    }

    #[test]
    fn test_time_noon_and_midnight() {
        // 12 AM collapses to 0.
        let mut composer = TimeComposer::default();
        composer.add(12);
        composer.set_meridiem_offset(0);
        assert_eq!(finalize_time(composer).unwrap().hour, 0);

        // 12 PM stays 12.
        let mut composer = TimeComposer::default();
        composer.add(12);
        composer.set_meridiem_offset(12);
        assert_eq!(finalize_time(composer).unwrap().hour, 12);

        // 1 PM becomes 13.
        let mut composer = TimeComposer::default();
        composer.add(1);
        composer.set_meridiem_offset(12);
        assert_eq!(finalize_time(composer).unwrap().hour, 13);
    }

    #[test]
    fn test_time_unfilled_slots_default_to_zero() {
        let mut composer = TimeComposer::default();
        composer.add(9);
        composer.add(30);
        let record = finalize_time(composer).unwrap();
        assert_eq!((record.hour, record.minute, record.second), (9, 30, 0));

        let record = finalize_time(TimeComposer::default()).unwrap();
        assert_eq!((record.hour, record.minute, record.second), (0, 0, 0));
    }

    #[test]
    fn test_time_meridiem_rejects_non_12_hour_values() {
        for bad_hour in [0, 13, 24] {
            let mut composer = TimeComposer::default();
            composer.add(bad_hour);
            composer.set_meridiem_offset(12);
            assert!(
                matches!(finalize_time(composer), Err(ComposeError::InvalidHour12(h)) if h == bad_hour)
            );
        }
    }

    #[test]
    fn test_time_range_validation() {
        let mut composer = TimeComposer::default();
        composer.add(24);
        assert!(matches!(finalize_time(composer), Err(ComposeError::InvalidHour(24))));

        let mut composer = TimeComposer::default();
        composer.add(10);
        composer.add(60);
        assert!(matches!(finalize_time(composer), Err(ComposeError::InvalidMinute(60))));

        let mut composer = TimeComposer::default();
        composer.add(10);
        composer.add(30);
        composer.add(61);
        assert!(matches!(finalize_time(composer), Err(ComposeError::InvalidSecond(61))));
    }

    #[test]
    fn test_time_leap_second_is_accepted() {
        let mut composer = TimeComposer::default();
        composer.add(23);
        composer.add(59);
        composer.add(60);
        let record = finalize_time(composer).unwrap();
        assert_eq!(record.second, 60);
    }

    #[test]
    fn test_zone_unspecified_when_no_sign_seen() {
        let record = finalize_zone(TimeZoneComposer::default()).unwrap();
        assert_eq!(record.utc_offset_seconds, None);
    }

    #[test]
    fn test_zone_explicit_sign_and_magnitudes() {
        let mut composer = TimeZoneComposer::default();
        composer.set_sign(-1);
        composer.set_hour(8);
        composer.set_minute(0);
        let record = finalize_zone(composer).unwrap();
        assert_eq!(record.utc_offset_seconds, Some(-28800));

        let mut composer = TimeZoneComposer::default();
        composer.set_sign(1);
        composer.set_hour(5);
        composer.set_minute(30);
        let record = finalize_zone(composer).unwrap();
        assert_eq!(record.utc_offset_seconds, Some(19800));
    }

    #[test]
    fn test_zone_sign_alone_means_zero_offset() {
        let mut composer = TimeZoneComposer::default();
        composer.set_sign(1);
        let record = finalize_zone(composer).unwrap();
        assert_eq!(record.utc_offset_seconds, Some(0));
    }

    #[test]
    fn test_zone_named_path_carries_the_sign() {
        // The "pst" row stores -8 directly; the named path must not
        // negate it again.
        let mut composer = TimeZoneComposer::default();
        composer.set_named_zone(-8);
        let record = finalize_zone(composer).unwrap();
        assert_eq!(record.utc_offset_seconds, Some(-28800));

        let mut composer = TimeZoneComposer::default();
        composer.set_named_zone(0);
        let record = finalize_zone(composer).unwrap();
        assert_eq!(record.utc_offset_seconds, Some(0));
    }

    #[test]
    fn test_zone_offset_overflow() {
        let mut composer = TimeZoneComposer::default();
        composer.set_sign(1);
        composer.set_hour(i32::MAX);
        assert!(matches!(finalize_zone(composer), Err(ComposeError::OffsetOverflow)));
    }
}
