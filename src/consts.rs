/// First valid month (January)
pub const MIN_MONTH: u8 = 1;

/// Last valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First valid day of month
pub const MIN_DAY: u8 = 1;

/// Largest day of any month; full calendar validity (days in the
/// specific month, leap years) is left to downstream consumers.
pub const MAX_DAY: u8 = 31;

/// Last valid hour on a 24-hour clock
pub const MAX_HOUR: u8 = 23;

/// First valid hour on a 12-hour clock (a meridiem marker was seen)
pub const MIN_HOUR_12: u8 = 1;

/// Last valid hour on a 12-hour clock, and the PM hour offset
pub const HOURS_PER_MERIDIEM: u8 = 12;

/// Last valid minute
pub const MAX_MINUTE: u8 = 59;

/// Last valid second. 60 is accepted so that a leap second survives
/// composition instead of failing the whole parse.
pub const MAX_SECOND: u8 = 60;

/// Seconds in one minute, for folding offset magnitudes
pub const SECONDS_PER_MINUTE: i32 = 60;

/// Seconds in one hour, for folding offset magnitudes
pub const SECONDS_PER_HOUR: i32 = 3600;

/// Length of a keyword table prefix, in bytes
pub const KEYWORD_PREFIX_LEN: usize = 3;

/// Padding byte for keywords shorter than the prefix length
pub const KEYWORD_PAD: u8 = 0;

/// Two-digit years up to this value land in the 2000s...
pub(crate) const YEAR_WINDOW_PIVOT: i32 = 49;
/// ...years from there up to this value land in the 1900s
pub(crate) const YEAR_WINDOW_MAX: i32 = 99;
/// Century base for the low half of the window
pub(crate) const CENTURY_2000: i32 = 2000;
/// Century base for the high half of the window
pub(crate) const CENTURY_1900: i32 = 1900;
