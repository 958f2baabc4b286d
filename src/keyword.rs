use crate::consts::{KEYWORD_PAD, KEYWORD_PREFIX_LEN};
use crate::prelude::*;

/// Classification of a recognized keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum KeywordCategory {
    /// A month name or its 3-letter abbreviation ("jan".."dec"); the
    /// entry value is the 1-based month number.
    #[display(fmt = "month name")]
    MonthName,
    /// An AM/PM marker; the entry value is the 12-hour clock offset
    /// (0 for AM, 12 for PM).
    #[display(fmt = "meridiem marker")]
    Meridiem,
    /// A timezone abbreviation; the entry value is the signed UTC
    /// offset in whole hours.
    #[display(fmt = "timezone name")]
    TimeZoneName,
}

/// One row of the keyword table. Keywords shorter than
/// `KEYWORD_PREFIX_LEN` are right-padded with `KEYWORD_PAD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    pub prefix: [u8; KEYWORD_PREFIX_LEN],
    pub category: KeywordCategory,
    pub value: i32,
}

/// The fixed keyword table. Row order is load-bearing: lookup takes
/// the first matching row.
pub const KEYWORDS: [KeywordEntry; 25] = [
    KeywordEntry { prefix: *b"jan", category: KeywordCategory::MonthName, value: 1 },
    KeywordEntry { prefix: *b"feb", category: KeywordCategory::MonthName, value: 2 },
    KeywordEntry { prefix: *b"mar", category: KeywordCategory::MonthName, value: 3 },
    KeywordEntry { prefix: *b"apr", category: KeywordCategory::MonthName, value: 4 },
    KeywordEntry { prefix: *b"may", category: KeywordCategory::MonthName, value: 5 },
    KeywordEntry { prefix: *b"jun", category: KeywordCategory::MonthName, value: 6 },
    KeywordEntry { prefix: *b"jul", category: KeywordCategory::MonthName, value: 7 },
    KeywordEntry { prefix: *b"aug", category: KeywordCategory::MonthName, value: 8 },
    KeywordEntry { prefix: *b"sep", category: KeywordCategory::MonthName, value: 9 },
    KeywordEntry { prefix: *b"oct", category: KeywordCategory::MonthName, value: 10 },
    KeywordEntry { prefix: *b"nov", category: KeywordCategory::MonthName, value: 11 },
    KeywordEntry { prefix: *b"dec", category: KeywordCategory::MonthName, value: 12 },
    KeywordEntry { prefix: [b'a', b'm', KEYWORD_PAD], category: KeywordCategory::Meridiem, value: 0 },
    KeywordEntry { prefix: [b'p', b'm', KEYWORD_PAD], category: KeywordCategory::Meridiem, value: 12 },
    KeywordEntry { prefix: [b'u', b't', KEYWORD_PAD], category: KeywordCategory::TimeZoneName, value: 0 },
    KeywordEntry { prefix: *b"utc", category: KeywordCategory::TimeZoneName, value: 0 },
    KeywordEntry { prefix: *b"gmt", category: KeywordCategory::TimeZoneName, value: 0 },
    KeywordEntry { prefix: *b"cdt", category: KeywordCategory::TimeZoneName, value: -5 },
    KeywordEntry { prefix: *b"cst", category: KeywordCategory::TimeZoneName, value: -6 },
    KeywordEntry { prefix: *b"edt", category: KeywordCategory::TimeZoneName, value: -4 },
    KeywordEntry { prefix: *b"est", category: KeywordCategory::TimeZoneName, value: -5 },
    KeywordEntry { prefix: *b"mdt", category: KeywordCategory::TimeZoneName, value: -6 },
    KeywordEntry { prefix: *b"mst", category: KeywordCategory::TimeZoneName, value: -7 },
    KeywordEntry { prefix: *b"pdt", category: KeywordCategory::TimeZoneName, value: -7 },
    KeywordEntry { prefix: *b"pst", category: KeywordCategory::TimeZoneName, value: -8 },
];

/// Finds the keyword whose padded prefix equals `prefix`, given the
/// length of the full word the prefix was taken from.
///
/// Words longer than the prefix only match month names, so "january"
/// resolves to the "jan" row but "pacific" never resolves to a
/// timezone row. Returns `None` for an unrecognized token.
pub fn lookup(prefix: [u8; KEYWORD_PREFIX_LEN], word_len: usize) -> Option<&'static KeywordEntry> {
    KEYWORDS.iter().find(|entry| {
        entry.prefix == prefix
            && (word_len <= KEYWORD_PREFIX_LEN || entry.category == KeywordCategory::MonthName)
    })
}

/// Convenience wrapper over [`lookup`]: lowercases the word's first
/// `KEYWORD_PREFIX_LEN` bytes and pads short words.
pub fn lookup_word(word: &str) -> Option<&'static KeywordEntry> {
    let mut prefix = [KEYWORD_PAD; KEYWORD_PREFIX_LEN];
    for (slot, byte) in prefix.iter_mut().zip(word.bytes()) {
        *slot = byte.to_ascii_lowercase();
    }
    lookup(prefix, word.len())
}
