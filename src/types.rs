use crate::consts::{
    MONTH_NAMES, MONTH_NAMES_DEVANAGARI, MONTHS_PER_YEAR, WEEKDAY_NAMES, WEEKDAY_NAMES_DEVANAGARI,
};
use crate::prelude::*;

/// Day of the week, with the Nepali week ordering: Sunday (आइतबार) is the
/// first day and carries index 0.
///
/// A weekday is never stored; it is always derived from the Gregorian
/// equivalent of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the canonical index, `0` for Sunday through `6` for Saturday.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the weekday for a canonical index, `None` if `index > 6`.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// English name, e.g. `"Sunday"`.
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// Devanagari name, e.g. `"आइतबार"`.
    pub const fn name_devanagari(self) -> &'static str {
        WEEKDAY_NAMES_DEVANAGARI[self as usize]
    }
}

/// Romanized name of a BS month (1 = Baishakh), `None` outside 1-12.
pub fn month_name(month: u8) -> Option<&'static str> {
    if month < 1 || month > MONTHS_PER_YEAR {
        return None;
    }
    Some(MONTH_NAMES[usize::from(month) - 1])
}

/// Devanagari name of a BS month (1 = वैशाख), `None` outside 1-12.
pub fn month_name_devanagari(month: u8) -> Option<&'static str> {
    if month < 1 || month > MONTHS_PER_YEAR {
        return None;
    }
    Some(MONTH_NAMES_DEVANAGARI[usize::from(month) - 1])
}
