//! Bidirectional BS ↔ AD conversion and date arithmetic.
//!
//! [`BsCalendar`] bundles a [`CalendarTable`] with its derived
//! [`YearCache`](crate::cache::YearCache) and anchors all arithmetic at
//! BS 2000-01-01 ↔ AD 1943-04-14. Every operation is a pure function of
//! its inputs plus the immutable cache, so a calendar can be shared freely
//! across threads.

use std::sync::OnceLock;

use crate::cache::YearCache;
use crate::consts::{
    AVERAGE_MONTH_DAYS, AVERAGE_YEAR_DAYS, MIN_DAY, MONTHS_PER_YEAR, REFERENCE_BS_YEAR,
};
use crate::data::CalendarTable;
use crate::gregorian::{AdDate, REFERENCE_AD_JDN};
use crate::{BsDate, ParseError};

/// Error type for calendar conversion and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Month outside 1-12, or day outside the almanac length of its month.
    #[error("invalid BS date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// Ordinal day outside 1..=year length.
    #[error("invalid day of year {ordinal} for BS {year}")]
    InvalidDayOfYear { year: i32, ordinal: u16 },

    /// BS year outside the span the table covers.
    #[error("BS year {year} is outside the supported range {min}-{max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// AD date outside the span the table can convert.
    #[error("AD date {date} is outside the convertible range {min} to {max}")]
    AdOutOfRange {
        date: AdDate,
        min: AdDate,
        max: AdDate,
    },

    /// Internal inconsistency in the table or cache, surfaced rather than
    /// masked by a best-guess result.
    #[error("calendar data inconsistency: {0}")]
    DataIntegrity(String),

    /// Error parsing a date string.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Outcome of an AD → BS conversion.
///
/// The almanac table resolves most dates exactly; dates that land in a gap
/// of the table are estimated instead, and the two cases must stay
/// distinguishable to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BsConversion {
    /// Resolved exactly from the almanac table.
    Exact(BsDate),
    /// Best-effort estimate from average year/month lengths; not exact.
    Approximate(BsDate),
}

impl BsConversion {
    /// The converted date, regardless of how it was produced.
    pub const fn date(self) -> BsDate {
        match self {
            Self::Exact(date) | Self::Approximate(date) => date,
        }
    }

    /// `true` if the date came from the estimator rather than the table.
    pub const fn is_approximate(self) -> bool {
        matches!(self, Self::Approximate(_))
    }
}

/// A Bikram Sambat calendar: conversion engine plus date arithmetic over
/// one month-length table.
#[derive(Debug, Clone)]
pub struct BsCalendar {
    table: CalendarTable,
    cache: YearCache,
    anchor_ad: AdDate,
    min_ad: AdDate,
    max_ad: AdDate,
}

impl BsCalendar {
    /// Builds a calendar over `table`. The table must carry data for the
    /// reference year BS 2000, which anchors all offset arithmetic.
    ///
    /// # Errors
    /// Returns `ConvertError::DataIntegrity` if the reference year is
    /// missing from the table.
    pub fn new(table: CalendarTable) -> Result<Self, ConvertError> {
        if !table.contains_year(REFERENCE_BS_YEAR) {
            return Err(ConvertError::DataIntegrity(format!(
                "table has no data for the reference year BS {REFERENCE_BS_YEAR}"
            )));
        }
        let cache = YearCache::build(&table, REFERENCE_BS_YEAR);
        let anchor_ad = AdDate::from_jdn(REFERENCE_AD_JDN);
        let (Some(min_offset), Some(max_offset)) = (cache.min_offset(), cache.max_offset()) else {
            return Err(ConvertError::DataIntegrity(
                "year cache is empty".to_owned(),
            ));
        };
        Ok(Self {
            table,
            cache,
            anchor_ad,
            min_ad: anchor_ad + min_offset,
            max_ad: anchor_ad + max_offset,
        })
    }

    /// The process-wide calendar over the embedded almanac table, built on
    /// first use.
    pub fn official() -> &'static Self {
        static OFFICIAL: OnceLock<BsCalendar> = OnceLock::new();
        OFFICIAL.get_or_init(|| {
            Self::new(CalendarTable::official()).expect("embedded calendar table is complete")
        })
    }

    /// Converts a BS date to its Gregorian equivalent.
    ///
    /// # Errors
    /// `InvalidDate` for a month or day out of range, `YearOutOfRange`
    /// outside the table span, `DataIntegrity` if the year is inside the
    /// span but missing from the table.
    pub fn to_ad(&self, date: BsDate) -> Result<AdDate, ConvertError> {
        self.validate(date)?;
        let entry = self
            .cache
            .entry(date.year())
            .ok_or_else(|| integrity(format!("year cache entry missing for BS {}", date.year())))?;
        let offset = entry.days_from_reference
            + i64::from(entry.month_start_offsets[usize::from(date.month()) - 1])
            + i64::from(date.day())
            - 1;
        Ok(self.anchor_ad + offset)
    }

    /// Converts a Gregorian date to its BS equivalent.
    ///
    /// Dates whose offset chain crosses a gap in the table are resolved by
    /// the average-length estimator and tagged
    /// [`BsConversion::Approximate`]; with the embedded table every result
    /// is [`BsConversion::Exact`].
    ///
    /// # Errors
    /// `AdOutOfRange` outside the convertible span, `DataIntegrity` if the
    /// cache produces a day outside its own month bounds.
    pub fn to_bs(&self, date: AdDate) -> Result<BsConversion, ConvertError> {
        if date < self.min_ad || date > self.max_ad {
            return Err(ConvertError::AdOutOfRange {
                date,
                min: self.min_ad,
                max: self.max_ad,
            });
        }
        let days = date - self.anchor_ad;
        let Some(year) = self.cache.year_for_offset(days) else {
            return Ok(BsConversion::Approximate(self.approximate(days)));
        };
        if self.cache.crosses_gap(year) {
            return Ok(BsConversion::Approximate(self.approximate(days)));
        }
        let entry = self
            .cache
            .entry(year)
            .ok_or_else(|| integrity(format!("year cache entry missing for BS {year}")))?;
        let days_into_year = u16::try_from(days - entry.days_from_reference)
            .map_err(|_| integrity(format!("negative day offset into BS {year}")))?;

        // A day equal to a month-start offset belongs to that month:
        // months cover half-open [start, end) intervals.
        let month_index = entry
            .month_start_offsets
            .partition_point(|&offset| offset <= days_into_year);
        let month = month_index as u8;
        let day = days_into_year - entry.month_start_offsets[month_index - 1] + 1;

        let length = self
            .table
            .month_length(year, month)
            .ok_or_else(|| integrity(format!("no almanac data for BS {year}-{month:02}")))?;
        if day < u16::from(MIN_DAY) || day > length {
            return Err(integrity(format!(
                "computed day {day} outside BS {year}-{month:02}"
            )));
        }
        Ok(BsConversion::Exact(BsDate::new(year, month, day as u8)))
    }

    /// Whether `date` names an actual day of the tabulated calendar.
    pub fn is_valid_bs_date(&self, date: BsDate) -> bool {
        self.table
            .month_length(date.year(), date.month())
            .is_some_and(|length| {
                date.day() >= MIN_DAY && u16::from(date.day()) <= length
            })
    }

    /// Signed number of days from `from` to `to` (positive when `to` is
    /// later).
    ///
    /// # Errors
    /// Propagates conversion failure for either endpoint.
    pub fn days_between(&self, from: BsDate, to: BsDate) -> Result<i64, ConvertError> {
        Ok(self.to_ad(to)? - self.to_ad(from)?)
    }

    /// Adds `days` calendar days (negative to subtract).
    ///
    /// BS month boundaries are irregular, so day arithmetic always goes
    /// through the Gregorian equivalent; adding directly to BS fields
    /// would miscount across month boundaries.
    ///
    /// # Errors
    /// Fails like [`Self::to_ad`]/[`Self::to_bs`], and with
    /// `DataIntegrity` if the result can only be approximated.
    pub fn add_days(&self, date: BsDate, days: i64) -> Result<BsDate, ConvertError> {
        let ad = self.to_ad(date)?;
        match self.to_bs(ad + days)? {
            BsConversion::Exact(result) => Ok(result),
            BsConversion::Approximate(_) => Err(integrity(
                "day arithmetic landed in an almanac gap".to_owned(),
            )),
        }
    }

    /// Advances by `months` calendar months, clamping the day to the
    /// target month's length (the 32nd of a 32-day month becomes the last
    /// day of a shorter target month).
    ///
    /// # Errors
    /// `InvalidDate` if `date` is not a valid calendar day,
    /// `YearOutOfRange` if the result leaves the table span.
    pub fn add_months(&self, date: BsDate, months: i32) -> Result<BsDate, ConvertError> {
        self.shift_months(date, i64::from(months))
    }

    /// Advances by `years` calendar years with the same day clamping as
    /// [`Self::add_months`].
    ///
    /// # Errors
    /// Same failure modes as [`Self::add_months`].
    pub fn add_years(&self, date: BsDate, years: i32) -> Result<BsDate, ConvertError> {
        self.shift_months(date, i64::from(years) * i64::from(MONTHS_PER_YEAR))
    }

    fn shift_months(&self, date: BsDate, months: i64) -> Result<BsDate, ConvertError> {
        self.validate(date)?;
        let index = i64::from(date.year()) * i64::from(MONTHS_PER_YEAR)
            + i64::from(date.month())
            - 1
            + months;
        let year = index
            .div_euclid(i64::from(MONTHS_PER_YEAR))
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let month = (index.rem_euclid(i64::from(MONTHS_PER_YEAR)) + 1) as u8;
        let (min, max) = self.table.supported_year_range();
        if !(min..=max).contains(&year) {
            return Err(ConvertError::YearOutOfRange { year, min, max });
        }
        let length = self
            .table
            .month_length(year, month)
            .ok_or_else(|| integrity(format!("no almanac data for BS {year}-{month:02}")))?;
        let day = u16::from(date.day()).min(length) as u8;
        Ok(BsDate::new(year, month, day))
    }

    /// 1-based ordinal of `date` within its BS year.
    ///
    /// # Errors
    /// Fails like [`Self::to_ad`] for invalid or out-of-range dates.
    pub fn day_of_year(&self, date: BsDate) -> Result<u16, ConvertError> {
        self.validate(date)?;
        let entry = self
            .cache
            .entry(date.year())
            .ok_or_else(|| integrity(format!("year cache entry missing for BS {}", date.year())))?;
        Ok(entry.month_start_offsets[usize::from(date.month()) - 1] + u16::from(date.day()))
    }

    /// Inverse of [`Self::day_of_year`]: the date with the given 1-based
    /// `ordinal` within BS `year`.
    ///
    /// # Errors
    /// `YearOutOfRange` outside the span, `InvalidDayOfYear` if `ordinal`
    /// is 0 or exceeds the year's length.
    pub fn from_day_of_year(&self, year: i32, ordinal: u16) -> Result<BsDate, ConvertError> {
        let (min, max) = self.table.supported_year_range();
        if !(min..=max).contains(&year) {
            return Err(ConvertError::YearOutOfRange { year, min, max });
        }
        let entry = self
            .cache
            .entry(year)
            .ok_or_else(|| integrity(format!("no almanac data for BS year {year}")))?;
        if ordinal < 1 || ordinal > entry.year_length() {
            return Err(ConvertError::InvalidDayOfYear { year, ordinal });
        }
        let month_index = entry
            .month_start_offsets
            .partition_point(|&offset| offset < ordinal);
        let day = (ordinal - entry.month_start_offsets[month_index - 1]) as u8;
        Ok(BsDate::new(year, month_index as u8, day))
    }

    /// Day of the week of a BS date, derived from its Gregorian
    /// equivalent.
    ///
    /// # Errors
    /// Fails like [`Self::to_ad`].
    pub fn weekday(&self, date: BsDate) -> Result<crate::Weekday, ConvertError> {
        Ok(self.to_ad(date)?.weekday())
    }

    /// Completed years from `birth` to `reference`, decremented by one
    /// when the reference (month, day) precedes the birth (month, day).
    /// Never negative.
    ///
    /// # Errors
    /// `InvalidDate`/`YearOutOfRange` if either date is not a valid
    /// calendar day.
    pub fn age(&self, birth: BsDate, reference: BsDate) -> Result<u32, ConvertError> {
        self.validate(birth)?;
        self.validate(reference)?;
        let mut years = i64::from(reference.year()) - i64::from(birth.year());
        if (reference.month(), reference.day()) < (birth.month(), birth.day()) {
            years -= 1;
        }
        Ok(u32::try_from(years.max(0)).unwrap_or(0))
    }

    /// Parses `input` as a BS date and validates it against the table.
    ///
    /// # Errors
    /// `Parse` for malformed input, then the same failures as
    /// [`Self::to_ad`] for dates the calendar does not contain.
    pub fn parse_bs(&self, input: &str) -> Result<BsDate, ConvertError> {
        let date: BsDate = input.parse()?;
        self.validate(date)?;
        Ok(date)
    }

    /// The `(min, max)` BS years the table spans.
    pub const fn supported_year_range(&self) -> (i32, i32) {
        self.table.supported_year_range()
    }

    /// Length in days of `month` of BS `year`, if tabulated.
    pub fn month_length(&self, year: i32, month: u8) -> Option<u16> {
        self.table.month_length(year, month)
    }

    /// Total days of BS `year`, if tabulated.
    pub fn year_length(&self, year: i32) -> Option<u16> {
        self.table.year_length(year)
    }

    /// Earliest convertible AD date (day 1 of the first tabulated year).
    pub const fn min_ad_date(&self) -> AdDate {
        self.min_ad
    }

    /// Latest convertible AD date (last day of the last tabulated year).
    pub const fn max_ad_date(&self) -> AdDate {
        self.max_ad
    }

    /// AD side of the reference anchor.
    pub const fn reference_ad_date(&self) -> AdDate {
        self.anchor_ad
    }

    /// Years inside the nominal span with no almanac data.
    pub fn gap_years(&self) -> &[i32] {
        self.cache.gap_years()
    }

    fn validate(&self, date: BsDate) -> Result<(), ConvertError> {
        let (year, month, day) = date.ymd();
        if month < 1 || month > MONTHS_PER_YEAR {
            return Err(invalid(date));
        }
        let (min, max) = self.table.supported_year_range();
        if !(min..=max).contains(&year) {
            return Err(ConvertError::YearOutOfRange { year, min, max });
        }
        let length = self
            .table
            .month_length(year, month)
            .ok_or_else(|| integrity(format!("no almanac data for BS year {year}")))?;
        if day < MIN_DAY || u16::from(day) > length {
            return Err(invalid(date));
        }
        Ok(())
    }

    /// Best-effort estimate for a day offset the table cannot resolve.
    /// Average-length arithmetic only; the result is clamped into valid
    /// bounds and must always travel tagged as approximate.
    fn approximate(&self, days: i64) -> BsDate {
        let (min_year, max_year) = self.table.supported_year_range();
        let year_offset = (days as f64 / AVERAGE_YEAR_DAYS).floor();
        let days_into_year = (days as f64 - year_offset * AVERAGE_YEAR_DAYS).max(0.0);
        let year = (REFERENCE_BS_YEAR + year_offset as i32).clamp(min_year, max_year);
        let month = ((days_into_year / AVERAGE_MONTH_DAYS) as u8).min(11) + 1;
        let day = ((days_into_year % AVERAGE_MONTH_DAYS) as u8).min(29) + 1;
        BsDate::new(year, month, day)
    }
}

fn invalid(date: BsDate) -> ConvertError {
    let (year, month, day) = date.ymd();
    ConvertError::InvalidDate { year, month, day }
}

fn integrity(message: String) -> ConvertError {
    ConvertError::DataIntegrity(message)
}
