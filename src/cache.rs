//! Derived per-year offsets over the calendar table.
//!
//! Built exactly once from a [`CalendarTable`]: for every year the signed
//! day offset of its first day from the reference anchor, plus the
//! cumulative day count at the start of each month. All conversions reduce
//! to lookups into this structure. The cache is immutable after
//! construction and safe to share across threads.

use crate::consts::MONTHS_PER_YEAR;
use crate::data::CalendarTable;

/// Cached offsets for a single BS year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCacheEntry {
    /// Signed day offset of day 1 of month 1 of this year from the
    /// reference anchor.
    pub days_from_reference: i64,
    /// Cumulative day count at the start of each month; index 0 is 0,
    /// index 12 is the total length of the year.
    pub month_start_offsets: [u16; 13],
}

impl YearCacheEntry {
    fn from_months(days_from_reference: i64, months: [u8; MONTHS_PER_YEAR as usize]) -> Self {
        let mut month_start_offsets = [0u16; 13];
        for (index, &length) in months.iter().enumerate() {
            month_start_offsets[index + 1] = month_start_offsets[index] + u16::from(length);
        }
        Self {
            days_from_reference,
            month_start_offsets,
        }
    }

    /// Total days in the year.
    #[inline]
    pub const fn year_length(&self) -> u16 {
        self.month_start_offsets[MONTHS_PER_YEAR as usize]
    }
}

/// Precomputed offsets for every year the table covers.
#[derive(Debug, Clone)]
pub struct YearCache {
    first_year: i32,
    last_year: i32,
    reference_year: i32,
    entries: Vec<Option<YearCacheEntry>>,
    /// `(days_from_reference, year)` of every present year, ascending.
    starts: Vec<(i64, i32)>,
    /// Years inside the nominal span with no table data. A non-empty list
    /// is a data-integrity signal, surfaced instead of silently absorbed.
    gap_years: Vec<i32>,
}

impl YearCache {
    /// Builds the cache in one forward and one backward pass over the
    /// table, anchored at `reference_year` (offset 0). The reference year
    /// must be present in the table; the calendar constructor checks this.
    pub(crate) fn build(table: &CalendarTable, reference_year: i32) -> Self {
        let (first_year, last_year) = table.supported_year_range();
        debug_assert!(table.contains_year(reference_year));

        let span = (last_year - first_year + 1) as usize;
        let mut entries: Vec<Option<YearCacheEntry>> = vec![None; span];
        let mut gap_years = Vec::new();

        let index = |year: i32| (year - first_year) as usize;

        let mut offset = 0i64;
        for year in reference_year..=last_year {
            match table.months(year) {
                Some(months) => {
                    let entry = YearCacheEntry::from_months(offset, months);
                    offset += i64::from(entry.year_length());
                    entries[index(year)] = Some(entry);
                }
                None => gap_years.push(year),
            }
        }

        let mut offset = 0i64;
        for year in (first_year..reference_year).rev() {
            match table.months(year) {
                Some(months) => {
                    let length: i64 = months.iter().map(|&l| i64::from(l)).sum();
                    offset -= length;
                    entries[index(year)] = Some(YearCacheEntry::from_months(offset, months));
                }
                None => gap_years.push(year),
            }
        }
        gap_years.sort_unstable();

        let starts = entries
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                entry
                    .as_ref()
                    .map(|e| (e.days_from_reference, first_year + i as i32))
            })
            .collect();

        Self {
            first_year,
            last_year,
            reference_year,
            entries,
            starts,
            gap_years,
        }
    }

    /// Cached offsets for `year`, `None` outside the span or in a gap.
    pub fn entry(&self, year: i32) -> Option<&YearCacheEntry> {
        if !(self.first_year..=self.last_year).contains(&year) {
            return None;
        }
        self.entries[(year - self.first_year) as usize].as_ref()
    }

    /// The year whose day span contains the given offset from the
    /// reference anchor, `None` if the offset falls before the first
    /// tabulated day, after the last, or inside a gap.
    pub fn year_for_offset(&self, days: i64) -> Option<i32> {
        let index = self.starts.partition_point(|&(start, _)| start <= days);
        if index == 0 {
            return None;
        }
        let (start, year) = self.starts[index - 1];
        let entry = self.entry(year)?;
        (days - start < i64::from(entry.year_length())).then_some(year)
    }

    /// Years inside the nominal span that have no table data.
    pub fn gap_years(&self) -> &[i32] {
        &self.gap_years
    }

    /// Whether the offset chain between the reference year and `year`
    /// crosses a gap. Offsets accumulated past a skipped year are shifted
    /// by that year's unknown length, so they no longer resolve exactly.
    pub(crate) fn crosses_gap(&self, year: i32) -> bool {
        let (low, high) = if year < self.reference_year {
            (year, self.reference_year)
        } else {
            (self.reference_year, year)
        };
        self.gap_years.iter().any(|&gap| low < gap && gap < high)
    }

    /// Day offset of the first tabulated day.
    pub(crate) fn min_offset(&self) -> Option<i64> {
        self.starts.first().map(|&(start, _)| start)
    }

    /// Day offset of the last tabulated day.
    pub(crate) fn max_offset(&self) -> Option<i64> {
        let &(start, year) = self.starts.last()?;
        let entry = self.entry(year)?;
        Some(start + i64::from(entry.year_length()) - 1)
    }
}
