//! The Bikram Sambat month-length table.
//!
//! The BS calendar has no arithmetic rule for month lengths; each year's
//! twelve lengths come from the published astronomical almanac (panchang)
//! and are embedded here as reference data. The table is the single
//! authoritative data source of the crate: everything else is derived from
//! it, and a corrected or extended table can be swapped in through
//! [`CalendarTable::from_entries`] without touching any algorithm code.

use std::collections::BTreeMap;

use crate::consts::{MAX_MONTH_LENGTH, MIN_MONTH_LENGTH, MONTHS_PER_YEAR};

/// First BS year covered by the embedded almanac data.
pub(crate) const OFFICIAL_FIRST_YEAR: i32 = 1970;
/// Last BS year covered by the embedded almanac data.
pub(crate) const OFFICIAL_LAST_YEAR: i32 = 2100;

/// Month lengths per BS year. Row index 0 is year 1970; column index 0 is
/// Baishakh, the first month.
#[rustfmt::skip]
const OFFICIAL_MONTH_LENGTHS: [[u8; 12]; 131] = [
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1970
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1971
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 1972
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1973
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1974
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1975
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1976
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 1977
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1978
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1979
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1980
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 1981
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1982
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1983
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1984
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 1985
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1986
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 1987
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1988
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 1989
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1990
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 1991
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1992
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 1993
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1994
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 1995
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 1996
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1997
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 1998
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 1999
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2057
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2081
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2082
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2087
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2091
    [30, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2092
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2093
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2094
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 30, 30], // 2095
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2096
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2097
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2098
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2099
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2100
];

/// Error type for calendar table construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The table has no entries at all.
    #[error("calendar table has no entries")]
    Empty,

    /// A month length falls outside the range the almanac can produce.
    #[error("month length {length} for BS {year}-{month:02} is outside 29-32")]
    MonthLengthOutOfBounds { year: i32, month: u8, length: u8 },
}

/// Per-year month lengths for the Bikram Sambat calendar.
///
/// Pure lookup structure: years or months outside the data answer with
/// `None`, never with an error. Immutable after construction.
#[derive(Debug, Clone)]
pub struct CalendarTable {
    months: BTreeMap<i32, [u8; MONTHS_PER_YEAR as usize]>,
    first_year: i32,
    last_year: i32,
}

impl CalendarTable {
    /// Returns the table built from the embedded almanac data
    /// (BS 1970-2100, contiguous).
    pub fn official() -> Self {
        let months = OFFICIAL_MONTH_LENGTHS
            .iter()
            .enumerate()
            .map(|(index, row)| (OFFICIAL_FIRST_YEAR + index as i32, *row))
            .collect();
        Self {
            months,
            first_year: OFFICIAL_FIRST_YEAR,
            last_year: OFFICIAL_LAST_YEAR,
        }
    }

    /// Builds a table from explicit `(year, month lengths)` entries, e.g.
    /// a corrected almanac release. Entries need not be contiguous; missing
    /// years inside the span are treated as gaps by the year cache.
    ///
    /// # Errors
    /// Returns `TableError::Empty` for an empty entry set and
    /// `TableError::MonthLengthOutOfBounds` for month lengths outside 29-32.
    pub fn from_entries<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (i32, [u8; MONTHS_PER_YEAR as usize])>,
    {
        let mut months = BTreeMap::new();
        for (year, row) in entries {
            for (index, &length) in row.iter().enumerate() {
                if !(MIN_MONTH_LENGTH..=MAX_MONTH_LENGTH).contains(&length) {
                    return Err(TableError::MonthLengthOutOfBounds {
                        year,
                        month: index as u8 + 1,
                        length,
                    });
                }
            }
            months.insert(year, row);
        }
        let (Some(first_year), Some(last_year)) = (
            months.keys().next().copied(),
            months.keys().next_back().copied(),
        ) else {
            return Err(TableError::Empty);
        };
        Ok(Self {
            months,
            first_year,
            last_year,
        })
    }

    /// Length in days of `month` (1-12) of BS `year`, `None` if the table
    /// has no data for that year or the month number is out of range.
    pub fn month_length(&self, year: i32, month: u8) -> Option<u16> {
        let row = self.months.get(&year)?;
        let index = usize::from(month).checked_sub(1)?;
        row.get(index).map(|&length| u16::from(length))
    }

    /// Total days of BS `year`, `None` if the table has no data for it.
    pub fn year_length(&self, year: i32) -> Option<u16> {
        let row = self.months.get(&year)?;
        Some(row.iter().map(|&length| u16::from(length)).sum())
    }

    /// All twelve month lengths of BS `year`.
    pub fn months(&self, year: i32) -> Option<[u8; MONTHS_PER_YEAR as usize]> {
        self.months.get(&year).copied()
    }

    /// The `(min, max)` BS years the table nominally spans. Years inside
    /// the span are not guaranteed present for tables built from sparse
    /// entries.
    pub const fn supported_year_range(&self) -> (i32, i32) {
        (self.first_year, self.last_year)
    }

    /// Whether the table carries data for BS `year`.
    pub fn contains_year(&self, year: i32) -> bool {
        self.months.contains_key(&year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_table_is_contiguous() {
        let table = CalendarTable::official();
        assert_eq!(table.supported_year_range(), (1970, 2100));
        for year in 1970..=2100 {
            assert!(table.contains_year(year), "missing year {year}");
        }
        assert!(!table.contains_year(1969));
        assert!(!table.contains_year(2101));
    }

    #[test]
    fn test_official_month_lengths_in_bounds() {
        let table = CalendarTable::official();
        for year in 1970..=2100 {
            for month in 1..=12 {
                let length = table.month_length(year, month).unwrap();
                assert!(
                    (29..=32).contains(&length),
                    "BS {year}-{month:02} has length {length}"
                );
            }
        }
    }

    #[test]
    fn test_official_year_lengths_plausible() {
        let table = CalendarTable::official();
        for year in 1970..=2100 {
            let length = table.year_length(year).unwrap();
            assert!(
                (360..=370).contains(&length),
                "BS {year} has length {length}"
            );
        }
    }

    #[test]
    fn test_month_length_lookup_edges() {
        let table = CalendarTable::official();
        assert_eq!(table.month_length(2000, 1), Some(30));
        assert_eq!(table.month_length(2000, 0), None);
        assert_eq!(table.month_length(2000, 13), None);
        assert_eq!(table.month_length(1969, 1), None);
        assert_eq!(table.month_length(2101, 1), None);
    }

    #[test]
    fn test_year_length_matches_month_sum() {
        let table = CalendarTable::official();
        for year in [1970, 1999, 2000, 2055, 2100] {
            let sum: u16 = (1..=12)
                .map(|month| table.month_length(year, month).unwrap())
                .sum();
            assert_eq!(table.year_length(year), Some(sum));
        }
    }

    #[test]
    fn test_from_entries_accepts_sparse_years() {
        let row = [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31];
        let table = CalendarTable::from_entries([(2000, row), (2002, row)]).unwrap();
        assert_eq!(table.supported_year_range(), (2000, 2002));
        assert!(table.contains_year(2000));
        assert!(!table.contains_year(2001));
        assert_eq!(table.year_length(2002), Some(365));
    }

    #[test]
    fn test_from_entries_rejects_bad_month_length() {
        let mut row = [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31];
        row[4] = 28;
        let result = CalendarTable::from_entries([(2000, row)]);
        assert_eq!(
            result.unwrap_err(),
            TableError::MonthLengthOutOfBounds {
                year: 2000,
                month: 5,
                length: 28
            }
        );

        row[4] = 33;
        let result = CalendarTable::from_entries([(2000, row)]);
        assert!(matches!(
            result,
            Err(TableError::MonthLengthOutOfBounds { length: 33, .. })
        ));
    }

    #[test]
    fn test_from_entries_rejects_empty() {
        let result = CalendarTable::from_entries([]);
        assert_eq!(result.unwrap_err(), TableError::Empty);
    }
}
