/// Number of months in a Bikram Sambat year
pub const MONTHS_PER_YEAR: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Shortest month length that occurs in the almanac data
pub const MIN_MONTH_LENGTH: u8 = 29;

/// Longest month length that occurs in the almanac data
pub const MAX_MONTH_LENGTH: u8 = 32;

/// Reference anchor, BS side: day 1 of month 1 of this year
pub const REFERENCE_BS_YEAR: i32 = 2000;

/// Reference anchor, AD side: (year, month, day) equivalent of BS 2000-01-01
pub const REFERENCE_AD_YMD: (i32, u8, u8) = (1943, 4, 14);

/// Minimum Gregorian year accepted by [`crate::AdDate`]
pub const AD_MIN_YEAR: i32 = 1;
/// Maximum Gregorian year accepted by [`crate::AdDate`]
pub const AD_MAX_YEAR: i32 = 9999;

/// Date component separator (ISO 8601 style)
pub const DATE_SEPARATOR: char = '-';

/// Average BS year length in days, used only by the out-of-table
/// approximation fallback. A rough heuristic, not almanac data.
pub(crate) const AVERAGE_YEAR_DAYS: f64 = 365.25;
/// Average BS month length in days, companion to [`AVERAGE_YEAR_DAYS`]
pub(crate) const AVERAGE_MONTH_DAYS: f64 = 30.44;

/// Devanagari digit glyphs, indexed by digit value
pub const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Romanized BS month names (index 0 = Baishakh, the first month)
pub const MONTH_NAMES: [&str; 12] = [
    "Baishakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Devanagari BS month names (index 0 = वैशाख)
pub const MONTH_NAMES_DEVANAGARI: [&str; 12] = [
    "वैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कात्तिक", "मंसिर", "पुस", "माघ", "फागुन", "चैत",
];

/// English weekday names, week starting Sunday as in the Nepali week
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

/// Devanagari weekday names (index 0 = आइतबार, Sunday)
pub const WEEKDAY_NAMES_DEVANAGARI: [&str; 7] = [
    "आइतबार", "सोमबार", "मङ्गलबार", "बुधबार", "बिहीबार", "शुक्रबार", "शनिबार",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Month number for February
pub(crate) const FEBRUARY: u8 = 2;

/// Maximum days in each Gregorian month (index 0 unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];
