//! The Japanese national holiday calendar.

use std::collections::BTreeMap;

use kt_core::Result;
use kt_time::{Date, Weekday};

/// Suffix appended to the name of a holiday observed on a substitute day.
pub const SUBSTITUTE_SUFFIX: &str = "（振替）";

/// Fixed-date holidays as (month, day, name).
const FIXED_HOLIDAYS: &[(u8, u8, &str)] = &[
    (1, 1, "元日"),
    (2, 11, "建国記念の日"),
    (2, 23, "天皇誕生日"),
    (4, 29, "昭和の日"),
    (5, 3, "憲法記念日"),
    (5, 4, "みどりの日"),
    (5, 5, "こどもの日"),
    (8, 11, "山の日"),
    (11, 3, "文化の日"),
    (11, 23, "勤労感謝の日"),
];

/// Happy-Monday holidays as (month, nth Monday, name).
const HAPPY_MONDAYS: &[(u8, u8, &str)] = &[
    (1, 2, "成人の日"),
    (7, 3, "海の日"),
    (9, 3, "敬老の日"),
    (10, 2, "スポーツの日"),
];

/// Day-of-month of 春分の日 (Vernal Equinox Day) in March.
///
/// Astronomical approximation anchored at 1980. It matches the gazetted
/// dates for the current era and drifts for years far outside it; the
/// table applies it across the whole supported domain regardless.
#[must_use]
pub fn vernal_equinox_day(year: u16) -> u8 {
    let y = f64::from(year);
    (20.8431 + 0.242194 * (y - 1980.0) - ((y - 1980.0) / 4.0).floor()) as u8
}

/// Day-of-month of 秋分の日 (Autumnal Equinox Day) in September.
///
/// Same approximation family as [`vernal_equinox_day`].
#[must_use]
pub fn autumnal_equinox_day(year: u16) -> u8 {
    let y = f64::from(year);
    (23.2488 + 0.242194 * (y - 1980.0) - ((y - 1980.0) / 4.0).floor()) as u8
}

/// Adds substitute days for every holiday that falls on a Sunday.
///
/// The substitute lands on the following day and carries the original
/// name with [`SUBSTITUTE_SUFFIX`] appended. One pass only: a substitute
/// never spawns another substitute, and when the following day already
/// holds a holiday the substitute name wins. A Sunday December 31st
/// produces an entry on January 1st of the next year, which stays in
/// this table rather than the next year's.
pub fn with_substitutes(
    mut holidays: BTreeMap<Date, String>,
) -> Result<BTreeMap<Date, String>> {
    let mut observed = BTreeMap::new();
    for (&date, name) in &holidays {
        if date.weekday() == Weekday::Sunday {
            observed.insert(date.add_days(1)?, format!("{name}{SUBSTITUTE_SUFFIX}"));
        }
    }
    holidays.extend(observed);
    Ok(holidays)
}

/// The nth Monday of a month, found by scanning forward from the 1st.
///
/// Every month has at least four Mondays, so for the table's second and
/// third Mondays the scan never leaves the month.
fn nth_monday(year: u16, month: u8, nth: u8) -> Result<Date> {
    let mut date = Date::from_ymd(year, month, 1)?;
    let mut seen = 0u8;
    loop {
        if date.weekday() == Weekday::Monday {
            seen += 1;
            if seen == nth {
                return Ok(date);
            }
        }
        date = date.add_days(1)?;
    }
}

/// All national holidays of one calendar year, keyed by date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayTable {
    year: u16,
    entries: BTreeMap<Date, String>,
}

impl HolidayTable {
    /// Computes the holiday table for a year.
    pub fn for_year(year: u16) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for &(month, day, name) in FIXED_HOLIDAYS {
            entries.insert(Date::from_ymd(year, month, day)?, name.to_owned());
        }
        for &(month, nth, name) in HAPPY_MONDAYS {
            entries.insert(nth_monday(year, month, nth)?, name.to_owned());
        }
        entries.insert(
            Date::from_ymd(year, 3, vernal_equinox_day(year))?,
            "春分の日".to_owned(),
        );
        entries.insert(
            Date::from_ymd(year, 9, autumnal_equinox_day(year))?,
            "秋分の日".to_owned(),
        );
        let entries = with_substitutes(entries)?;
        Ok(Self { year, entries })
    }

    /// The year this table was computed for.
    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Holiday name on `date`, if any.
    #[must_use]
    pub fn name_of(&self, date: Date) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// True when `date` is a holiday or substitute day.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.entries.contains_key(&date)
    }

    /// Iterates (date, name) pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> {
        self.entries.iter().map(|(date, name)| (*date, name.as_str()))
    }

    /// Number of entries, substitutes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ───────────────────────────── Tests ─────────────────────────────
