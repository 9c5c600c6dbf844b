//! Whole-domain integration tests for the Japanese holiday table.
//!
//! Besides spot goldens, these sweep every supported year and check the
//! structural rules: fixed holidays stay put, happy Mondays land on
//! Mondays, and substitute entries always pair with a Sunday source.

use kt_holiday::{HolidayTable, SUBSTITUTE_SUFFIX};
use kt_time::{Date, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Fixed dates that can never be displaced by a substitute entry.
const STABLE_FIXED: &[(u8, u8, &str)] = &[
    (1, 1, "元日"),
    (2, 11, "建国記念の日"),
    (2, 23, "天皇誕生日"),
    (4, 29, "昭和の日"),
    (5, 3, "憲法記念日"),
    (8, 11, "山の日"),
    (11, 3, "文化の日"),
    (11, 23, "勤労感謝の日"),
];

#[test]
fn full_table_2024() {
    let table = HolidayTable::for_year(2024).unwrap();
    let entries: Vec<(String, String)> = table
        .iter()
        .map(|(d, name)| (d.to_string(), name.to_owned()))
        .collect();
    let expected = [
        ("2024-01-01", "元日"),
        ("2024-01-08", "成人の日"),
        ("2024-02-11", "建国記念の日"),
        ("2024-02-12", "建国記念の日（振替）"),
        ("2024-02-23", "天皇誕生日"),
        ("2024-03-20", "春分の日"),
        ("2024-04-29", "昭和の日"),
        ("2024-05-03", "憲法記念日"),
        ("2024-05-04", "みどりの日"),
        ("2024-05-05", "こどもの日"),
        ("2024-05-06", "こどもの日（振替）"),
        ("2024-07-15", "海の日"),
        ("2024-08-11", "山の日"),
        ("2024-08-12", "山の日（振替）"),
        ("2024-09-16", "敬老の日"),
        ("2024-09-22", "秋分の日"),
        ("2024-09-23", "秋分の日（振替）"),
        ("2024-10-14", "スポーツの日"),
        ("2024-11-03", "文化の日"),
        ("2024-11-04", "文化の日（振替）"),
        ("2024-11-23", "勤労感謝の日"),
    ];
    assert_eq!(entries.len(), expected.len());
    for ((got_date, got_name), (want_date, want_name)) in entries.iter().zip(expected) {
        assert_eq!(got_date, want_date);
        assert_eq!(got_name, want_name);
    }
}

#[test]
fn stable_fixed_holidays_every_year() {
    for year in 1970..=2200u16 {
        let table = HolidayTable::for_year(year).unwrap();
        for &(month, day, name) in STABLE_FIXED {
            assert_eq!(
                table.name_of(date(year, month, day)),
                Some(name),
                "{name} missing in {year}"
            );
        }
        // 16 base entries, minus at most one key collision between the
        // September happy Monday and the autumnal equinox.
        assert!(table.len() >= 15, "table too small in {year}");
    }
}

#[test]
fn golden_week_tail_every_year() {
    // May 4th and 5th can be displaced by the substitute of the
    // preceding Sunday holiday, but never by anything else.
    for year in 1970..=2200u16 {
        let table = HolidayTable::for_year(year).unwrap();
        let may4 = table.name_of(date(year, 5, 4)).unwrap_or_default();
        let may5 = table.name_of(date(year, 5, 5)).unwrap_or_default();
        assert!(
            may4 == "みどりの日" || may4 == "憲法記念日（振替）",
            "unexpected May 4th entry in {year}: {may4}"
        );
        assert!(
            may5 == "こどもの日" || may5 == "みどりの日（振替）",
            "unexpected May 5th entry in {year}: {may5}"
        );
    }
}

#[test]
fn happy_mondays_match_closed_form() {
    // The scan that places happy Mondays must agree with the closed-form
    // nth-weekday lookup for every supported year.
    for year in 1970..=2200u16 {
        let table = HolidayTable::for_year(year).unwrap();

        let seijin = Date::nth_weekday(2, Weekday::Monday, year, 1).unwrap();
        assert_eq!(table.name_of(seijin), Some("成人の日"), "wrong 成人の日 in {year}");

        let umi = Date::nth_weekday(3, Weekday::Monday, year, 7).unwrap();
        assert_eq!(table.name_of(umi), Some("海の日"), "wrong 海の日 in {year}");

        let sports = Date::nth_weekday(2, Weekday::Monday, year, 10).unwrap();
        assert_eq!(table.name_of(sports), Some("スポーツの日"), "wrong スポーツの日 in {year}");

        // September's third Monday can coincide with the autumnal
        // equinox, whose entry is inserted later and wins the key.
        let keiro = Date::nth_weekday(3, Weekday::Monday, year, 9).unwrap();
        let name = table.name_of(keiro);
        assert!(
            name == Some("敬老の日") || name == Some("秋分の日"),
            "unexpected third-Monday entry in {year}: {name:?}"
        );
    }
}

#[test]
fn equinox_entries_every_year() {
    for year in 1970..=2200u16 {
        let table = HolidayTable::for_year(year).unwrap();
        let vernal = table
            .iter()
            .find(|(_, name)| *name == "春分の日")
            .map(|(d, _)| d);
        let autumnal = table
            .iter()
            .find(|(_, name)| *name == "秋分の日")
            .map(|(d, _)| d);
        let vernal = vernal.unwrap_or_else(|| panic!("no 春分の日 in {year}"));
        assert_eq!(vernal.month(), 3, "春分の日 outside March in {year}");
        assert!(
            (19..=22).contains(&vernal.day_of_month()),
            "implausible 春分の日 in {year}: {vernal}"
        );
        let autumnal = autumnal.unwrap_or_else(|| panic!("no 秋分の日 in {year}"));
        assert_eq!(autumnal.month(), 9, "秋分の日 outside September in {year}");
        assert!(
            (21..=24).contains(&autumnal.day_of_month()),
            "implausible 秋分の日 in {year}: {autumnal}"
        );
    }
}

#[test]
fn substitutes_pair_with_sunday_sources() {
    for year in 1970..=2200u16 {
        let table = HolidayTable::for_year(year).unwrap();
        for (day, name) in table.iter() {
            if let Some(base) = name.strip_suffix(SUBSTITUTE_SUFFIX) {
                assert_eq!(
                    day.weekday(),
                    Weekday::Monday,
                    "substitute {name} not on a Monday in {year}"
                );
                let source = day.add_days(-1).unwrap();
                assert_eq!(source.weekday(), Weekday::Sunday);
                assert_eq!(
                    table.name_of(source),
                    Some(base),
                    "substitute {name} has no Sunday source in {year}"
                );
            }
        }
    }
}

#[test]
fn sunday_holidays_are_always_observed() {
    for year in 1970..=2200u16 {
        let table = HolidayTable::for_year(year).unwrap();
        for (day, name) in table.iter() {
            if day.weekday() == Weekday::Sunday {
                let observed = day.add_days(1).unwrap();
                assert_eq!(
                    table.name_of(observed),
                    Some(format!("{name}{SUBSTITUTE_SUFFIX}").as_str()),
                    "Sunday holiday {name} not observed in {year}"
                );
            }
        }
    }
}
