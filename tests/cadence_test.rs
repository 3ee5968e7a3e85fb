use chrono::{Duration, NaiveDate};
use rss_digest::cadence::{period_for, should_run_today};
use rss_digest::CadenceTable;

fn table(pairs: &[(&str, i64)]) -> CadenceTable {
    pairs
        .iter()
        .map(|(tag, period)| (tag.to_string(), *period))
        .collect()
}

#[test]
fn absent_and_empty_tags_run_daily() {
    let cadence = table(&[("weekly", 7)]);

    assert_eq!(period_for("", &cadence), 1);
    assert_eq!(period_for("unknown", &cadence), 1);
    assert_eq!(period_for("weekly", &cadence), 7);
}

#[test]
fn non_positive_periods_fall_back_to_daily() {
    let cadence = table(&[("zero", 0), ("negative", -3)]);

    assert_eq!(period_for("zero", &cadence), 1);
    assert_eq!(period_for("negative", &cadence), 1);

    let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    assert!(should_run_today("zero", &cadence, day));
    assert!(should_run_today("negative", &cadence, day));
}

#[test]
fn exactly_one_scheduled_day_per_period() {
    for period in [1i64, 2, 3, 7] {
        let cadence = table(&[("tag", period)]);
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let days: Vec<bool> = (0..period * 10)
            .map(|offset| should_run_today("tag", &cadence, start + Duration::days(offset)))
            .collect();

        for window in days.chunks(period as usize) {
            assert_eq!(
                window.iter().filter(|scheduled| **scheduled).count(),
                1,
                "period {} should schedule one day per window",
                period
            );
        }
    }
}

#[test]
fn schedule_is_deterministic_for_a_given_day() {
    let cadence = table(&[("tag", 3)]);
    let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

    let first = should_run_today("tag", &cadence, day);
    for _ in 0..5 {
        assert_eq!(should_run_today("tag", &cadence, day), first);
    }
}
