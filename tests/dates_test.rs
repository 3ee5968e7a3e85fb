use chrono::{Duration, TimeZone, Utc};
use rss_digest::dates::{is_recent, resolve};

#[test]
fn resolves_rfc1123_with_named_zone() {
    let resolved = resolve("Mon, 02 Jan 2006 15:04:05 GMT").unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap());
}

#[test]
fn resolves_rfc1123_with_numeric_zone() {
    let resolved = resolve("Mon, 02 Jan 2006 15:04:05 -0700").unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2006, 1, 2, 22, 4, 5).unwrap());
}

#[test]
fn resolves_rfc3339() {
    let resolved = resolve("2006-01-02T15:04:05Z").unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap());
}

#[test]
fn resolves_zoneless_formats_as_utc() {
    let resolved = resolve("2006-01-02 15:04:05").unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap());

    let resolved = resolve("Mon, 02 Jan 2006 15:04:05").unwrap();
    assert_eq!(resolved, Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap());
}

#[test]
fn unparseable_dates_resolve_to_none() {
    assert!(resolve("").is_none());
    assert!(resolve("three days ago").is_none());
    assert!(resolve("02/01/2006").is_none());
}

#[test]
fn grace_window_boundary_one_day() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    // 1 day * 1.1 = 95040 seconds.
    let boundary = now - Duration::seconds(95_040);

    assert!(is_recent(boundary, now, 1));
    assert!(!is_recent(boundary - Duration::seconds(1), now, 1));
}

#[test]
fn grace_window_scales_with_period() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    // 7 days * 1.1 = 665280 seconds.
    let boundary = now - Duration::seconds(665_280);

    assert!(is_recent(boundary, now, 7));
    assert!(!is_recent(boundary - Duration::seconds(1), now, 7));
}

#[test]
fn future_dates_are_recent() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    assert!(is_recent(now + Duration::hours(6), now, 1));
}
