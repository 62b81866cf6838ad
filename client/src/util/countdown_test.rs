use chrono::TimeZone;

use super::*;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

fn span(days: i64, hours: i64, minutes: i64, seconds: i64) -> TimeDelta {
    TimeDelta::days(days) + TimeDelta::hours(hours) + TimeDelta::minutes(minutes) + TimeDelta::seconds(seconds)
}

// =============================================================
// Ended state
// =============================================================

#[test]
fn past_end_renders_ended() {
    for offset in [-1, -60, -86_400 * 30] {
        assert_eq!(countdown_label(at(offset), at(0), ENDED_LONG), "Auction Ended");
        assert_eq!(countdown_label(at(offset), at(0), ENDED_SHORT), "Ended");
        assert!(has_ended(at(offset), at(0)));
    }
}

#[test]
fn exact_end_instant_is_ended() {
    assert_eq!(format_time_left(remaining(at(0), at(0))), None);
    assert_eq!(status(TimeDelta::zero()), AuctionStatus::Ended);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn seconds_only_omits_larger_units() {
    assert_eq!(format_time_left(TimeDelta::seconds(45)).as_deref(), Some("45s"));
}

#[test]
fn two_largest_units_are_shown() {
    assert_eq!(format_time_left(span(2, 3, 4, 5)).as_deref(), Some("2d 3h"));
    assert_eq!(format_time_left(span(0, 5, 18, 9)).as_deref(), Some("5h 18m"));
    assert_eq!(format_time_left(span(0, 0, 45, 12)).as_deref(), Some("45m 12s"));
}

#[test]
fn zero_middle_unit_is_skipped_for_next_non_zero() {
    assert_eq!(format_time_left(span(1, 0, 30, 0)).as_deref(), Some("1d 30m"));
    assert_eq!(format_time_left(span(0, 3, 0, 59)).as_deref(), Some("3h 59s"));
    assert_eq!(format_time_left(span(2, 0, 0, 7)).as_deref(), Some("2d 7s"));
}

#[test]
fn single_non_zero_unit_stands_alone() {
    assert_eq!(format_time_left(span(1, 0, 0, 0)).as_deref(), Some("1d"));
    assert_eq!(format_time_left(span(0, 0, 10, 0)).as_deref(), Some("10m"));
}

#[test]
fn sub_second_remainder_shows_zero_seconds() {
    assert_eq!(format_time_left(TimeDelta::milliseconds(400)).as_deref(), Some("0s"));
}

#[test]
fn label_counts_down_from_end() {
    assert_eq!(countdown_label(at(90), at(0), ENDED_SHORT), "1m 30s");
    assert_eq!(countdown_label(at(90), at(89), ENDED_SHORT), "1s");
}

// =============================================================
// Status
// =============================================================

#[test]
fn status_thresholds() {
    assert_eq!(status(TimeDelta::hours(2)), AuctionStatus::Live);
    assert_eq!(status(TimeDelta::hours(1)), AuctionStatus::EndingSoon);
    assert_eq!(status(TimeDelta::seconds(1)), AuctionStatus::EndingSoon);
    assert_eq!(status(TimeDelta::seconds(-1)), AuctionStatus::Ended);
}

#[test]
fn status_labels() {
    assert_eq!(AuctionStatus::Live.label(), "Live");
    assert_eq!(AuctionStatus::EndingSoon.label(), "Ending Soon");
    assert_eq!(AuctionStatus::Ended.label(), "Ended");
}

#[test]
fn timestamp_uses_short_month_and_twelve_hour_clock() {
    let at = Utc.with_ymd_and_hms(2025, 3, 5, 14, 30, 0).unwrap();
    assert_eq!(format_timestamp(&at), "Mar 5, 2025, 02:30 PM");
}
