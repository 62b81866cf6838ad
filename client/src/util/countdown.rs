//! Remaining-time math for auction countdowns.
//!
//! The countdown shows the two largest non-zero units: `2d 3h`, `1d 30m`,
//! `45m 12s`, `3h`, `9s`.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

/// Ended label used on listing cards.
pub const ENDED_SHORT: &str = "Ended";
/// Ended label used on the auction detail page.
pub const ENDED_LONG: &str = "Auction Ended";

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Badge state derived from the time left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuctionStatus {
    Live,
    /// One hour or less remaining.
    EndingSoon,
    Ended,
}

impl AuctionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::EndingSoon => "Ending Soon",
            Self::Ended => ENDED_SHORT,
        }
    }

    /// BEM modifier class for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Live => "status-badge status-badge--live",
            Self::EndingSoon => "status-badge status-badge--ending",
            Self::Ended => "status-badge status-badge--ended",
        }
    }
}

pub fn remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> TimeDelta {
    end.signed_duration_since(now)
}

pub fn status(remaining: TimeDelta) -> AuctionStatus {
    if remaining <= TimeDelta::zero() {
        AuctionStatus::Ended
    } else if remaining <= TimeDelta::hours(1) {
        AuctionStatus::EndingSoon
    } else {
        AuctionStatus::Live
    }
}

/// Format a positive duration; `None` once the auction has ended.
pub fn format_time_left(remaining: TimeDelta) -> Option<String> {
    if remaining <= TimeDelta::zero() {
        return None;
    }
    let total = remaining.num_seconds();
    let units = [
        (total / SECS_PER_DAY, 'd'),
        (total % SECS_PER_DAY / SECS_PER_HOUR, 'h'),
        (total % SECS_PER_HOUR / SECS_PER_MINUTE, 'm'),
        (total % SECS_PER_MINUTE, 's'),
    ];

    let Some(lead) = units.iter().position(|(value, _)| *value > 0) else {
        return Some("0s".to_owned());
    };
    let (value, suffix) = units[lead];
    let mut out = format!("{value}{suffix}");
    if let Some((next, next_suffix)) = units[lead + 1..].iter().find(|(next, _)| *next > 0) {
        out.push_str(&format!(" {next}{next_suffix}"));
    }
    Some(out)
}

/// Countdown text for `end` at `now`, using `ended_label` once time is up.
pub fn countdown_label(end: DateTime<Utc>, now: DateTime<Utc>, ended_label: &str) -> String {
    format_time_left(remaining(end, now)).unwrap_or_else(|| ended_label.to_owned())
}

pub fn has_ended(end: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    remaining(end, now) <= TimeDelta::zero()
}

/// `Mar 5, 2025, 02:30 PM` style timestamp in the zone of `at`.
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}
