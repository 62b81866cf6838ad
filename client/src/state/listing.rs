//! Home-page listing filters.
//!
//! DESIGN
//! ======
//! Filtering runs on the fetched list in the browser; the list endpoint has
//! no query parameters.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use chrono::{DateTime, TimeDelta, Utc};

use crate::net::types::AuctionItem;
use crate::util::countdown::{AuctionStatus, remaining, status};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterTab {
    #[default]
    All,
    EndingSoon,
    New,
    Popular,
}

impl FilterTab {
    pub const ALL: [Self; 4] = [Self::All, Self::EndingSoon, Self::New, Self::Popular];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::EndingSoon => "Ending Soon",
            Self::New => "New",
            Self::Popular => "Popular",
        }
    }
}

/// Window within which a started auction counts as new.
const NEW_WINDOW_HOURS: i64 = 24;

/// Apply `tab` to `items` as of `now`.
///
/// - `EndingSoon`: live auctions with an hour or less left, soonest first.
/// - `New`: auctions started within the last day, newest first.
/// - `Popular`: every auction, most bids first.
pub fn apply_filter(items: &[AuctionItem], tab: FilterTab, now: DateTime<Utc>) -> Vec<AuctionItem> {
    let mut out: Vec<AuctionItem> = match tab {
        FilterTab::All | FilterTab::Popular => items.to_vec(),
        FilterTab::EndingSoon => items
            .iter()
            .filter(|item| status(remaining(item.end_time, now)) == AuctionStatus::EndingSoon)
            .cloned()
            .collect(),
        FilterTab::New => items
            .iter()
            .filter(|item| {
                let age = now.signed_duration_since(item.start_time);
                age >= TimeDelta::zero() && age <= TimeDelta::hours(NEW_WINDOW_HOURS)
            })
            .cloned()
            .collect(),
    };

    match tab {
        FilterTab::All => {}
        FilterTab::EndingSoon => out.sort_by_key(|item| item.end_time),
        FilterTab::New => out.sort_by(|a, b| b.start_time.cmp(&a.start_time)),
        FilterTab::Popular => out.sort_by(|a, b| b.total_bids().cmp(&a.total_bids())),
    }
    out
}
