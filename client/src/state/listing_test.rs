use chrono::TimeZone;

use super::*;
use crate::net::types::BidRef;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

fn item(id: &str, started_hours_ago: i64, ends_in_minutes: i64, bids: usize) -> AuctionItem {
    AuctionItem {
        id: id.to_owned(),
        title: id.to_owned(),
        category: "art".to_owned(),
        description: String::new(),
        condition: "new".to_owned(),
        image: None,
        starting_bid: 10.0,
        current_bid: None,
        start_time: now() - TimeDelta::hours(started_hours_ago),
        end_time: now() + TimeDelta::minutes(ends_in_minutes),
        bids: vec![BidRef { id: None, bidder: None, amount: Some(11.0), timestamp: None }; bids],
    }
}

fn ids(items: &[AuctionItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

fn sample() -> Vec<AuctionItem> {
    vec![
        item("old-long", 72, 600, 3),
        item("fresh", 2, 300, 0),
        item("closing", 48, 30, 9),
        item("closing-sooner", 30, 10, 1),
        item("ended", 96, -5, 4),
    ]
}

#[test]
fn all_keeps_server_order() {
    assert_eq!(
        ids(&apply_filter(&sample(), FilterTab::All, now())),
        ["old-long", "fresh", "closing", "closing-sooner", "ended"]
    );
}

#[test]
fn ending_soon_keeps_live_auctions_within_an_hour() {
    assert_eq!(
        ids(&apply_filter(&sample(), FilterTab::EndingSoon, now())),
        ["closing-sooner", "closing"]
    );
}

#[test]
fn new_keeps_recent_starts_newest_first() {
    let mut items = sample();
    items.push(item("fresher", 1, 120, 0));
    assert_eq!(ids(&apply_filter(&items, FilterTab::New, now())), ["fresher", "fresh"]);
}

#[test]
fn popular_sorts_by_bid_count() {
    assert_eq!(
        ids(&apply_filter(&sample(), FilterTab::Popular, now())),
        ["closing", "ended", "old-long", "closing-sooner", "fresh"]
    );
}

#[test]
fn tab_labels_match_tab_bar() {
    let labels: Vec<_> = FilterTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["All", "Ending Soon", "New", "Popular"]);
    assert_eq!(FilterTab::default(), FilterTab::All);
}
