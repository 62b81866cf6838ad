use super::*;

// =============================================================
// minimum_bid
// =============================================================

#[test]
fn minimum_bid_is_one_percent_over_current_bid() {
    assert_eq!(minimum_bid(Some(100.0), 50.0), 101.0);
}

#[test]
fn minimum_bid_falls_back_to_starting_bid_without_bids() {
    assert_eq!(minimum_bid(None, 50.0), 50.5);
    assert_eq!(minimum_bid(Some(0.0), 50.0), 50.5);
}

#[test]
fn minimum_bid_rounds_up_to_whole_cent() {
    assert_eq!(minimum_bid(Some(33.33), 1.0), 33.67);
    assert_eq!(minimum_bid(Some(24_500.0), 1.0), 24_745.0);
}

#[test]
fn asking_price_prefers_positive_current_bid() {
    assert_eq!(asking_price(Some(80.0), 50.0), 80.0);
    assert_eq!(asking_price(Some(-1.0), 50.0), 50.0);
}

#[test]
fn caption_reflects_whether_anyone_has_bid() {
    assert_eq!(price_caption(Some(120.0)), "Current Bid");
    assert_eq!(price_caption(Some(0.0)), "Starting Bid");
    assert_eq!(price_caption(None), "Starting Bid");
}

// =============================================================
// BidGate
// =============================================================

fn gate() -> BidGate {
    BidGate { minimum: 101.0, pending: false, ended: false }
}

#[test]
fn bid_below_minimum_is_never_submitted() {
    assert_eq!(gate().accept("100.99"), None);
    assert_eq!(gate().accept("1"), None);
    assert!(gate().is_disabled("100"));
}

#[test]
fn bid_at_or_above_minimum_is_submitted() {
    assert_eq!(gate().accept("101"), Some(101.0));
    assert_eq!(gate().accept(" 150.25 "), Some(150.25));
}

#[test]
fn non_numeric_or_empty_input_is_rejected() {
    for input in ["", "   ", "abc", "NaN", "inf", "-200"] {
        assert_eq!(gate().accept(input), None, "input {input:?}");
    }
}

#[test]
fn pending_or_ended_auction_disables_submission() {
    let pending = BidGate { pending: true, ..gate() };
    let ended = BidGate { ended: true, ..gate() };
    assert!(pending.is_disabled("500"));
    assert!(ended.is_disabled("500"));
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn currency_groups_thousands_with_two_decimals() {
    assert_eq!(format_currency(24_500.0), "$24,500.00");
    assert_eq!(format_currency(1_234_567.5), "$1,234,567.50");
    assert_eq!(format_currency(999.0), "$999.00");
    assert_eq!(format_currency(0.5), "$0.50");
}

#[test]
fn currency_handles_negative_amounts() {
    assert_eq!(format_currency(-1_000.0), "-$1,000.00");
}

#[test]
fn plain_format_has_two_decimals() {
    assert_eq!(format_plain(50.5), "50.50");
}
