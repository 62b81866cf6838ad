//! Bid increment rules and money formatting.
//!
//! Amounts arrive as `f64` dollars. The increment is computed in whole cents
//! and rounded up so the advertised minimum is always a payable amount.

#[cfg(test)]
#[path = "bid_test.rs"]
mod bid_test;

/// Minimum raise over the current bid, in percent.
pub const BID_INCREMENT_PERCENT: i64 = 1;

#[allow(clippy::cast_possible_truncation)]
fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[allow(clippy::cast_precision_loss)]
fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// The price the next bid is measured against: the current bid, or the
/// starting bid while nobody has bid yet.
pub fn asking_price(current_bid: Option<f64>, starting_bid: f64) -> f64 {
    current_bid.filter(|bid| *bid > 0.0).unwrap_or(starting_bid)
}

/// Caption for the price shown next to a listing.
pub fn price_caption(current_bid: Option<f64>) -> &'static str {
    if current_bid.is_some_and(|bid| bid > 0.0) { "Current Bid" } else { "Starting Bid" }
}

/// Smallest acceptable next bid: asking price plus the increment.
pub fn minimum_bid(current_bid: Option<f64>, starting_bid: f64) -> f64 {
    let base = to_cents(asking_price(current_bid, starting_bid)).max(0);
    let scaled = base * (100 + BID_INCREMENT_PERCENT);
    from_cents((scaled + 99) / 100)
}

/// Parse a typed bid. Blank, non-numeric, non-finite or non-positive input
/// yields `None`.
pub fn parse_bid_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Client-side gate in front of the place-bid request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BidGate {
    pub minimum: f64,
    /// A bid request is already in flight.
    pub pending: bool,
    pub ended: bool,
}

impl BidGate {
    /// The amount to submit, or `None` when the button must stay disabled.
    pub fn accept(&self, input: &str) -> Option<f64> {
        if self.pending || self.ended {
            return None;
        }
        parse_bid_amount(input).filter(|amount| *amount >= self.minimum)
    }

    pub fn is_disabled(&self, input: &str) -> bool {
        self.accept(input).is_none()
    }
}

/// `$1,234.50` style dollars.
pub fn format_currency(amount: f64) -> String {
    let cents = to_cents(amount);
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Input placeholder for the minimum bid, without separators.
pub fn format_plain(amount: f64) -> String {
    format!("{amount:.2}")
}
