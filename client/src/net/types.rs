//! Wire DTOs for the auction REST API.
//!
//! DESIGN
//! ======
//! The backend is external and speaks camelCase JSON with Mongo-style `_id`
//! keys. These types accept both id spellings and tolerate amounts sent as
//! numeric strings so a loosely-typed backend does not break rendering.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role. Serialized exactly as the backend spells it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Bidder,
    Auctioneer,
}

impl Role {
    /// Wire/form value for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bidder => "Bidder",
            Self::Auctioneer => "Auctioneer",
        }
    }
}

/// Where an auctioneer gets paid. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_email: Option<String>,
}

impl PayoutDetails {
    /// True when no payout field carries a non-blank value.
    pub fn is_empty(&self) -> bool {
        [
            &self.bank_account_name,
            &self.bank_account_number,
            &self.bank_name,
            &self.paypal_email,
        ]
        .iter()
        .all(|field| field.as_deref().is_none_or(|v| v.trim().is_empty()))
    }
}

/// An authenticated user as returned by login/register and cached in storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Display name.
    #[serde(alias = "userName")]
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Profile image URL, if one was uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_details: Option<PayoutDetails>,
}

impl User {
    pub fn is_auctioneer(&self) -> bool {
        self.role == Role::Auctioneer
    }

    pub fn is_bidder(&self) -> bool {
        self.role == Role::Bidder
    }
}

/// Uploaded image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

/// A bid as embedded in an auction item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRef {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Bidder user id.
    #[serde(default, alias = "userId", skip_serializing_if = "Option::is_none")]
    pub bidder: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub amount: Option<f64>,
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// An auction listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(deserialize_with = "deserialize_amount")]
    pub starting_bid: f64,
    /// Highest accepted bid so far; absent or zero before the first bid.
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub current_bid: Option<f64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub bids: Vec<BidRef>,
}

impl AuctionItem {
    pub fn total_bids(&self) -> usize {
        self.bids.len()
    }

    /// Image URL, if the listing has one.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.url.as_str())
    }
}

/// One row of an auction's bidding history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidderEntry {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub amount: Option<f64>,
}

impl BidderEntry {
    pub fn display_name(&self) -> &str {
        self.user_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Anonymous")
    }
}

/// `POST /user/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /bid/place/:id` request body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlaceBidRequest {
    pub amount: f64,
}

/// Login and register response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Response of both item list endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<AuctionItem>,
}

/// `GET /auctionitem/auction/:id` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetail {
    pub auction_item: AuctionItem,
    #[serde(default)]
    pub bidders: Vec<BidderEntry>,
}

/// `POST /auctionitem/create` response: either the bare item or wrapped.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CreatedAuction {
    Wrapped {
        #[serde(rename = "auctionItem")]
        auction_item: AuctionItem,
    },
    Bare(AuctionItem),
}

impl CreatedAuction {
    pub fn into_item(self) -> AuctionItem {
        match self {
            Self::Wrapped { auction_item } | Self::Bare(auction_item) => auction_item,
        }
    }
}

/// `POST /bid/place/:id` response. Only the fields the UI reads are kept.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBidResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_amount")]
    pub current_bid: Option<f64>,
}

fn amount_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<Option<f64>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number
            .as_f64()
            .filter(|amount| amount.is_finite())
            .map(Some)
            .ok_or_else(|| E::custom("expected finite amount")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .map(Some)
            .ok_or_else(|| E::custom(format!("invalid amount {raw:?}"))),
        _ => Err(E::custom("expected number or numeric string")),
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    amount_from_value::<D::Error>(&value)?.ok_or_else(|| D::Error::custom("amount is required"))
}

fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    amount_from_value::<D::Error>(&value)
}
