use super::*;

fn item_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "a1",
        "title": "Leica M3",
        "category": "collectibles",
        "description": "1954 body",
        "condition": "used",
        "image": { "url": "https://img/1.jpg", "publicId": "p1" },
        "startingBid": 50,
        "currentBid": "120.5",
        "startTime": "2025-01-01T10:00:00Z",
        "endTime": "2025-01-03T10:00:00Z",
        "bids": [
            { "_id": "b1", "userId": "u2", "amount": 120.5, "createdAt": "2025-01-02T10:00:00Z" }
        ]
    })
}

// =============================================================
// AuctionItem
// =============================================================

#[test]
fn auction_item_accepts_mongo_id_and_string_amounts() {
    let item: AuctionItem = serde_json::from_value(item_json()).unwrap();
    assert_eq!(item.id, "a1");
    assert_eq!(item.starting_bid, 50.0);
    assert_eq!(item.current_bid, Some(120.5));
    assert_eq!(item.image_url(), Some("https://img/1.jpg"));
    assert_eq!(item.total_bids(), 1);
    assert_eq!(item.bids[0].bidder.as_deref(), Some("u2"));
}

#[test]
fn auction_item_without_bids_or_image_uses_defaults() {
    let item: AuctionItem = serde_json::from_value(serde_json::json!({
        "id": "a2",
        "title": "Canvas",
        "startingBid": 10,
        "startTime": "2025-01-01T10:00:00Z",
        "endTime": "2025-01-01T11:00:00Z"
    }))
    .unwrap();
    assert_eq!(item.current_bid, None);
    assert!(item.bids.is_empty());
    assert!(item.image_url().is_none());
    assert!(item.category.is_empty());
}

#[test]
fn auction_item_rejects_non_numeric_amount() {
    let mut raw = item_json();
    raw["startingBid"] = serde_json::json!("fifty");
    assert!(serde_json::from_value::<AuctionItem>(raw).is_err());
}

#[test]
fn auction_item_current_bid_null_is_none() {
    let mut raw = item_json();
    raw["currentBid"] = serde_json::Value::Null;
    let item: AuctionItem = serde_json::from_value(raw).unwrap();
    assert_eq!(item.current_bid, None);
}

// =============================================================
// Responses
// =============================================================

#[test]
fn auth_response_parses_user_role() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "t0k",
        "user": { "_id": "u1", "userName": "Ada", "email": "ada@example.com", "role": "Auctioneer" }
    }))
    .unwrap();
    assert_eq!(resp.token, "t0k");
    assert_eq!(resp.user.name, "Ada");
    assert!(resp.user.is_auctioneer());
    assert!(!resp.user.is_bidder());
}

#[test]
fn user_survives_storage_round_trip() {
    let user = User {
        id: "u1".to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Bidder,
        profile_image: None,
        payout_details: None,
    };
    let raw = serde_json::to_string(&user).unwrap();
    assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
}

#[test]
fn auction_detail_reads_bidders() {
    let detail: AuctionDetail = serde_json::from_value(serde_json::json!({
        "auctionItem": item_json(),
        "bidders": [
            { "userName": "Bo", "profileImage": null, "amount": 120.5 },
            { "amount": 100 }
        ]
    }))
    .unwrap();
    assert_eq!(detail.bidders.len(), 2);
    assert_eq!(detail.bidders[0].display_name(), "Bo");
    assert_eq!(detail.bidders[1].display_name(), "Anonymous");
}

#[test]
fn created_auction_accepts_wrapped_and_bare_items() {
    let wrapped: CreatedAuction =
        serde_json::from_value(serde_json::json!({ "auctionItem": item_json() })).unwrap();
    let bare: CreatedAuction = serde_json::from_value(item_json()).unwrap();
    assert_eq!(wrapped.into_item().id, "a1");
    assert_eq!(bare.into_item().id, "a1");
}

#[test]
fn place_bid_response_tolerates_unknown_shape() {
    let resp: PlaceBidResponse =
        serde_json::from_value(serde_json::json!({ "message": "Bid placed", "bid": {} })).unwrap();
    assert_eq!(resp.message.as_deref(), Some("Bid placed"));
    assert_eq!(resp.current_bid, None);
}

// =============================================================
// Role / payout
// =============================================================

#[test]
fn role_wire_values_match_backend_spelling() {
    assert_eq!(Role::Bidder.as_str(), "Bidder");
    assert_eq!(Role::Auctioneer.as_str(), "Auctioneer");
    assert_eq!(serde_json::to_value(Role::Auctioneer).unwrap(), serde_json::json!("Auctioneer"));
}

#[test]
fn payout_details_blank_fields_count_as_empty() {
    let mut payout = PayoutDetails { bank_name: Some("  ".to_owned()), ..PayoutDetails::default() };
    assert!(payout.is_empty());
    payout.paypal_email = Some("pay@example.com".to_owned());
    assert!(!payout.is_empty());
}
