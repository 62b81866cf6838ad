use super::*;

// =============================================================
// Shape checks
// =============================================================

#[test]
fn email_shape() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@mail.example.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@.com"));
}

#[test]
fn phone_shape() {
    assert!(is_valid_phone("+1 (555) 123-4567"));
    assert!(is_valid_phone("0300 1234567"));
    assert!(!is_valid_phone("555-CALL"));
    assert!(!is_valid_phone("+"));
    assert!(!is_valid_phone("()-"));
}

#[test]
fn category_label_falls_back_to_raw_value() {
    assert_eq!(category_label("jewelry"), "Jewelry & Watches");
    assert_eq!(category_label("Luxury Watches"), "Luxury Watches");
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_trims_email_and_builds_request() {
    let req = validate_login("  ada@example.com ", "secret1").unwrap();
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password, "secret1");
}

#[test]
fn login_reports_every_failing_field() {
    let errors = validate_login("", "").unwrap_err();
    assert_eq!(errors.get("email"), Some(&"Email is required."));
    assert_eq!(errors.get("password"), Some(&"Password is required."));
}

#[test]
fn login_rejects_short_password_and_bad_email() {
    let errors = validate_login("nope", "12345").unwrap_err();
    assert_eq!(errors.get("email"), Some(&"Invalid email address."));
    assert_eq!(errors.get("password"), Some(&"Password must be at least 6 characters."));
}

// =============================================================
// Register
// =============================================================

fn register_form() -> RegisterForm {
    RegisterForm {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: "+44 20 7946 0000".to_owned(),
        password: "Engine123".to_owned(),
        confirm_password: "Engine123".to_owned(),
        role: Role::Bidder,
        agree_to_terms: true,
        payout: PayoutDetails::default(),
    }
}

#[test]
fn register_accepts_complete_form() {
    assert_eq!(validate_register(&register_form()), Ok(()));
}

#[test]
fn register_requires_strong_matching_password() {
    let weak = RegisterForm { password: "engine123".to_owned(), confirm_password: "engine123".to_owned(), ..register_form() };
    assert_eq!(
        validate_register(&weak).unwrap_err().get("password"),
        Some(&"Password must contain uppercase, lowercase, and number.")
    );

    let mismatch = RegisterForm { confirm_password: "Engine124".to_owned(), ..register_form() };
    assert_eq!(
        validate_register(&mismatch).unwrap_err().get("confirm_password"),
        Some(&"Passwords do not match.")
    );
}

#[test]
fn register_requires_terms_and_name_length() {
    let form = RegisterForm { name: " Al ".to_owned(), agree_to_terms: false, ..register_form() };
    let errors = validate_register(&form).unwrap_err();
    assert_eq!(errors.get("name"), Some(&"Name must be at least 3 characters."));
    assert_eq!(errors.get("agree_to_terms"), Some(&"You must agree to the terms and conditions."));
}

#[test]
fn register_checks_auctioneer_paypal_email() {
    let mut form = RegisterForm { role: Role::Auctioneer, ..register_form() };
    form.payout.paypal_email = Some("not-an-email".to_owned());
    assert!(validate_register(&form).unwrap_err().contains_key("paypal_email"));

    form.role = Role::Bidder;
    assert_eq!(validate_register(&form), Ok(()));
}

#[test]
fn register_multipart_fields_skip_blank_payout_for_auctioneers() {
    let mut form = RegisterForm { role: Role::Auctioneer, ..register_form() };
    form.payout.bank_name = Some("   ".to_owned());
    let keys: Vec<_> = form.multipart_fields().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["userName", "email", "phone", "password", "role"]);
}

#[test]
fn register_multipart_fields_include_payout_only_for_auctioneers() {
    let mut form = register_form();
    form.payout.bank_name = Some("First Bank".to_owned());
    let keys = |f: &RegisterForm| f.multipart_fields().into_iter().map(|(k, _)| k).collect::<Vec<_>>();

    assert!(!keys(&form).contains(&"bankName"));
    form.role = Role::Auctioneer;
    let fields = form.multipart_fields();
    assert!(fields.contains(&("bankName", "First Bank".to_owned())));
    assert!(fields.contains(&("role", "Auctioneer".to_owned())));
    assert!(!keys(&form).contains(&"paypalEmail"));
}

// =============================================================
// Create auction
// =============================================================

fn auction_form() -> AuctionForm {
    AuctionForm {
        title: "Leica M3".to_owned(),
        category: "collectibles".to_owned(),
        description: "1954 body, serviced".to_owned(),
        condition: "used".to_owned(),
        starting_bid: "3400".to_owned(),
        start_time: "2025-03-01T10:00".to_owned(),
        end_time: "2025-03-08T10:00".to_owned(),
    }
}

fn image(mime: &str) -> ImageDraft {
    ImageDraft { name: "photo".to_owned(), mime: mime.to_owned(), preview_url: "blob:x".to_owned() }
}

#[test]
fn auction_accepts_complete_form() {
    assert_eq!(validate_auction(&auction_form(), &[image("image/jpeg")]), Ok(()));
}

#[test]
fn auction_requires_at_least_one_image() {
    let errors = validate_auction(&auction_form(), &[]).unwrap_err();
    assert_eq!(errors.get("images"), Some(&"Please upload at least one image."));
}

#[test]
fn auction_rejects_too_many_or_non_image_files() {
    let many = vec![image("image/png"); MAX_IMAGES + 1];
    assert_eq!(
        validate_auction(&auction_form(), &many).unwrap_err().get("images"),
        Some(&"Maximum 10 images allowed.")
    );
    assert!(validate_auction(&auction_form(), &[image("application/pdf")]).is_err());
    assert!(images_fit(8, 2));
    assert!(!images_fit(8, 3));
}

#[test]
fn auction_end_must_follow_start() {
    let form = AuctionForm { end_time: "2025-03-01T10:00".to_owned(), ..auction_form() };
    assert_eq!(
        validate_auction(&form, &[image("image/png")]).unwrap_err().get("end_time"),
        Some(&"End time must be after start time.")
    );
}

#[test]
fn auction_validates_starting_bid_and_options() {
    let form = AuctionForm {
        starting_bid: "-5".to_owned(),
        category: "spaceships".to_owned(),
        condition: String::new(),
        ..auction_form()
    };
    let errors = validate_auction(&form, &[image("image/png")]).unwrap_err();
    assert_eq!(errors.get("starting_bid"), Some(&"Starting bid cannot be negative."));
    assert!(errors.contains_key("category"));
    assert!(errors.contains_key("condition"));

    let blank = AuctionForm { starting_bid: " ".to_owned(), ..auction_form() };
    assert_eq!(
        validate_auction(&blank, &[image("image/png")]).unwrap_err().get("starting_bid"),
        Some(&"Starting bid is required.")
    );
}

#[test]
fn auction_multipart_fields_use_wire_names() {
    let keys: Vec<_> = auction_form().multipart_fields().into_iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        ["title", "category", "description", "condition", "startingBid", "startTime", "endTime"]
    );
}
