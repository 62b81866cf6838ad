//! Form validation for login, registration and auction creation.
//!
//! Validators return every failing field at once so the form can render all
//! inline errors in a single pass. Messages are user-facing.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::net::types::{LoginRequest, PayoutDetails, Role};

/// Field name -> first error message for that field.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Most images a single listing may carry.
pub const MAX_IMAGES: usize = 10;

/// `datetime-local` input format.
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Listing categories as `(value, label)`.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("art", "Art & Craft"),
    ("automobiles", "Automobiles"),
    ("books", "Books & Manuscripts"),
    ("collectibles", "Collectibles"),
    ("electronics", "Electronics"),
    ("fashion", "Fashion & Accessories"),
    ("jewelry", "Jewelry & Watches"),
    ("real-estate", "Real Estate"),
    ("sports", "Sports Memorabilia"),
];

/// Item conditions as `(value, label)`.
pub const CONDITIONS: &[(&str, &str)] = &[("new", "New"), ("used", "Used"), ("refurbished", "Refurbished")];

/// Display label for a category value; unknown values are shown as sent.
pub fn category_label(value: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(value, |(_, label)| *label)
}

/// Loose `x@y.z` shape check, the same bar the backend applies.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// Digits, spaces, `-`, `(`, `)` and an optional leading `+`.
pub fn is_valid_phone(phone: &str) -> bool {
    let body = phone.strip_prefix('+').unwrap_or(phone);
    !body.is_empty()
        && body.chars().any(|c| c.is_ascii_digit())
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}

fn is_strong_password(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.insert("email", "Email is required.");
    } else if !is_valid_email(email) {
        errors.insert("email", "Invalid email address.");
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Validate the login form and build the request body.
///
/// # Errors
///
/// Returns the per-field errors when any field is invalid.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, FieldErrors> {
    let email = email.trim();
    let mut errors = FieldErrors::new();
    check_email(email, &mut errors);
    if password.is_empty() {
        errors.insert("password", "Password is required.");
    } else if password.chars().count() < 6 {
        errors.insert("password", "Password must be at least 6 characters.");
    }

    if errors.is_empty() {
        Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

// =============================================================================
// REGISTER
// =============================================================================

/// Registration form contents (the profile image is carried separately).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub agree_to_terms: bool,
    pub payout: PayoutDetails,
}

impl RegisterForm {
    /// Multipart text fields in submission order. Payout fields are only sent
    /// for auctioneers.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("userName", self.name.trim().to_owned()),
            ("email", self.email.trim().to_owned()),
            ("phone", self.phone.trim().to_owned()),
            ("password", self.password.clone()),
            ("role", self.role.as_str().to_owned()),
        ];
        if self.role == Role::Auctioneer && !self.payout.is_empty() {
            let payout = [
                ("bankAccountName", &self.payout.bank_account_name),
                ("bankAccountNumber", &self.payout.bank_account_number),
                ("bankName", &self.payout.bank_name),
                ("paypalEmail", &self.payout.paypal_email),
            ];
            fields.extend(payout.into_iter().filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_owned()))
            }));
        }
        fields
    }
}

/// Validate the registration form.
///
/// # Errors
///
/// Returns the per-field errors when any field is invalid.
pub fn validate_register(form: &RegisterForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.insert("name", "Full name is required.");
    } else if name.chars().count() < 3 {
        errors.insert("name", "Name must be at least 3 characters.");
    }

    check_email(form.email.trim(), &mut errors);

    let phone = form.phone.trim();
    if phone.is_empty() {
        errors.insert("phone", "Phone number is required.");
    } else if !is_valid_phone(phone) {
        errors.insert("phone", "Phone number is invalid.");
    }

    if form.password.is_empty() {
        errors.insert("password", "Password is required.");
    } else if form.password.chars().count() < 8 {
        errors.insert("password", "Password must be at least 8 characters.");
    } else if !is_strong_password(&form.password) {
        errors.insert("password", "Password must contain uppercase, lowercase, and number.");
    }

    if form.confirm_password.is_empty() {
        errors.insert("confirm_password", "Please confirm your password.");
    } else if form.password != form.confirm_password {
        errors.insert("confirm_password", "Passwords do not match.");
    }

    if !form.agree_to_terms {
        errors.insert("agree_to_terms", "You must agree to the terms and conditions.");
    }

    if form.role == Role::Auctioneer {
        if let Some(email) = form.payout.paypal_email.as_deref().map(str::trim) {
            if !email.is_empty() && !is_valid_email(email) {
                errors.insert("paypal_email", "Invalid PayPal email address.");
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

// =============================================================================
// CREATE AUCTION
// =============================================================================

/// A picked image file, described without holding the browser `File`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDraft {
    pub name: String,
    pub mime: String,
    /// Object URL for the thumbnail preview.
    pub preview_url: String,
}

impl ImageDraft {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Create-auction form contents as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuctionForm {
    pub title: String,
    pub category: String,
    pub description: String,
    pub condition: String,
    pub starting_bid: String,
    pub start_time: String,
    pub end_time: String,
}

impl AuctionForm {
    /// Multipart text fields, sent as typed (times stay in `datetime-local`
    /// form).
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.trim().to_owned()),
            ("category", self.category.clone()),
            ("description", self.description.trim().to_owned()),
            ("condition", self.condition.clone()),
            ("startingBid", self.starting_bid.trim().to_owned()),
            ("startTime", self.start_time.clone()),
            ("endTime", self.end_time.clone()),
        ]
    }
}

/// Whether `picked` more images still fit next to `existing` ones.
pub fn images_fit(existing: usize, picked: usize) -> bool {
    existing + picked <= MAX_IMAGES
}

fn parse_input_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_INPUT_FORMAT).ok()
}

fn is_known_option(options: &[(&str, &str)], value: &str) -> bool {
    options.iter().any(|(v, _)| *v == value)
}

/// Validate the create-auction form together with its picked images.
///
/// # Errors
///
/// Returns the per-field errors when any field is invalid.
pub fn validate_auction(form: &AuctionForm, images: &[ImageDraft]) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.title.trim().is_empty() {
        errors.insert("title", "Title is required.");
    }
    if !is_known_option(CATEGORIES, &form.category) {
        errors.insert("category", "Select a category.");
    }
    if form.description.trim().is_empty() {
        errors.insert("description", "Description is required.");
    }
    if !is_known_option(CONDITIONS, &form.condition) {
        errors.insert("condition", "Select a condition.");
    }

    match form.starting_bid.trim().parse::<f64>() {
        Ok(bid) if bid.is_finite() && bid >= 0.0 => {}
        Ok(_) => {
            errors.insert("starting_bid", "Starting bid cannot be negative.");
        }
        Err(_) if form.starting_bid.trim().is_empty() => {
            errors.insert("starting_bid", "Starting bid is required.");
        }
        Err(_) => {
            errors.insert("starting_bid", "Starting bid must be a number.");
        }
    }

    let start = parse_input_time(&form.start_time);
    let end = parse_input_time(&form.end_time);
    if start.is_none() {
        errors.insert("start_time", "Start time is required.");
    }
    if end.is_none() {
        errors.insert("end_time", "End time is required.");
    }
    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            errors.insert("end_time", "End time must be after start time.");
        }
    }

    if images.is_empty() {
        errors.insert("images", "Please upload at least one image.");
    } else if images.len() > MAX_IMAGES {
        errors.insert("images", "Maximum 10 images allowed.");
    } else if !images.iter().all(ImageDraft::is_image) {
        errors.insert("images", "Only image files can be uploaded.");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
