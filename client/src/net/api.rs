//! REST client for the auction backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! stored bearer token and raced against a timeout.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Server` with the body's `message`
//! verbatim; transport failures and timeouts become `ApiError::Network`.
//! Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuctionDetail, AuctionItem, AuthResponse, LoginRequest, PlaceBidResponse};
#[cfg(feature = "hydrate")]
use super::types::{CreatedAuction, ItemsResponse, PlaceBidRequest};

/// Versioned API root. Override at build time with `AUCTION_API_BASE`.
pub const API_BASE: &str = match option_env!("AUCTION_API_BASE") {
    Some(base) => base,
    None => "http://localhost:5000/api/v1",
};

/// Requests still pending after this long are reported as network failures.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", API_BASE.trim_end_matches('/'))
}

fn auction_detail_path(id: &str) -> String {
    format!("/auctionitem/auction/{id}")
}

fn place_bid_path(id: &str) -> String {
    format!("/bid/place/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Text fields plus (in the browser) attached files for a multipart POST.
#[derive(Default)]
pub struct MultipartForm {
    fields: Vec<(&'static str, String)>,
    #[cfg(feature = "hydrate")]
    files: Vec<(&'static str, web_sys::File)>,
}

impl MultipartForm {
    pub fn new(fields: Vec<(&'static str, String)>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Attach a file under `name`. Repeated names build a file list.
    #[cfg(feature = "hydrate")]
    pub fn attach(&mut self, name: &'static str, file: web_sys::File) {
        self.files.push((name, file));
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    #[cfg(feature = "hydrate")]
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Request("form data unavailable".to_owned()))?;
        for (name, value) in &self.fields {
            form.append_with_str(name, value)
                .map_err(|_| ApiError::Request(format!("could not add field {name}")))?;
        }
        for (name, file) in &self.files {
            form.append_with_blob_and_filename(name, file, &file.name())
                .map_err(|_| ApiError::Request(format!("could not attach {}", file.name())))?;
        }
        Ok(form)
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
mod transport {
    use futures::future::{Either, select};
    use gloo_net::http::{Request, RequestBuilder, Response};
    use gloo_timers::future::TimeoutFuture;
    use serde::de::DeserializeOwned;

    use super::{ApiError, REQUEST_TIMEOUT_MS, bearer_value, endpoint};
    use crate::state::auth::TOKEN_KEY;
    use crate::util::storage::{BrowserStorage, KeyValueStore};

    /// Builder for `path` with the stored bearer token attached, if any.
    pub(super) fn authorized(builder: fn(&str) -> RequestBuilder, path: &str) -> RequestBuilder {
        let request = builder(&endpoint(path));
        match BrowserStorage.get(TOKEN_KEY) {
            Some(token) if !token.is_empty() => request.header("Authorization", &bearer_value(&token)),
            _ => request,
        }
    }

    pub(super) async fn send(request: Request) -> Result<Response, ApiError> {
        let url = request.url();
        match select(Box::pin(request.send()), Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS))).await {
            Either::Left((Ok(resp), _)) => Ok(resp),
            Either::Left((Err(e), _)) => {
                leptos::logging::warn!("request failed: url={url} error={e}");
                Err(ApiError::Network)
            }
            Either::Right(_) => {
                leptos::logging::warn!("request timed out: url={url}");
                Err(ApiError::Network)
            }
        }
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let url = resp.url();
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            let err = ApiError::from_response(status, &body);
            leptos::logging::warn!("request rejected: url={url} status={status} message={err}");
            return Err(err);
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) fn request_error(e: gloo_net::Error) -> ApiError {
        ApiError::Request(e.to_string())
    }
}

// =============================================================================
// USERS
// =============================================================================

/// Register via `POST /user/register` (multipart: profile image + fields).
///
/// # Errors
///
/// Returns the server's rejection message, a network error, or a decode error.
pub async fn register(form: MultipartForm) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = form.to_form_data()?;
        let request = transport::authorized(gloo_net::http::Request::post, "/user/register")
            .body(body)
            .map_err(transport::request_error)?;
        transport::read_json(transport::send(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

/// Log in via `POST /user/login`.
///
/// # Errors
///
/// Returns the server's rejection message, a network error, or a decode error.
pub async fn login(credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::authorized(gloo_net::http::Request::post, "/user/login")
            .json(credentials)
            .map_err(transport::request_error)?;
        transport::read_json(transport::send(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUCTIONS
// =============================================================================

async fn fetch_items(path: &str) -> Result<Vec<AuctionItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::authorized(gloo_net::http::Request::get, path)
            .build()
            .map_err(transport::request_error)?;
        let body: ItemsResponse = transport::read_json(transport::send(request).await?).await?;
        Ok(body.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Every listing, from `GET /auctionitem/allItems`.
///
/// # Errors
///
/// Returns the server's rejection message, a network error, or a decode error.
pub async fn fetch_all_items() -> Result<Vec<AuctionItem>, ApiError> {
    fetch_items("/auctionitem/allItems").await
}

/// The signed-in seller's listings, from `GET /auctionitem/myitems`.
///
/// # Errors
///
/// Returns the server's rejection message, a network error, or a decode error.
pub async fn fetch_my_items() -> Result<Vec<AuctionItem>, ApiError> {
    fetch_items("/auctionitem/myitems").await
}

/// One listing with its bidding history, from `GET /auctionitem/auction/{id}`.
///
/// # Errors
///
/// Returns the server's rejection message, a network error, or a decode error.
pub async fn fetch_auction(id: &str) -> Result<AuctionDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::authorized(gloo_net::http::Request::get, &auction_detail_path(id))
            .build()
            .map_err(transport::request_error)?;
        transport::read_json(transport::send(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auction_detail_path(id);
        Err(ApiError::Unavailable)
    }
}

/// Create a listing via `POST /auctionitem/create` (multipart: images + fields).
///
/// # Errors
///
/// Returns the server's rejection message, a network error, or a decode error.
pub async fn create_auction(form: MultipartForm) -> Result<AuctionItem, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = form.to_form_data()?;
        let request = transport::authorized(gloo_net::http::Request::post, "/auctionitem/create")
            .body(body)
            .map_err(transport::request_error)?;
        let created: CreatedAuction = transport::read_json(transport::send(request).await?).await?;
        Ok(created.into_item())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// BIDS
// =============================================================================

/// Place a bid via `POST /bid/place/{id}`.
///
/// # Errors
///
/// Returns the server's rejection message, a network error, or a decode error.
pub async fn place_bid(auction_id: &str, amount: f64) -> Result<PlaceBidResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = transport::authorized(gloo_net::http::Request::post, &place_bid_path(auction_id))
            .json(&PlaceBidRequest { amount })
            .map_err(transport::request_error)?;
        transport::read_json(transport::send(request).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (place_bid_path(auction_id), amount);
        Err(ApiError::Unavailable)
    }
}
