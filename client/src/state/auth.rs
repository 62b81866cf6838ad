//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues a bearer token and a user blob on login/register. Both
//! are cached in `localStorage` and mirrored here so route guards and
//! role-aware components can read them reactively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthResponse, User};
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Storage key for the bearer token string.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user.
pub const USER_KEY: &str = "user";

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";

/// Authentication state tracking the cached credentials.
///
/// `loading` is true until the browser has restored the session from
/// storage; guards must not redirect while it is set.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl AuthState {
    /// Restore the session from storage. A token without a readable user (or
    /// the reverse) is treated as logged out and cleared.
    pub fn restore(store: &mut impl KeyValueStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = load_json::<User>(store, USER_KEY);
        match (token, user) {
            (Some(token), Some(user)) => Self { user: Some(user), token: Some(token), loading: false },
            _ => {
                store.remove(TOKEN_KEY);
                store.remove(USER_KEY);
                Self { user: None, token: None, loading: false }
            }
        }
    }

    /// Persist a successful login/register and return the route to open.
    pub fn sign_in(&mut self, response: AuthResponse, store: &mut impl KeyValueStore) -> &'static str {
        store.set(TOKEN_KEY, &response.token);
        save_json(store, USER_KEY, &response.user);
        self.token = Some(response.token);
        self.user = Some(response.user);
        self.loading = false;
        HOME_ROUTE
    }

    /// Drop cached credentials and return the route to open.
    pub fn sign_out(&mut self, store: &mut impl KeyValueStore) -> &'static str {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.token = None;
        self.user = None;
        self.loading = false;
        LOGIN_ROUTE
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_auctioneer(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_auctioneer)
    }

    pub fn is_bidder(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_bidder)
    }
}
