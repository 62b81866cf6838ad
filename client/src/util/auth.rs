//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page installs one guard so redirect behavior stays identical across
//! routes: protected pages bounce to `/login`, auth pages bounce home once a
//! session exists, and seller pages bounce home for non-auctioneers.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, HOME_ROUTE, LOGIN_ROUTE};

/// Access requirement of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteGuard {
    /// Any signed-in user.
    Authenticated,
    /// Only visitors without a session (login, register).
    Guest,
    /// Signed-in users with the Auctioneer role.
    Auctioneer,
}

/// Where to send the user for `guard`, or `None` to stay.
pub fn redirect_target(state: &AuthState, guard: RouteGuard) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    match guard {
        RouteGuard::Authenticated => (!state.is_authenticated()).then_some(LOGIN_ROUTE),
        RouteGuard::Guest => state.is_authenticated().then_some(HOME_ROUTE),
        RouteGuard::Auctioneer => {
            if !state.is_authenticated() {
                Some(LOGIN_ROUTE)
            } else if !state.is_auctioneer() {
                Some(HOME_ROUTE)
            } else {
                None
            }
        }
    }
}

/// Redirect whenever auth has loaded and `guard` is not satisfied.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, guard: RouteGuard, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(target) = redirect_target(&state, guard) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
