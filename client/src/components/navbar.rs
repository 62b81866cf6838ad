//! Top navigation bar for signed-in pages.
//!
//! Seller links appear only for auctioneers. Logging out clears the cached
//! session and returns to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::toaster::notify;
use crate::state::auth::{AuthState, LOGIN_ROUTE};
use crate::state::toast::{ToastKind, ToastState};
use crate::util::storage::BrowserStorage;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let is_auctioneer = move || auth.with(AuthState::is_auctioneer);
    let user_name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let mut route = LOGIN_ROUTE;
        auth.update(|a| route = a.sign_out(&mut BrowserStorage));
        notify(toasts, ToastKind::Success, "Logged out");
        navigate(route, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <a class="navbar__logo" href="/">"EliteAuction"</a>
            <div class="navbar__links">
                <a class="navbar__link" href="/">"Home"</a>
                <Show when=is_auctioneer>
                    <a class="navbar__link" href="/my-auctions">"My Auctions"</a>
                    <a class="navbar__link navbar__link--cta" href="/create-auction">"Create Auction"</a>
                </Show>
            </div>
            <div class="navbar__user">
                <span class="navbar__name">{user_name}</span>
                <button class="navbar__logout" on:click=on_logout>"Log Out"</button>
            </div>
        </nav>
    }
}
