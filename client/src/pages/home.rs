//! Home page: hero, filter tabs and the live listing grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Fetches every listing once per visit and
//! filters it in the browser as tabs change.

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auction_card::AuctionGrid;
use crate::components::filter_tabs::FilterTabs;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;
use crate::state::listing::{FilterTab, apply_filter};
use crate::util::auth::{RouteGuard, install_route_guard};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, RouteGuard::Authenticated, use_navigate());

    let tab = RwSignal::new(FilterTab::default());
    let items = LocalResource::new(crate::net::api::fetch_all_items);

    let listing = move || match items.get() {
        None => view! { <p class="listing__status">"Loading auctions..."</p> }.into_any(),
        Some(Err(e)) => view! {
            <div class="listing__status listing__status--error">
                <p>{e.to_string()}</p>
                <button class="btn" on:click=move |_| items.refetch()>"Retry"</button>
            </div>
        }
        .into_any(),
        Some(Ok(all)) => {
            let visible = apply_filter(&all, tab.get(), Utc::now());
            if visible.is_empty() {
                view! { <p class="listing__status">"No auctions match this filter."</p> }.into_any()
            } else {
                view! { <AuctionGrid items=visible/> }.into_any()
            }
        }
    };

    view! {
        <Navbar/>
        <main class="home-page">
            <Hero/>
            <section class="listing">
                <header class="listing__header">
                    <h2>"Live Auctions"</h2>
                    <FilterTabs active=tab/>
                </header>
                {listing}
            </section>
        </main>
    }
}
