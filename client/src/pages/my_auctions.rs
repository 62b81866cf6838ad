//! Seller dashboard listing the signed-in auctioneer's own auctions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auction_card::AuctionGrid;
use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;
use crate::util::auth::{RouteGuard, install_route_guard};

#[component]
pub fn MyAuctionsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, RouteGuard::Auctioneer, use_navigate());

    let items = LocalResource::new(crate::net::api::fetch_my_items);

    let body = move || match items.get() {
        None => view! { <p class="listing__status">"Loading your auctions..."</p> }.into_any(),
        Some(Err(e)) => view! {
            <div class="listing__status listing__status--error">
                <h3>"Couldn't load your auctions"</h3>
                <p>{e.to_string()}</p>
                <button class="btn" on:click=move |_| items.refetch()>"Retry"</button>
            </div>
        }
        .into_any(),
        Some(Ok(mine)) if mine.is_empty() => view! {
            <div class="listing__empty">
                <h3>"No Auctions Yet"</h3>
                <p>"You haven't created any auctions. List your first item to start receiving bids."</p>
                <a class="btn btn--primary" href="/create-auction">"Create Auction"</a>
            </div>
        }
        .into_any(),
        Some(Ok(mine)) => view! { <AuctionGrid items=mine/> }.into_any(),
    };

    view! {
        <Navbar/>
        <main class="my-auctions-page">
            <header class="my-auctions-page__header">
                <h1>"My Auctions"</h1>
                <a class="btn btn--primary" href="/create-auction">"+ New Auction"</a>
            </header>
            {body}
        </main>
    }
}
