//! Listing card shown in the home and my-auctions grids.
//!
//! DESIGN
//! ======
//! Each card runs its own countdown clock so the status badge and the time
//! left stay in step without a page-wide ticker.

use leptos::prelude::*;

use crate::components::countdown::{Countdown, use_now};
use crate::net::types::AuctionItem;
use crate::util::bid::{format_currency, price_caption};
use crate::util::countdown::{remaining, status};
use crate::util::validation::category_label;

#[component]
pub fn AuctionCard(item: AuctionItem) -> impl IntoView {
    let now = use_now();
    let href = format!("/auction/{}", item.id);
    let end = item.end_time;
    let badge = move || status(remaining(end, now.get()));
    let price = format_currency(item.current_bid.filter(|bid| *bid > 0.0).unwrap_or(item.starting_bid));
    let caption = price_caption(item.current_bid);
    let bids = item.total_bids();
    let bids_label = if bids == 1 { "1 bid".to_owned() } else { format!("{bids} bids") };
    let image = item.image_url().map(str::to_owned);
    let category = category_label(&item.category).to_owned();

    view! {
        <a class="auction-card" href=href>
            <span class="auction-card__media">
                {match image {
                    Some(src) => view! { <img class="auction-card__image" src=src alt=item.title.clone() loading="lazy"/> }.into_any(),
                    None => view! { <span class="auction-card__placeholder">"No image"</span> }.into_any(),
                }}
                <span class=move || badge().badge_class()>{move || badge().label()}</span>
            </span>
            <span class="auction-card__body">
                <span class="auction-card__category">{category}</span>
                <span class="auction-card__title">{item.title}</span>
                <span class="auction-card__price">
                    <span class="auction-card__caption">{caption}</span>
                    <strong>{price}</strong>
                </span>
                <span class="auction-card__meta">
                    <span>{bids_label}</span>
                    <span class="auction-card__ends">
                        "Ends in " <Countdown end=end now=now/>
                    </span>
                </span>
                <span class="auction-card__cta">"View Auction"</span>
            </span>
        </a>
    }
}

/// Responsive grid of listing cards.
#[component]
pub fn AuctionGrid(items: Vec<AuctionItem>) -> impl IntoView {
    view! {
        <div class="auction-grid">
            {items.into_iter().map(|item| view! { <AuctionCard item=item/> }).collect_view()}
        </div>
    }
}
