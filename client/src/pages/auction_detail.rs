//! Auction detail page with live countdown, bid form and bid history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `/auction/:id`, fetches the listing with its bidders, and lets
//! bidders raise the price while the auction is live.
//!
//! DESIGN
//! ======
//! One page-level clock drives the countdown, the status badge and the
//! ended check that hides the bid form. A placed bid refetches the detail
//! so the price and history come from the server.

#[cfg(test)]
#[path = "auction_detail_test.rs"]
mod auction_detail_test;

use chrono::{DateTime, Local, Utc};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::countdown::{Countdown, use_now};
use crate::components::navbar::Navbar;
use crate::components::toaster::notify;
use crate::net::types::{AuctionDetail, AuctionItem, BidderEntry, PlaceBidResponse};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{RouteGuard, install_route_guard};
use crate::util::bid::{BidGate, format_currency, format_plain, minimum_bid, price_caption};
use crate::util::countdown::{AuctionStatus, ENDED_LONG, format_timestamp, has_ended, remaining, status};
use crate::util::validation::{CONDITIONS, category_label};

const BID_PLACED_MESSAGE: &str = "Bid placed successfully!";

/// Toast text after a bid is accepted.
fn bid_placed_message(response: &PlaceBidResponse) -> String {
    response
        .message
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(BID_PLACED_MESSAGE)
        .to_owned()
}

/// Time-left colour: gray once ended, red inside the last hour, else green.
fn time_left_class(status: AuctionStatus) -> &'static str {
    match status {
        AuctionStatus::Live => "time-left time-left--live",
        AuctionStatus::EndingSoon => "time-left time-left--urgent",
        AuctionStatus::Ended => "time-left time-left--ended",
    }
}

fn condition_label(value: &str) -> &str {
    CONDITIONS.iter().find(|(v, _)| *v == value).map_or(value, |(_, label)| *label)
}

/// Avatar fallback letter for a bidder without a profile image.
fn initial(name: &str) -> String {
    name.chars().next().map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// The "Minimum Next Bid" stat appears once the listing has any recorded bid.
fn shows_minimum_next_bid(item: &AuctionItem) -> bool {
    item.total_bids() > 0
}

fn local_timestamp(at: DateTime<Utc>) -> String {
    format_timestamp(&at.with_timezone(&Local))
}

#[component]
pub fn AuctionDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, RouteGuard::Authenticated, use_navigate());

    let params = use_params_map();
    let detail = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move { crate::net::api::fetch_auction(&id).await }
    });
    let now = use_now();
    let on_placed = Callback::new(move |()| detail.refetch());

    let content = move || match detail.get() {
        None => view! { <p class="listing__status">"Loading auction..."</p> }.into_any(),
        Some(Err(e)) => view! {
            <div class="listing__status listing__status--error">
                <p>{e.to_string()}</p>
                <a class="btn" href="/">"Back to auctions"</a>
            </div>
        }
        .into_any(),
        Some(Ok(detail)) => view! { <AuctionSummary detail=detail now=now on_placed=on_placed/> }.into_any(),
    };

    view! {
        <Navbar/>
        <main class="auction-detail">
            <a class="auction-detail__back" href="/">"← Back to auctions"</a>
            {content}
        </main>
    }
}

#[component]
fn AuctionSummary(
    detail: AuctionDetail,
    #[prop(into)] now: Signal<DateTime<Utc>>,
    on_placed: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let AuctionDetail { auction_item: item, bidders } = detail;

    let end = item.end_time;
    let badge = move || status(remaining(end, now.get()));
    let ended = Signal::derive(move || has_ended(end, now.get()));
    let can_bid = move || auth.with(AuthState::is_bidder) && !ended.get();
    let minimum = minimum_bid(item.current_bid, item.starting_bid);
    let price = format_currency(item.current_bid.filter(|bid| *bid > 0.0).unwrap_or(item.starting_bid));
    let caption = price_caption(item.current_bid);
    let total_bids = item.total_bids();
    let has_bids = shows_minimum_next_bid(&item);
    let image = item.image_url().map(str::to_owned);
    let category = category_label(&item.category).to_owned();
    let condition = condition_label(&item.condition).to_owned();
    let auction_id = item.id.clone();

    view! {
        <div class="auction-detail__layout">
            <div class="auction-detail__media">
                {match image {
                    Some(src) => view! { <img class="auction-detail__image" src=src alt=item.title.clone()/> }.into_any(),
                    None => view! { <span class="auction-detail__placeholder">"No image available"</span> }.into_any(),
                }}
            </div>
            <div class="auction-detail__summary">
                <div class="auction-detail__tags">
                    <span class=move || badge().badge_class()>{move || badge().label()}</span>
                    <span class="auction-detail__category">{category}</span>
                </div>
                <h1 class="auction-detail__title">{item.title.clone()}</h1>
                <div class="auction-detail__price">
                    <span>{caption}</span>
                    <strong>{price}</strong>
                </div>
                <div class="auction-detail__stats">
                    <div>
                        <span>"Time Left"</span>
                        <strong class=move || time_left_class(badge())>
                            <Countdown end=end now=now ended_label=ENDED_LONG/>
                        </strong>
                    </div>
                    <div>
                        <span>"Total Bids"</span>
                        <strong>{total_bids}</strong>
                    </div>
                    {has_bids
                        .then(|| {
                            view! {
                                <div>
                                    <span>"Minimum Next Bid"</span>
                                    <strong>{format_currency(minimum)}</strong>
                                </div>
                            }
                        })}
                </div>
                <Show when=can_bid>
                    <BidPanel auction_id=auction_id.clone() minimum=minimum ended=ended on_placed=on_placed/>
                </Show>
                <Show when=move || ended.get()>
                    <p class="auction-detail__closed">"This auction has ended. Bidding is closed."</p>
                </Show>
            </div>
        </div>
        <section class="auction-detail__section">
            <h2>"Description"</h2>
            <p>{item.description.clone()}</p>
        </section>
        <section class="auction-detail__section">
            <h2>"Item Details"</h2>
            <dl class="auction-detail__facts">
                <dt>"Condition"</dt>
                <dd>{condition}</dd>
                <dt>"Starting Bid"</dt>
                <dd>{format_currency(item.starting_bid)}</dd>
                <dt>"Start Time"</dt>
                <dd>{local_timestamp(item.start_time)}</dd>
                <dt>"End Time"</dt>
                <dd>{local_timestamp(item.end_time)}</dd>
            </dl>
        </section>
        <BidHistory bidders=bidders/>
    }
}

#[component]
fn BidPanel(auction_id: String, minimum: f64, ended: Signal<bool>, on_placed: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let amount = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let gate = move || BidGate { minimum, pending: pending.get(), ended: ended.get() };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(bid) = gate().accept(&amount.get()) else {
            notify(toasts, ToastKind::Error, format!("Bid must be at least {}", format_currency(minimum)));
            return;
        };
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let auction_id = auction_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::place_bid(&auction_id, bid).await {
                    Ok(response) => {
                        notify(toasts, ToastKind::Success, bid_placed_message(&response));
                        amount.set(String::new());
                        on_placed.run(());
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (bid, &auction_id, on_placed);
    };

    view! {
        <form class="bid-panel" on:submit=on_submit>
            <label class="bid-panel__label" for="bid-amount">"Your Bid"</label>
            <div class="bid-panel__row">
                <input
                    id="bid-amount"
                    class="form-input"
                    type="number"
                    step="0.01"
                    min=format_plain(minimum)
                    placeholder=format!("Min {}", format_currency(minimum))
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <button
                    class="primary-button"
                    type="submit"
                    disabled=move || gate().is_disabled(&amount.get())
                >
                    {move || if pending.get() { "Placing Bid..." } else { "Place Bid" }}
                </button>
            </div>
            <p class="bid-panel__hint">{format!("Minimum bid: {}", format_currency(minimum))}</p>
        </form>
    }
}

#[component]
fn BidHistory(bidders: Vec<BidderEntry>) -> impl IntoView {
    let count = bidders.len();
    let rows = bidders
        .into_iter()
        .map(|entry| {
            let name = entry.display_name().to_owned();
            let avatar = match entry.profile_image.filter(|url| !url.is_empty()) {
                Some(src) => view! { <img class="bid-history__avatar" src=src alt=name.clone()/> }.into_any(),
                None => view! { <span class="bid-history__avatar bid-history__avatar--initial">{initial(&name)}</span> }
                    .into_any(),
            };
            view! {
                <li class="bid-history__row">
                    {avatar}
                    <span class="bid-history__name">{name}</span>
                    <span class="bid-history__amount">{format_currency(entry.amount.unwrap_or_default())}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="auction-detail__section bid-history">
            <h2>{format!("Bidding History ({count})")}</h2>
            {if count == 0 {
                view! { <p class="bid-history__empty">"No bids yet. Be the first to bid!"</p> }.into_any()
            } else {
                view! { <ul class="bid-history__list">{rows}</ul> }.into_any()
            }}
        </section>
    }
}
