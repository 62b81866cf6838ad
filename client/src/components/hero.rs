//! Home page banner.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">"Discover Rare Finds. Bid With Confidence."</h1>
            <p class="hero__subtitle">
                "Live auctions on art, collectibles, jewelry and more, from verified auctioneers."
            </p>
        </section>
    }
}
