//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::{
    auction_detail::AuctionDetailPage, create_auction::CreateAuctionPage, home::HomePage, login::LoginPage,
    my_auctions::MyAuctionsPage, register::RegisterPage,
};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    // Effects only run in the browser, so SSR keeps `loading` set and never
    // redirects.
    Effect::new(move || auth.set(AuthState::restore(&mut BrowserStorage)));

    view! {
        <Stylesheet id="leptos" href="/pkg/elite-auction.css"/>
        <Title text="EliteAuction"/>

        <Router>
            <Toaster/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auction"), ParamSegment("id")) view=AuctionDetailPage/>
                <Route path=StaticSegment("create-auction") view=CreateAuctionPage/>
                <Route path=StaticSegment("my-auctions") view=MyAuctionsPage/>
            </Routes>
        </Router>
    }
}
