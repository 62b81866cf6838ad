//! Live countdown text for an auction end time.
//!
//! DESIGN
//! ======
//! `use_now` owns one per-second ticker for the view that calls it. The loop
//! stops on cleanup, so unmounted cards and pages leave no timers behind.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

use crate::util::countdown::{ENDED_SHORT, countdown_label};

/// Current time, refreshed every second while the owning view is mounted.
pub fn use_now() -> RwSignal<DateTime<Utc>> {
    let now = RwSignal::new(Utc::now());

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_loop = Arc::clone(&alive);
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive_loop.load(Ordering::Relaxed) {
                    break;
                }
                now.set(Utc::now());
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    now
}

/// Countdown text driven by a `use_now` clock shared with sibling badges.
#[component]
pub fn Countdown(
    end: DateTime<Utc>,
    #[prop(into)] now: Signal<DateTime<Utc>>,
    #[prop(default = ENDED_SHORT)] ended_label: &'static str,
) -> impl IntoView {
    view! { <span class="countdown">{move || countdown_label(end, now.get(), ended_label)}</span> }
}
