//! Toast stack rendered once at the app root.
//!
//! DESIGN
//! ======
//! `notify` is the single entry point pages use to report outcomes. It
//! queues the toast and, in the browser, schedules its dismissal after
//! `TOAST_TTL_MS`.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Queue a toast on the shared stack.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|state| id = state.push(kind, message));
    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(crate::state::toast::TOAST_TTL_MS, move || {
        toasts.update(|state| state.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.kind)>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
