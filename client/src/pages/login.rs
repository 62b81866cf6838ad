//! Login page with email + password.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guest-only route. A successful login caches the session through
//! `AuthState::sign_in` and opens the home page; failures surface the
//! server's message as an error toast.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, field_error};
use crate::components::primary_button::PrimaryButton;
use crate::components::toaster::notify;
#[cfg(feature = "hydrate")]
use crate::net::types::AuthResponse;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::{RouteGuard, install_route_guard};
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStorage;
use crate::util::validation::{FieldErrors, validate_login};

/// Cache a fresh session, greet the user and open the post-login route.
#[cfg(feature = "hydrate")]
pub(crate) fn finish_sign_in<F>(
    auth: RwSignal<AuthState>,
    toasts: RwSignal<ToastState>,
    navigate: &F,
    response: AuthResponse,
    greeting: &str,
) where
    F: Fn(&str, NavigateOptions),
{
    let mut route = crate::state::auth::HOME_ROUTE;
    auth.update(|a| route = a.sign_in(response, &mut BrowserStorage));
    notify(toasts, ToastKind::Success, greeting);
    navigate(route, NavigateOptions::default());
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_route_guard(auth, RouteGuard::Guest, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(response) => finish_sign_in(auth, toasts, &navigate, response, "Login successful"),
                    Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, toasts);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue bidding"</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <FormField label="Email" error=field_error(errors, "email")>
                        <input
                            class="form-input"
                            type="email"
                            placeholder="you@example.com"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                errors.update(|e| {
                                    e.remove("email");
                                });
                            }
                        />
                    </FormField>
                    <FormField label="Password" error=field_error(errors, "password")>
                        <span class="form-input-group">
                            <input
                                class="form-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="••••••••"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    password.set(event_target_value(&ev));
                                    errors.update(|e| {
                                        e.remove("password");
                                    });
                                }
                            />
                            <button
                                class="form-input-group__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </span>
                    </FormField>
                    <PrimaryButton label="Sign In" pending_label="Signing in..." pending=busy/>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/register">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
