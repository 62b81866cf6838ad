//! Account registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guest-only route. Submits a multipart form (text fields plus an optional
//! `profileImage`) and signs the new user in on success. Payout details are
//! collected only when the Auctioneer role is selected.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, field_error};
use crate::components::primary_button::PrimaryButton;
#[cfg(feature = "hydrate")]
use crate::components::toaster::notify;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::util::auth::{RouteGuard, install_route_guard};
use crate::util::validation::{FieldErrors, RegisterForm, validate_register};

/// Multipart field name for the avatar file.
pub const PROFILE_IMAGE_FIELD: &str = "profileImage";

fn set_optional(slot: &mut Option<String>, value: String) {
    *slot = if value.trim().is_empty() { None } else { Some(value) };
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_route_guard(auth, RouteGuard::Guest, navigate.clone());

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let avatar_name = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    let avatar = StoredValue::new_local(None::<web_sys::File>);

    let edit = move |field: &'static str, apply: fn(&mut RegisterForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| apply(f, value));
            errors.update(|e| {
                e.remove(field);
            });
        }
    };

    let on_avatar = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = crate::util::files::picked_files(&ev)
                .into_iter()
                .find(|file| file.type_().starts_with("image/"));
            avatar_name.set(file.as_ref().map(web_sys::File::name));
            avatar.set_value(file);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = form.get();
        if let Err(field_errors) = validate_register(&current) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let mut multipart = crate::net::api::MultipartForm::new(current.multipart_fields());
            if let Some(file) = avatar.get_value() {
                multipart.attach(PROFILE_IMAGE_FIELD, file);
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(multipart).await {
                    Ok(response) => {
                        super::login::finish_sign_in(auth, toasts, &navigate, response, "Registration successful");
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, toasts);
    };

    let is_auctioneer = move || form.with(|f| f.role == Role::Auctioneer);
    let role_button = move |role: Role, label: &'static str| {
        view! {
            <button
                class="role-toggle__option"
                class:role-toggle__option--active=move || form.with(|f| f.role == role)
                type="button"
                on:click=move |_| form.update(|f| f.role = role)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join the marketplace as a bidder or an auctioneer"</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class="role-toggle">
                        {role_button(Role::Bidder, "Bidder")}
                        {role_button(Role::Auctioneer, "Auctioneer")}
                    </div>
                    <FormField label="Full Name" error=field_error(errors, "name")>
                        <input
                            class="form-input"
                            type="text"
                            autocomplete="name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=edit("name", |f, v| f.name = v)
                        />
                    </FormField>
                    <FormField label="Email" error=field_error(errors, "email")>
                        <input
                            class="form-input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=edit("email", |f, v| f.email = v)
                        />
                    </FormField>
                    <FormField label="Phone" error=field_error(errors, "phone")>
                        <input
                            class="form-input"
                            type="tel"
                            autocomplete="tel"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=edit("phone", |f, v| f.phone = v)
                        />
                    </FormField>
                    <FormField label="Password" error=field_error(errors, "password")>
                        <input
                            class="form-input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=edit("password", |f, v| f.password = v)
                        />
                    </FormField>
                    <FormField label="Confirm Password" error=field_error(errors, "confirm_password")>
                        <input
                            class="form-input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=edit("confirm_password", |f, v| f.confirm_password = v)
                        />
                    </FormField>
                    <FormField label="Profile Image (optional)" error=Signal::stored(None)>
                        <input class="form-input" type="file" accept="image/*" on:change=on_avatar/>
                        <Show when=move || avatar_name.get().is_some()>
                            <span class="form-field__hint">{move || avatar_name.get().unwrap_or_default()}</span>
                        </Show>
                    </FormField>
                    <Show when=is_auctioneer>
                        <fieldset class="payout-details">
                            <legend>"Payout Details"</legend>
                            <FormField label="Bank Account Name" error=Signal::stored(None)>
                                <input
                                    class="form-input"
                                    type="text"
                                    on:input=edit("bank_account_name", |f, v| set_optional(&mut f.payout.bank_account_name, v))
                                />
                            </FormField>
                            <FormField label="Bank Account Number" error=Signal::stored(None)>
                                <input
                                    class="form-input"
                                    type="text"
                                    on:input=edit("bank_account_number", |f, v| set_optional(&mut f.payout.bank_account_number, v))
                                />
                            </FormField>
                            <FormField label="Bank Name" error=Signal::stored(None)>
                                <input
                                    class="form-input"
                                    type="text"
                                    on:input=edit("bank_name", |f, v| set_optional(&mut f.payout.bank_name, v))
                                />
                            </FormField>
                            <FormField label="PayPal Email" error=field_error(errors, "paypal_email")>
                                <input
                                    class="form-input"
                                    type="email"
                                    on:input=edit("paypal_email", |f, v| set_optional(&mut f.payout.paypal_email, v))
                                />
                            </FormField>
                        </fieldset>
                    </Show>
                    <label class="form-check" class:form-check--invalid=move || errors.with(|e| e.contains_key("agree_to_terms"))>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.agree_to_terms)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.agree_to_terms = checked);
                                errors.update(|e| {
                                    e.remove("agree_to_terms");
                                });
                            }
                        />
                        <span>"I agree to the terms and conditions"</span>
                    </label>
                    <Show when=move || errors.with(|e| e.contains_key("agree_to_terms"))>
                        <span class="form-field__error">"You must agree to the terms and conditions."</span>
                    </Show>
                    <PrimaryButton label="Create Account" pending_label="Creating account..." pending=busy/>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
