//! Create-auction page for auctioneers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auctioneer-only route. Collects the listing fields and 1-10 images,
//! validates them in the browser, and posts a multipart form. On success the
//! seller lands on `/my-auctions`.
//!
//! DESIGN
//! ======
//! Picked `File` handles live in a hydrate-only local store in the same order
//! as the `ImageDraft` previews, so removing a thumbnail removes its file.
//! Preview object URLs are revoked on removal, after a successful create and
//! when the page unmounts.

#[cfg(test)]
#[path = "create_auction_test.rs"]
mod create_auction_test;

use chrono::{DateTime, Local, TimeZone};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::{FormField, field_error};
use crate::components::navbar::Navbar;
use crate::components::primary_button::PrimaryButton;
#[cfg(feature = "hydrate")]
use crate::components::toaster::notify;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::util::auth::{RouteGuard, install_route_guard};
use crate::util::validation::{
    AuctionForm, CATEGORIES, CONDITIONS, DATETIME_INPUT_FORMAT, FieldErrors, ImageDraft, MAX_IMAGES, validate_auction,
};

/// Multipart field name repeated once per image file.
pub const IMAGES_FIELD: &str = "images";
/// Route opened after a listing is created.
pub const AFTER_CREATE_ROUTE: &str = "/my-auctions";

/// Earliest value accepted by the `datetime-local` inputs.
fn datetime_input_min<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(DATETIME_INPUT_FORMAT).to_string()
}

fn images_caption(count: usize) -> String {
    format!("{count} / {MAX_IMAGES} images")
}

#[component]
pub fn CreateAuctionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_route_guard(auth, RouteGuard::Auctioneer, navigate.clone());

    let form = RwSignal::new(AuctionForm::default());
    let drafts = RwSignal::new(Vec::<ImageDraft>::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let files = StoredValue::new_local(Vec::<web_sys::File>::new());
    let min_time = datetime_input_min(&Local::now());
    let min_end_time = min_time.clone();

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        let _ = drafts.try_with_untracked(|d| crate::util::files::release_previews(d));
    });

    let edit = move |field: &'static str, apply: fn(&mut AuctionForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| apply(f, value));
            errors.update(|e| {
                e.remove(field);
            });
        }
    };

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let picked = crate::util::files::picked_files(&ev)
                .into_iter()
                .map(|file| {
                    let mime = file.type_();
                    (file, mime)
                })
                .collect();
            match crate::util::files::admit_images(drafts.with(Vec::len), picked) {
                Ok(admitted) => {
                    let previews: Vec<ImageDraft> = admitted.iter().map(crate::util::files::draft_for).collect();
                    files.update_value(|f| f.extend(admitted));
                    drafts.update(|d| d.extend(previews));
                    errors.update(|e| {
                        e.remove("images");
                    });
                }
                Err(message) => notify(toasts, ToastKind::Error, message),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let remove_image = move |index: usize| {
        let mut removed = None;
        drafts.update(|d| {
            if index < d.len() {
                removed = Some(d.remove(index));
            }
        });
        #[cfg(feature = "hydrate")]
        if let Some(draft) = removed {
            crate::util::files::release_previews(std::slice::from_ref(&draft));
            files.update_value(|f| {
                if index < f.len() {
                    f.remove(index);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = removed;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = form.get();
        if let Err(field_errors) = drafts.with(|d| validate_auction(&current, d)) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let mut multipart = crate::net::api::MultipartForm::new(current.multipart_fields());
            for file in files.get_value() {
                multipart.attach(IMAGES_FIELD, file);
            }
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_auction(multipart).await {
                    Ok(_) => {
                        drafts.update(|d| crate::util::files::release_previews(&std::mem::take(d)));
                        files.set_value(Vec::new());
                        notify(toasts, ToastKind::Success, "Auction created successfully!");
                        navigate(AFTER_CREATE_ROUTE, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, toasts);
    };

    let options = |choices: &'static [(&'static str, &'static str)]| {
        choices
            .iter()
            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
            .collect_view()
    };

    view! {
        <Navbar/>
        <main class="create-auction-page">
            <h1>"Create Auction"</h1>
            <p class="create-auction-page__subtitle">"List an item for bidders to compete on"</p>
            <form class="create-auction-form" on:submit=on_submit novalidate>
                <FormField label="Title" error=field_error(errors, "title")>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="e.g. 1954 Leica M3"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=edit("title", |f, v| f.title = v)
                    />
                </FormField>
                <div class="form-row">
                    <FormField label="Category" error=field_error(errors, "category")>
                        <select
                            class="form-input"
                            prop:value=move || form.with(|f| f.category.clone())
                            on:change=edit("category", |f, v| f.category = v)
                        >
                            <option value="">"Select a category"</option>
                            {options(CATEGORIES)}
                        </select>
                    </FormField>
                    <FormField label="Condition" error=field_error(errors, "condition")>
                        <select
                            class="form-input"
                            prop:value=move || form.with(|f| f.condition.clone())
                            on:change=edit("condition", |f, v| f.condition = v)
                        >
                            <option value="">"Select a condition"</option>
                            {options(CONDITIONS)}
                        </select>
                    </FormField>
                </div>
                <FormField label="Description" error=field_error(errors, "description")>
                    <textarea
                        class="form-input form-input--area"
                        rows="5"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=edit("description", |f, v| f.description = v)
                    ></textarea>
                </FormField>
                <FormField label="Starting Bid ($)" error=field_error(errors, "starting_bid")>
                    <input
                        class="form-input"
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || form.with(|f| f.starting_bid.clone())
                        on:input=edit("starting_bid", |f, v| f.starting_bid = v)
                    />
                </FormField>
                <div class="form-row">
                    <FormField label="Start Time" error=field_error(errors, "start_time")>
                        <input
                            class="form-input"
                            type="datetime-local"
                            min=min_time
                            prop:value=move || form.with(|f| f.start_time.clone())
                            on:input=edit("start_time", |f, v| f.start_time = v)
                        />
                    </FormField>
                    <FormField label="End Time" error=field_error(errors, "end_time")>
                        <input
                            class="form-input"
                            type="datetime-local"
                            min=move || {
                                let start = form.with(|f| f.start_time.clone());
                                if start.is_empty() { min_end_time.clone() } else { start }
                            }
                            prop:value=move || form.with(|f| f.end_time.clone())
                            on:input=edit("end_time", |f, v| f.end_time = v)
                        />
                    </FormField>
                </div>
                <FormField label="Images" error=field_error(errors, "images")>
                    <input class="form-input" type="file" accept="image/*" multiple on:change=on_pick/>
                    <span class="form-field__hint">{move || images_caption(drafts.with(Vec::len))}</span>
                </FormField>
                <div class="image-previews">
                    {move || {
                        drafts
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, draft)| {
                                view! {
                                    <figure class="image-previews__item">
                                        <img src=draft.preview_url alt=draft.name.clone()/>
                                        <figcaption>{draft.name}</figcaption>
                                        <button
                                            class="image-previews__remove"
                                            type="button"
                                            title="Remove image"
                                            aria-label="Remove image"
                                            on:click=move |_| remove_image(index)
                                        >
                                            "✕"
                                        </button>
                                    </figure>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <PrimaryButton label="Create Auction" pending_label="Creating..." pending=busy/>
            </form>
        </main>
    }
}
