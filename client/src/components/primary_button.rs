//! Submit button with a pending label.

use leptos::prelude::*;

#[component]
pub fn PrimaryButton(
    label: &'static str,
    pending_label: &'static str,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class="primary-button"
            class:primary-button--pending=move || pending.get()
            type="submit"
            disabled=move || pending.get() || disabled.get()
        >
            {move || if pending.get() { pending_label } else { label }}
        </button>
    }
}
