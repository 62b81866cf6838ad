//! Labeled form control wrapper with an inline error line.

use leptos::prelude::*;

use crate::util::validation::FieldErrors;

/// Reactive error message for `field` in `errors`.
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<&'static str>> {
    Signal::derive(move || errors.with(|e| e.get(field).copied()))
}

#[component]
pub fn FormField(
    label: &'static str,
    #[prop(into)] error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="form-field" class:form-field--invalid=move || error.get().is_some()>
            <span class="form-field__label">{label}</span>
            {children()}
            <Show when=move || error.get().is_some()>
                <span class="form-field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}
