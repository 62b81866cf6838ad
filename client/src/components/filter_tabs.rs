//! Home page listing filter tabs.

use leptos::prelude::*;

use crate::state::listing::FilterTab;

#[component]
pub fn FilterTabs(active: RwSignal<FilterTab>) -> impl IntoView {
    view! {
        <div class="filter-tabs" role="tablist">
            {FilterTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="filter-tabs__tab"
                            class:filter-tabs__tab--active=move || active.get() == tab
                            role="tab"
                            aria-selected=move || (active.get() == tab).to_string()
                            on:click=move |_| active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
