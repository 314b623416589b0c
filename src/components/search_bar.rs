//! Search Bar Component

use leptos::prelude::*;

/// Free-text title search
#[component]
pub fn SearchBar(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-input"
            placeholder="Search movies..."
            prop:value=move || query.get()
            on:input=move |ev| on_change.run(event_target_value(&ev))
        />
    }
}
