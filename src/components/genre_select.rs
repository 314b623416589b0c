//! Genre Select Component
//!
//! Dropdown over the static genre table. The empty value means "All genres".

use leptos::prelude::*;

use crate::models::{FilterState, GENRES};

#[component]
pub fn GenreSelect(
    #[prop(into)] selected: Signal<Option<u32>>,
    #[prop(into)] on_change: Callback<Option<u32>>,
) -> impl IntoView {
    view! {
        <select
            class="genre-select"
            on:change=move |ev| on_change.run(FilterState::parse_genre(&event_target_value(&ev)))
        >
            <option value="" prop:selected=move || selected.get().is_none()>"All genres"</option>
            {GENRES.iter().map(|genre| {
                let id = genre.id;
                view! {
                    <option value=id.to_string() prop:selected=move || selected.get() == Some(id)>
                        {genre.name}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
