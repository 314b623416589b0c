//! Movie Grid Component

use leptos::prelude::*;

use crate::components::MovieCard;
use crate::models::Movie;

/// Responsive card grid over the visible movies
#[component]
pub fn MovieGrid(#[prop(into)] movies: Signal<Vec<Movie>>) -> impl IntoView {
    view! {
        <Show
            when=move || movies.with(|m| !m.is_empty())
            fallback=|| view! { <p class="empty-message">"No movies match your filters."</p> }
        >
            <div class="movie-grid">
                <For
                    each=move || movies.get()
                    key=|movie| movie.id
                    children=move |movie| view! { <MovieCard movie=movie /> }
                />
            </div>
        </Show>
    }
}
