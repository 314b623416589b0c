//! Movie Card Component
//!
//! Poster, title and truncated synopsis. Clicking plays the trailer.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::display::{card_overview, poster_src};
use crate::models::{genre_name, Movie};

#[component]
pub fn MovieCard(movie: Movie) -> impl IntoView {
    let ctx = use_app_context();
    let id = movie.id;

    let poster = poster_src(ctx.endpoints(), movie.poster_path.as_deref());
    let overview = card_overview(movie.overview.as_deref());
    let genres = movie
        .genre_ids
        .iter()
        .filter_map(|id| genre_name(*id))
        .collect::<Vec<_>>()
        .join(" · ");
    let title = movie.title;
    let alt = title.clone();

    let pending = {
        let ctx = ctx.clone();
        move || ctx.is_trailer_pending(id)
    };

    view! {
        <div
            class=move || if pending() { "movie-card pending" } else { "movie-card" }
            on:click=move |_| ctx.play_trailer(id)
        >
            <img class="movie-poster" src=poster alt=alt />
            <div class="movie-card-content">
                <h3 class="movie-title">{title}</h3>
                <p class="movie-genres">{genres}</p>
                <p class="movie-overview">{overview}</p>
            </div>
        </div>
    }
}
