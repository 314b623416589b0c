//! Home Page Component
//!
//! Trending movies grid with search and genre filter. Owns the page store:
//! the fetched list, the filter inputs, and the derived visible list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use tmdb_catalog::CatalogClient;

use crate::components::{FailedPanel, GenreSelect, LoadingPanel, MovieGrid, SearchBar};
use crate::context::use_app_context;
use crate::store::{
    movie_total, page_phase, store_finish_load, visible_movies, HomeState, HomeStateStoreFields,
    HomeStore, LoadState, Phase,
};

/// Fetch the trending list and move the store out of `Loading`
fn load_trending(client: CatalogClient, store: HomeStore) {
    store.load().set(LoadState::Loading);
    spawn_local(async move {
        let result = client.fetch_trending_movies().await;
        match &result {
            Ok(movies) => log::info!("Loaded {} trending movies", movies.len()),
            Err(e) => log::error!("Failed to load trending movies: {}", e),
        }
        store_finish_load(&store, result);
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(HomeState::default());

    // Initial load, once on mount
    let client = ctx.client.clone();
    Effect::new(move |_| {
        load_trending(client.clone(), store);
    });

    let client = ctx.client.clone();
    let on_retry = Callback::new(move |_: ()| {
        log::info!("Retrying trending movies");
        load_trending(client.clone(), store);
    });

    let visible = visible_movies(store);
    let total = movie_total(store);
    let phase = page_phase(store);

    view! {
        <main class="container">
            <h1 class="page-title">"Trending Movies"</h1>

            <div class="filter-bar">
                <SearchBar
                    query=Signal::derive(move || store.query().get())
                    on_change={move |query: String| store.query().set(query)}
                />
                <GenreSelect
                    selected=Signal::derive(move || store.genre().get())
                    on_change={move |genre: Option<u32>| store.genre().set(genre)}
                />
            </div>

            {move || match phase.get() {
                Phase::Loading => view! { <LoadingPanel /> }.into_any(),
                Phase::Failed(message) => view! {
                    <FailedPanel message=message on_retry=on_retry />
                }.into_any(),
                Phase::Empty => view! {
                    <p class="empty-message">"No trending movies right now."</p>
                }.into_any(),
                Phase::Ready => view! {
                    <div class="movie-results">
                        <p class="movie-count">
                            {move || format!("{} of {} movies", visible.get().len(), total.get())}
                        </p>
                        <MovieGrid movies=visible />
                    </div>
                }.into_any(),
            }}
        </main>
    }
}
