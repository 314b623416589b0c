//! Home Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use tmdb_catalog::CatalogError;

use crate::models::{FilterState, Movie};

/// Phase of the trending list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Fetched, possibly empty
    Ready(Vec<Movie>),
    Failed(CatalogError),
}

impl LoadState {
    /// Repeated ids keep their first occurrence so grid keys stay unique
    pub fn from_result(result: Result<Vec<Movie>, CatalogError>) -> Self {
        match result {
            Ok(movies) => {
                let mut seen = HashSet::new();
                LoadState::Ready(movies.into_iter().filter(|m| seen.insert(m.id)).collect())
            }
            Err(err) => LoadState::Failed(err),
        }
    }

    /// Fetched movies; empty while loading or after a failure
    pub fn movies(&self) -> &[Movie] {
        match self {
            LoadState::Ready(movies) => movies,
            _ => &[],
        }
    }
}

/// Home page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct HomeState {
    pub load: LoadState,
    /// Search box text
    pub query: String,
    /// Selected genre id, `None` = all genres
    pub genre: Option<u32>,
}

/// Type alias for the store
pub type HomeStore = Store<HomeState>;

/// Coarse phase for choosing what the page renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Empty,
    Ready,
    Failed(String),
}

/// Settle a pending load. Results arriving when the store is no longer
/// `Loading` are dropped, so a `Ready` list is never replaced.
pub fn store_finish_load(store: &HomeStore, result: Result<Vec<Movie>, CatalogError>) -> bool {
    if store.load().with_untracked(|state| *state != LoadState::Loading) {
        return false;
    }
    store.load().set(LoadState::from_result(result));
    true
}

/// Visible movies, recomputed when the list, query or genre changes
pub fn visible_movies(store: HomeStore) -> Memo<Vec<Movie>> {
    Memo::new(move |_| {
        let filter = store_filter(&store);
        store.load().with(|state| crate::filter::apply(state.movies(), &filter))
    })
}

/// Number of fetched movies
pub fn movie_total(store: HomeStore) -> Memo<usize> {
    Memo::new(move |_| store.load().with(|state| state.movies().len()))
}

pub fn page_phase(store: HomeStore) -> Memo<Phase> {
    Memo::new(move |_| {
        store.load().with(|state| match state {
            LoadState::Loading => Phase::Loading,
            LoadState::Ready(movies) if movies.is_empty() => Phase::Empty,
            LoadState::Ready(_) => Phase::Ready,
            LoadState::Failed(err) => Phase::Failed(err.to_string()),
        })
    })
}

/// Snapshot of the filter inputs
pub fn store_filter(store: &HomeStore) -> FilterState {
    FilterState {
        query: store.query().get(),
        genre: store.genre().get(),
    }
}

/// Movie ids whose trailer lookup is in flight.
/// At most one lookup per movie resolves per burst of clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrailerRequests {
    in_flight: HashSet<u32>,
}

impl TrailerRequests {
    /// Claim the token for `movie_id`; `false` if a lookup is already running
    pub fn try_begin(&mut self, movie_id: u32) -> bool {
        self.in_flight.insert(movie_id)
    }

    pub fn finish(&mut self, movie_id: u32) {
        self.in_flight.remove(&movie_id);
    }

    pub fn is_pending(&self, movie_id: u32) -> bool {
        self.in_flight.contains(&movie_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn movie(id: u32) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            genre_ids: vec![],
            overview: None,
            poster_path: None,
        }
    }

    fn titled(id: u32, title: &str, genre_ids: &[u32]) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genre_ids: genre_ids.to_vec(),
            overview: None,
            poster_path: None,
        }
    }

    fn ids(movies: &[Movie]) -> Vec<u32> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_from_result_drops_repeated_ids() {
        let mut repeat = movie(1);
        repeat.title = "Later copy".to_string();
        let state = LoadState::from_result(Ok(vec![movie(1), movie(2), repeat, movie(3)]));
        assert_eq!(ids(state.movies()), vec![1, 2, 3]);
        assert_eq!(state.movies()[0].title, "Movie 1");
    }

    #[test]
    fn test_visible_movies_follow_list_and_filters() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(HomeState::default());
            let visible = visible_movies(store);
            let total = movie_total(store);
            assert!(visible.get().is_empty());

            store_finish_load(
                &store,
                Ok(vec![
                    titled(1, "Dune Part Two", &[878]),
                    titled(2, "Barbie", &[35]),
                    titled(3, "Dune", &[878, 12]),
                ]),
            );
            assert_eq!(ids(&visible.get()), vec![1, 2, 3]);
            assert_eq!(total.get(), 3);

            store.query().set("dune".to_string());
            assert_eq!(ids(&visible.get()), vec![1, 3]);

            store.genre().set(Some(12));
            assert_eq!(ids(&visible.get()), vec![3]);

            store.query().set(String::new());
            store.genre().set(Some(35));
            assert_eq!(ids(&visible.get()), vec![2]);

            store.genre().set(None);
            assert_eq!(ids(&visible.get()), vec![1, 2, 3]);
            assert_eq!(total.get(), 3);
        });
    }

    #[test]
    fn test_phase_settles_once() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(HomeState::default());
            let phase = page_phase(store);
            assert_eq!(phase.get(), Phase::Loading);

            assert!(store_finish_load(&store, Ok(vec![movie(1)])));
            assert_eq!(phase.get(), Phase::Ready);

            // a second completion does not replace the list
            assert!(!store_finish_load(&store, Err(CatalogError::NoWindow)));
            assert_eq!(phase.get(), Phase::Ready);
            assert_eq!(ids(store.load().get().movies()), vec![1]);
        });
    }

    #[test]
    fn test_phase_failed_and_empty() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(HomeState::default());
            let phase = page_phase(store);

            store_finish_load(&store, Err(CatalogError::Network("offline".to_string())));
            assert_eq!(phase.get(), Phase::Failed("network error: offline".to_string()));

            // retry goes back through Loading
            store.load().set(LoadState::Loading);
            assert_eq!(phase.get(), Phase::Loading);
            store_finish_load(&store, Ok(vec![]));
            assert_eq!(phase.get(), Phase::Empty);
        });
    }

    #[test]
    fn test_load_state_from_result() {
        assert_eq!(LoadState::from_result(Ok(vec![movie(1)])), LoadState::Ready(vec![movie(1)]));
        assert_eq!(LoadState::from_result(Ok(vec![])), LoadState::Ready(vec![]));
        let err = CatalogError::Network("offline".to_string());
        assert_eq!(LoadState::from_result(Err(err.clone())), LoadState::Failed(err));
    }

    #[test]
    fn test_failed_is_distinct_from_empty() {
        let failed = LoadState::Failed(CatalogError::NoWindow);
        let empty = LoadState::Ready(vec![]);
        assert!(failed.movies().is_empty());
        assert!(empty.movies().is_empty());
        assert_ne!(failed, empty);
        assert_eq!(LoadState::default(), LoadState::Loading);
    }

    #[test]
    fn test_trailer_requests_guard() {
        let mut requests = TrailerRequests::default();
        assert!(requests.try_begin(7));
        assert!(requests.is_pending(7));
        assert!(!requests.try_begin(7));
        // other movies are independent
        assert!(requests.try_begin(8));

        requests.finish(7);
        assert!(!requests.is_pending(7));
        assert!(requests.try_begin(7));
    }
}
