//! Filter Utilities
//!
//! Derives the visible movie list from the fetched list and the filter inputs.

use crate::models::{FilterState, Movie};

/// Movies whose title contains `query` (case-insensitive) and, when a genre
/// is selected, that carry that genre id. Keeps the fetched order.
pub fn compute_visible(movies: &[Movie], query: &str, genre: Option<u32>) -> Vec<Movie> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|movie| matches(movie, &needle, genre))
        .cloned()
        .collect()
}

/// `compute_visible` over a `FilterState`
pub fn apply(movies: &[Movie], filter: &FilterState) -> Vec<Movie> {
    compute_visible(movies, &filter.query, filter.genre)
}

fn matches(movie: &Movie, needle: &str, genre: Option<u32>) -> bool {
    let title_ok = needle.is_empty() || movie.title.to_lowercase().contains(needle);
    let genre_ok = genre.map_or(true, |id| movie.genre_ids.contains(&id));
    title_ok && genre_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn make_movie(id: u32, title: &str, genre_ids: &[u32]) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genre_ids: genre_ids.to_vec(),
            overview: None,
            poster_path: None,
        }
    }

    fn sample() -> Vec<Movie> {
        vec![
            make_movie(1, "Dune Part Two", &[878]),
            make_movie(2, "Barbie", &[35]),
        ]
    }

    fn ids(movies: &[Movie]) -> Vec<u32> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        assert_eq!(ids(&compute_visible(&sample(), "dune", None)), vec![1]);
        assert_eq!(ids(&compute_visible(&sample(), "BARB", None)), vec![2]);
    }

    #[test]
    fn test_genre_only() {
        assert_eq!(ids(&compute_visible(&sample(), "", Some(35))), vec![2]);
    }

    #[test]
    fn test_query_and_genre_both_required() {
        assert!(compute_visible(&sample(), "dune", Some(35)).is_empty());
        assert_eq!(ids(&compute_visible(&sample(), "dune", Some(878))), vec![1]);
    }

    #[test]
    fn test_empty_inputs_keep_everything_in_order() {
        let movies = vec![
            make_movie(3, "Zeta", &[]),
            make_movie(1, "Alpha", &[18]),
            make_movie(2, "Mid", &[28, 12]),
        ];
        assert_eq!(ids(&compute_visible(&movies, "", None)), vec![3, 1, 2]);
    }

    #[test]
    fn test_missing_title_only_matches_empty_query() {
        let movies = vec![make_movie(1, "", &[28])];
        assert_eq!(compute_visible(&movies, "", None).len(), 1);
        assert!(compute_visible(&movies, "a", None).is_empty());
    }

    #[test]
    fn test_apply_uses_filter_state() {
        let filter = FilterState { query: "bar".to_string(), genre: Some(35) };
        assert_eq!(ids(&apply(&sample(), &filter)), vec![2]);
    }

    fn arb_movies() -> impl Strategy<Value = Vec<Movie>> {
        prop::collection::vec(
            ("[a-zA-Z ]{0,12}", prop::collection::vec(prop::sample::select(vec![12u32, 18, 28, 35, 878]), 0..4)),
            0..20,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, genres))| make_movie(i as u32, &title, &genres))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_query_result_is_matching_subset(movies in arb_movies(), query in "[a-zA-Z]{0,3}") {
            let visible = compute_visible(&movies, &query, None);
            let needle = query.to_lowercase();
            for movie in &visible {
                prop_assert!(movies.contains(movie));
                prop_assert!(movie.title.to_lowercase().contains(&needle));
            }
        }

        #[test]
        fn prop_genre_result_carries_genre(movies in arb_movies(), genre in prop::sample::select(vec![12u32, 18, 28, 35, 878])) {
            for movie in compute_visible(&movies, "", Some(genre)) {
                prop_assert!(movie.genre_ids.contains(&genre));
            }
        }

        #[test]
        fn prop_idempotent_and_order_preserving(movies in arb_movies(), query in "[a-z]{0,2}") {
            let first = compute_visible(&movies, &query, None);
            let second = compute_visible(&movies, &query, None);
            prop_assert_eq!(&first, &second);

            let positions: Vec<usize> = first
                .iter()
                .map(|m| movies.iter().position(|o| o.id == m.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
