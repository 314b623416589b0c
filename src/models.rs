//! Frontend Models
//!
//! Static genre table and the user-owned filter inputs.

pub use tmdb_catalog::Movie;

/// A selectable genre (TMDB genre id + display name)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub id: u32,
    pub name: &'static str,
}

/// Genres offered by the filter dropdown
pub const GENRES: &[Genre] = &[
    Genre { id: 28, name: "Action" },
    Genre { id: 12, name: "Adventure" },
    Genre { id: 16, name: "Animation" },
    Genre { id: 35, name: "Comedy" },
    Genre { id: 80, name: "Crime" },
    Genre { id: 18, name: "Drama" },
    Genre { id: 14, name: "Fantasy" },
    Genre { id: 27, name: "Horror" },
    Genre { id: 10749, name: "Romance" },
    Genre { id: 878, name: "Science Fiction" },
];

pub fn genre_name(id: u32) -> Option<&'static str> {
    GENRES.iter().find(|g| g.id == id).map(|g| g.name)
}

/// Search text + selected genre
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub genre: Option<u32>,
}

impl FilterState {
    /// Parse the `<select>` value; the "All genres" option is the empty string
    pub fn parse_genre(value: &str) -> Option<u32> {
        value.trim().parse().ok()
    }
}
