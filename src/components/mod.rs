//! UI Components
//!
//! Reusable Leptos components.

mod genre_select;
mod home_page;
mod movie_card;
mod movie_grid;
mod search_bar;
mod status_panel;

pub use genre_select::GenreSelect;
pub use home_page::HomePage;
pub use movie_card::MovieCard;
pub use movie_grid::MovieGrid;
pub use search_bar::SearchBar;
pub use status_panel::{ConfigErrorPanel, FailedPanel, LoadingPanel, NotFound};
