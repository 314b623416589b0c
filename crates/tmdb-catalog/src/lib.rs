//! TMDB Catalog Client
//!
//! Fetches trending movies and resolves trailer links from The Movie Database.
//! The HTTP layer sits behind the [`Transport`] trait so the client can run
//! in the browser (`FetchTransport`) or against a scripted transport in tests.

mod client;
mod endpoints;
mod error;
mod models;
mod transport;

pub use client::{select_trailer, CatalogClient};
pub use endpoints::{Endpoints, TimeWindow, DEFAULT_API_BASE, DEFAULT_IMAGE_BASE, DEFAULT_WATCH_BASE};
pub use error::{CatalogError, CatalogResult};
pub use models::{Movie, ResultsPage, Video};
pub use transport::{FetchTransport, Transport};
