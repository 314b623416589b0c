//! Catalog Client
//!
//! Two calls: the weekly trending list and the trailer lookup for one movie.
//! No retries, no timeouts; failures surface as `CatalogError`.

use serde::de::DeserializeOwned;

use crate::endpoints::{Endpoints, TimeWindow};
use crate::error::CatalogResult;
use crate::models::{Movie, ResultsPage, Video};
use crate::transport::{FetchTransport, Transport};

#[derive(Debug, Clone)]
pub struct CatalogClient<T = FetchTransport> {
    endpoints: Endpoints,
    transport: T,
}

impl CatalogClient<FetchTransport> {
    /// Client backed by the browser `fetch` API
    pub fn browser(endpoints: Endpoints) -> Self {
        Self::new(endpoints, FetchTransport)
    }
}

impl<T: Transport> CatalogClient<T> {
    pub fn new(endpoints: Endpoints, transport: T) -> Self {
        Self { endpoints, transport }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Trending movies for this week, in the order the API returns them
    pub async fn fetch_trending_movies(&self) -> CatalogResult<Vec<Movie>> {
        self.fetch_trending(TimeWindow::Week).await
    }

    pub async fn fetch_trending(&self, window: TimeWindow) -> CatalogResult<Vec<Movie>> {
        let movies: Vec<Movie> = self.get_results(&self.endpoints.trending_url(window)).await?;
        log::debug!("fetched {} trending movies ({})", movies.len(), window.as_str());
        Ok(movies)
    }

    /// Watch link for the first video of type `Trailer`, `None` when there is none
    pub async fn fetch_trailer_link(&self, movie_id: u32) -> CatalogResult<Option<String>> {
        let videos: Vec<Video> = self.get_results(&self.endpoints.videos_url(movie_id)).await?;
        Ok(select_trailer(&videos).map(|video| self.endpoints.watch_url(&video.key)))
    }

    async fn get_results<R: DeserializeOwned>(&self, url: &str) -> CatalogResult<Vec<R>> {
        let body = self.transport.get_text(url).await?;
        let page: ResultsPage<R> = serde_json::from_str(&body)?;
        Ok(page.results)
    }
}

/// First trailer in API order
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|video| video.is_trailer())
}
