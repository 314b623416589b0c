//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use tmdb_catalog::{CatalogClient, Endpoints};

use crate::store::TrailerRequests;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Catalog client built from the runtime config
    pub client: CatalogClient,
    /// Movies with a trailer lookup in flight
    pub trailer_requests: RwSignal<TrailerRequests>,
}

impl AppContext {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            trailer_requests: RwSignal::new(TrailerRequests::default()),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        self.client.endpoints()
    }

    pub fn is_trailer_pending(&self, movie_id: u32) -> bool {
        self.trailer_requests.with(|r| r.is_pending(movie_id))
    }

    /// Look up and open the trailer for a movie
    pub fn play_trailer(&self, movie_id: u32) {
        crate::trailer::play_trailer(self.client.clone(), self.trailer_requests, movie_id);
    }
}

/// Get the app context, provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
