//! Trailer Playback
//!
//! Card activation: look up the trailer, then open it in a new tab or tell the
//! user there is none. Lookup failures are logged and otherwise swallowed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tmdb_catalog::{CatalogClient, CatalogResult};

use crate::store::TrailerRequests;

pub const TRAILER_UNAVAILABLE: &str = "Trailer not available";

/// What the page does once a lookup resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerAction {
    Open(String),
    NotifyUnavailable,
    /// Lookup failed; already logged
    Nothing,
}

impl TrailerAction {
    pub fn from_lookup(movie_id: u32, result: CatalogResult<Option<String>>) -> Self {
        match result {
            Ok(Some(url)) => TrailerAction::Open(url),
            Ok(None) => TrailerAction::NotifyUnavailable,
            Err(err) => {
                log::error!("Error fetching trailer for movie {}: {}", movie_id, err);
                TrailerAction::Nothing
            }
        }
    }

    /// Text shown to the user, if this action needs one
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            TrailerAction::NotifyUnavailable => Some(TRAILER_UNAVAILABLE),
            _ => None,
        }
    }
}

/// Start a trailer lookup for `movie_id` unless one is already in flight
pub fn play_trailer(client: CatalogClient, requests: RwSignal<TrailerRequests>, movie_id: u32) {
    let claimed = requests
        .try_update(|r| r.try_begin(movie_id))
        .unwrap_or(false);
    if !claimed {
        log::debug!("Trailer lookup for movie {} already in flight", movie_id);
        return;
    }

    spawn_local(async move {
        let result = client.fetch_trailer_link(movie_id).await;
        requests.update(|r| r.finish(movie_id));
        perform(TrailerAction::from_lookup(movie_id, result));
    });
}

fn perform(action: TrailerAction) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window to act on trailer lookup: {:?}", action);
        return;
    };
    match action {
        TrailerAction::Open(url) => {
            log::info!("Opening trailer {}", url);
            if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                log::error!("Failed to open trailer window: {:?}", e);
            }
        }
        TrailerAction::NotifyUnavailable | TrailerAction::Nothing => {
            if let Some(notice) = action.notice() {
                if let Err(e) = window.alert_with_message(notice) {
                    log::error!("Failed to show trailer notice: {:?}", e);
                }
            }
        }
    }
}
