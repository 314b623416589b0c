//! Catalog Models
//!
//! Records as returned by the TMDB v3 API. Fields the API omits decode as
//! empty/`None` instead of failing the whole response.

use serde::{Deserialize, Serialize};

/// A movie record from the trending list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    /// Genre ids, see the static genre table in the UI
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub overview: Option<String>,
    /// Path fragment appended to the image host, e.g. `/abc.jpg`
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// A video attached to a movie (trailer, teaser, clip...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
}

impl Video {
    pub fn is_trailer(&self) -> bool {
        self.kind == "Trailer"
    }
}

/// Envelope shared by the list endpoints: `{ "results": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsPage<T> {
    pub results: Vec<T>,
}
