//! Endpoint Builders
//!
//! All URLs the client talks to or hands back to the UI.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";
pub const DEFAULT_WATCH_BASE: &str = "https://www.youtube.com/watch?v=";

/// Unreserved characters (RFC 3986) pass through, everything else is escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Trending time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

/// Base URLs plus the access key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: String,
    api_key: String,
    image_base: String,
    watch_base: String,
}

impl Endpoints {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: api_key.into(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            watch_base: DEFAULT_WATCH_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_watch_base(mut self, base: impl Into<String>) -> Self {
        self.watch_base = base.into();
        self
    }

    /// `GET {base}/trending/movie/{window}?api_key={key}`
    pub fn trending_url(&self, window: TimeWindow) -> String {
        self.api_url(&format!("/trending/movie/{}", window.as_str()))
    }

    /// `GET {base}/movie/{id}/videos?api_key={key}`
    pub fn videos_url(&self, movie_id: u32) -> String {
        self.api_url(&format!("/movie/{}/videos", movie_id))
    }

    /// Full poster URL, or `None` when the record has no usable fragment
    pub fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        match poster_path {
            Some(path) if !path.trim().is_empty() => Some(format!("{}{}", self.image_base, path)),
            _ => None,
        }
    }

    /// Link that plays a video key in a new browsing context
    pub fn watch_url(&self, video_key: &str) -> String {
        format!(
            "{}{}",
            self.watch_base,
            utf8_percent_encode(video_key, QUERY_VALUE)
        )
    }

    fn api_url(&self, path: &str) -> String {
        format!(
            "{}{}?api_key={}",
            self.api_base,
            path,
            utf8_percent_encode(&self.api_key, QUERY_VALUE)
        )
    }
}

/// Strip the query string (and the key with it) from a URL before logging
pub(crate) fn redact(url: &str) -> &str {
    url.split_once('?').map(|(path, _)| path).unwrap_or(url)
}
