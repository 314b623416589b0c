//! Routing
//!
//! One page lives at `/`; everything else is "not found".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/index.html" => Route::Home,
            _ => Route::NotFound,
        }
    }

    /// Route for the page the browser is currently on
    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        Self::from_path(&path)
    }
}
