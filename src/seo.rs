//! Page Metadata
//!
//! Title, description, Open Graph tags and JSON-LD for the trending page.

use serde_json::{json, Value};
use web_sys::{Document, Element};

pub const PAGE_TITLE: &str = "Trending Movies | Latest Movie Releases";

/// `(attribute, name, content)` for each `<meta>` tag we own
pub const PAGE_META: &[(&str, &str, &str)] = &[
    (
        "name",
        "description",
        "Explore trending movies, movie trailers, and the latest releases in Hollywood, Bollywood, and more!",
    ),
    (
        "name",
        "keywords",
        "Trending movies, Latest movies, Movie trailers, Top movies, Movie recommendations",
    ),
    ("property", "og:title", "Trending Movies - Latest Movie Releases"),
    (
        "property",
        "og:description",
        "Find the latest and trending movies, watch trailers, and explore movie details.",
    ),
    ("property", "og:image", "https://image.tmdb.org/t/p/w500/example.jpg"),
];

const STRUCTURED_DATA_SELECTOR: &str = "script[type=\"application/ld+json\"]";

/// schema.org description of the page
pub fn structured_data() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Movie",
        "name": "Trending Movies",
        "image": "https://image.tmdb.org/t/p/w500/example.jpg",
        "description": "Explore the latest trending movies and trailers.",
        "datePublished": "2025-04-01",
        "genre": "Action, Drama, Comedy",
        "director": "Famous Director Name"
    })
}

/// Set the document title and upsert the meta tags
pub fn apply_page_meta() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(PAGE_TITLE);
    for (attr, name, content) in PAGE_META {
        if let Err(e) = upsert_meta(&document, attr, name, content) {
            log::warn!("Failed to set meta {}: {:?}", name, e);
        }
    }
    if let Err(e) = upsert_structured_data(&document, &structured_data()) {
        log::warn!("Failed to set structured data: {:?}", e);
    }
}

fn upsert_structured_data(document: &Document, data: &Value) -> Result<(), wasm_bindgen::JsValue> {
    let script = match document.query_selector(STRUCTURED_DATA_SELECTOR)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("script")?;
            created.set_attribute("type", "application/ld+json")?;
            append_to_head(document, &created)?;
            created
        }
    };
    script.set_text_content(Some(&data.to_string()));
    Ok(())
}

fn append_to_head(document: &Document, element: &Element) -> Result<(), wasm_bindgen::JsValue> {
    if let Some(head) = document.head() {
        head.append_child(element)?;
    }
    Ok(())
}

fn upsert_meta(
    document: &Document,
    attr: &str,
    name: &str,
    content: &str,
) -> Result<(), wasm_bindgen::JsValue> {
    let selector = format!("meta[{}=\"{}\"]", attr, name);
    let element = match document.query_selector(&selector)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element("meta")?;
            created.set_attribute(attr, name)?;
            append_to_head(document, &created)?;
            created
        }
    };
    element.set_attribute("content", content)
}
