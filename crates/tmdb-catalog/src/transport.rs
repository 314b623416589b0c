//! HTTP Transport
//!
//! The browser is single-threaded, so futures here are `?Send`.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::endpoints::redact;
use crate::error::{CatalogError, CatalogResult};

/// Issues a GET and returns the body of a 2xx response as text
#[async_trait(?Send)]
pub trait Transport {
    async fn get_text(&self, url: &str) -> CatalogResult<String>;
}

/// `window.fetch` backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn get_text(&self, url: &str) -> CatalogResult<String> {
        let window = web_sys::window().ok_or(CatalogError::NoWindow)?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| CatalogError::Network(js_error_message(&e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| CatalogError::Network("fetch did not resolve to a Response".to_string()))?;

        if !response.ok() {
            return Err(CatalogError::Status {
                status: response.status(),
                path: redact(url).to_string(),
            });
        }

        let body = response
            .text()
            .map_err(|e| CatalogError::Decode(js_error_message(&e)))?;
        let body = JsFuture::from(body)
            .await
            .map_err(|e| CatalogError::Network(js_error_message(&e)))?;
        body.as_string()
            .ok_or_else(|| CatalogError::Decode("response body is not text".to_string()))
    }
}

fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    }
}
