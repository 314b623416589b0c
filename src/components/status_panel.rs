//! Status Panels
//!
//! What the page shows instead of the grid while loading or after a failure.

use leptos::prelude::*;

#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="status-panel loading">
            <span class="spinner"></span>
            <p>"Loading trending movies..."</p>
        </div>
    }
}

/// Initial fetch failed; offers a manual retry
#[component]
pub fn FailedPanel(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="status-panel failed">
            <p>"Failed to load trending movies: " {message}</p>
            <button class="retry-btn" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}

/// Startup configuration is missing or invalid
#[component]
pub fn ConfigErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <main class="container">
            <div class="status-panel failed">
                <h2>"Configuration error"</h2>
                <p>{message}</p>
            </div>
        </main>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="container">
            <div class="status-panel">
                <h2>"Page not found"</h2>
                <a href="/">"Back to trending movies"</a>
            </div>
        </main>
    }
}
