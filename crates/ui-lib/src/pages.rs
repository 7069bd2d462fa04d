// ============================
// crates/ui-lib/src/pages.rs
// ============================
//! The static HTML shell.
//!
//! Both registered routes serve the same page; the shell reads
//! `location.pathname` and asks the server for the matching view over the
//! WebSocket. All rendering logic stays in the shell, all state on the
//! server.

use axum::response::Html;

static APP_SHELL: &str = include_str!("../assets/app.html");

/// Handler for the page shell
pub async fn app_page() -> Html<&'static str> {
    Html(APP_SHELL)
}
