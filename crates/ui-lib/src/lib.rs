// ============================
// crates/ui-lib/src/lib.rs
// ============================
//! Server logic for `NeverPass`, a two-screen parody of login and
//! password-recovery UIs. The browser is a dumb rendering shell; every view's
//! state lives here, per connection, and is driven one event at a time.

pub mod config;
pub mod error;
pub mod flags;
pub mod metrics;
pub mod pages;
pub mod rules;
pub mod session;
pub mod validation;
pub mod views;
pub mod ws_router;

use crate::config::Settings;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Settings manager
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}
