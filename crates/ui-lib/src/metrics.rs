// ==============
// crates/ui-lib/src/metrics.rs

//! Central place for metric keys
pub const WS_CONNECTION: &str = "ws.connection";
pub const WS_DISCONNECTION: &str = "ws.disconnection";
pub const WS_ACTIVE: &str = "ws.active";
pub const NAVIGATE: &str = "view.navigate";
pub const LOGIN_REJECTED: &str = "login.rejected";
pub const RESET_DISMISSED: &str = "recovery.dismissed";
