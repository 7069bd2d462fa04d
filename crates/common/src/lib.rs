// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! used for communication between the `NeverPass` browser shell and server.
//! This module defines the WebSocket protocol messages and the view models
//! the shell renders.

use serde::{Deserialize, Serialize};

/// Identifier for one entry in the fixed password rule catalog.
///
/// The catalog never changes size or membership; these seven variants are
/// the entire universe of rules.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RuleId {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    SpecialChar,
    Funny,
    Emoji,
}

/// Which login form field an edit applies to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Name,
    Password,
}

/// Messages sent from the browser shell to the server
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "msgType")]
pub enum ClientToServer {
    /// Switch to the view registered for `path`
    /// # Fields
    /// * `path` - Client-side route, e.g. `/` or `/forgot-password`
    Navigate { path: String },
    /// An edit to one of the login form fields
    LoginInput { field: LoginField, value: String },
    /// The login form was submitted
    LoginSubmit,
    /// An edit to the recovery password field
    RecoveryInput { value: String },
    /// The recovery form was submitted
    RecoverySubmit,
}

/// Messages sent from the server to the browser shell
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "msgType")]
pub enum ServerToClient {
    /// Fresh render state for the login view
    Login { view: LoginView },
    /// Fresh render state for the recovery view
    Recovery { view: RecoveryView },
    /// A `Navigate` named a path with no registered view
    UnknownRoute { path: String },
    /// Error response for malformed messages
    MalformedMessage { err_msg: String },
    /// Generic error response
    Error { code: String, message: String },
}

/// Render state for the login view
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    /// True once a submission has been rejected; the shell shows the
    /// "Invalid Password" notice and the "Forgot Password?" action only
    /// while this is set.
    pub login_failed: bool,
}

/// One currently displayed password requirement
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RequirementItem {
    pub key: RuleId,
    pub text: String,
}

/// Render state for the recovery view
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecoveryView {
    /// The active requirement subset (5 of the 7 catalog rules)
    pub requirements: Vec<RequirementItem>,
    /// Descriptions of every catalog rule the current input satisfies.
    /// Evaluated against the full catalog, not just `requirements`.
    pub met: Vec<String>,
    /// Form background color, re-randomized on every keystroke
    pub bg_color: String,
    /// Heading flash animation flag
    pub flash: bool,
    /// Form shake animation flag
    pub shake: bool,
    /// Heading spin-and-bounce animation flag
    pub jump: bool,
    /// The dismissive failure notice, present once the form has been
    /// submitted at least once
    pub notice: Option<String>,
}
