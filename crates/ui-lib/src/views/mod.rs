// ============================
// crates/ui-lib/src/views/mod.rs
// ============================
//! View state machines for the two screens and the path → screen mapping.

pub mod login;
pub mod recovery;

pub use login::{LoginEvent, LoginState};
pub use recovery::{Effect, RecoveryEvent, RecoveryState, Transition, DISMISSAL};

use neverpass_common::ServerToClient;
use rand::Rng;

/// The screen a session is currently showing. Navigating replaces the value
/// wholesale; the previous screen's state is dropped with it.
pub enum Screen {
    Login(LoginState),
    Recovery(RecoveryState),
}

impl Screen {
    /// Map a client-side route to a fresh screen. Only `/` and
    /// `/forgot-password` are registered; anything else has no view.
    pub fn for_path<R: Rng + ?Sized>(path: &str, rng: &mut R) -> Option<Screen> {
        match path {
            "/" => Some(Screen::Login(LoginState::default())),
            "/forgot-password" => Some(Screen::Recovery(RecoveryState::new(rng))),
            _ => None,
        }
    }

    /// Short name used in logs and wrong-screen errors
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login(_) => "login",
            Screen::Recovery(_) => "recovery",
        }
    }

    /// Render the current screen as an outbound message
    pub fn render(&self) -> ServerToClient {
        match self {
            Screen::Login(state) => ServerToClient::Login { view: state.view() },
            Screen::Recovery(state) => ServerToClient::Recovery { view: state.view() },
        }
    }
}
