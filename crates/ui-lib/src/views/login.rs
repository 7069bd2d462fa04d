// ============================
// crates/ui-lib/src/views/login.rs
// ============================
//! Login view state machine.
//!
//! There is no credential store and no check: submission unconditionally
//! flips the view into its failed state, which is what unlocks the
//! "Forgot Password?" action in the shell.

use neverpass_common::{LoginField, LoginView};

/// In-memory state of the login form
#[derive(Debug, Clone)]
pub struct LoginState {
    name: String,
    password: String,
    logged_in: bool,
}

/// Events the login view reacts to
#[derive(Debug, Clone)]
pub enum LoginEvent {
    FieldChanged(LoginField, String),
    Submit,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            name: String::new(),
            password: String::new(),
            logged_in: true,
        }
    }
}

impl LoginState {
    /// Apply one event to the form state
    pub fn apply(&mut self, event: LoginEvent) {
        match event {
            LoginEvent::FieldChanged(LoginField::Name, value) => self.name = value,
            LoginEvent::FieldChanged(LoginField::Password, value) => self.password = value,
            LoginEvent::Submit => self.logged_in = false,
        }
    }

    /// Render state for the shell
    pub fn view(&self) -> LoginView {
        LoginView {
            login_failed: !self.logged_in,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_always_fails() {
        let mut state = LoginState::default();
        assert!(!state.view().login_failed);

        state.apply(LoginEvent::FieldChanged(
            LoginField::Name,
            "alice".to_string(),
        ));
        state.apply(LoginEvent::FieldChanged(
            LoginField::Password,
            "correct horse battery staple".to_string(),
        ));
        state.apply(LoginEvent::Submit);

        assert!(state.view().login_failed);
        // The fields are kept in memory for the lifetime of the view, even
        // though nothing ever checks them against anything
        assert_eq!(state.name(), "alice");
        assert_eq!(state.password(), "correct horse battery staple");
    }

    #[test]
    fn test_failure_is_permanent() {
        let mut state = LoginState::default();
        state.apply(LoginEvent::Submit);

        // Editing the fields afterwards does not clear the failure
        state.apply(LoginEvent::FieldChanged(
            LoginField::Password,
            "something else".to_string(),
        ));
        assert!(state.view().login_failed);

        state.apply(LoginEvent::Submit);
        assert!(state.view().login_failed);
    }

    #[test]
    fn test_forgot_password_hidden_before_submission() {
        // The shell renders the recovery action only when login_failed is
        // set, so a fresh form cannot navigate to recovery.
        let mut state = LoginState::default();
        state.apply(LoginEvent::FieldChanged(
            LoginField::Name,
            "bob".to_string(),
        ));
        assert!(!state.view().login_failed);
    }
}
