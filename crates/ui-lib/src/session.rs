// ============================
// crates/ui-lib/src/session.rs
// ============================
//! Per-connection UI session.
//!
//! A `UiSession` is instantiated per WebSocket connection and owns everything
//! that connection can see: the current screen, its state, and the RNG that
//! drives the rule shuffling and background colors. All events for one
//! session are applied on one task, one at a time; the only asynchronous
//! primitive is the fire-and-forget revert timer each animation trigger
//! schedules, which feeds a `FlagElapsed` back into the session's own input
//! channel.

use crate::config::Settings;
use crate::error::AppError;
use crate::flags::FlagKind;
use crate::views::{Effect, LoginEvent, RecoveryEvent, Screen};
use ::metrics::counter;
use crate::metrics::{LOGIN_REJECTED, NAVIGATE, RESET_DISMISSED};
use neverpass_common::{ClientToServer, ServerToClient};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Everything a session reacts to: client messages and its own timers
#[derive(Debug)]
pub enum SessionInput {
    Client(ClientToServer),
    FlagElapsed { kind: FlagKind, epoch: u64 },
}

/// State and event handling for a single connection
pub struct UiSession {
    settings: Arc<Settings>,
    client_id: Uuid,
    screen: Option<Screen>,
    rng: StdRng,
    out: mpsc::Sender<ServerToClient>,
    timer_tx: mpsc::Sender<SessionInput>,
}

impl UiSession {
    /// Create a session with an OS-seeded RNG
    pub fn new(
        settings: Arc<Settings>,
        out: mpsc::Sender<ServerToClient>,
        timer_tx: mpsc::Sender<SessionInput>,
    ) -> Self {
        Self::with_rng(settings, out, timer_tx, StdRng::from_os_rng())
    }

    /// Create a session with an explicit RNG, so tests can seed it
    pub fn with_rng(
        settings: Arc<Settings>,
        out: mpsc::Sender<ServerToClient>,
        timer_tx: mpsc::Sender<SessionInput>,
        rng: StdRng,
    ) -> Self {
        Self {
            settings,
            client_id: Uuid::new_v4(),
            screen: None,
            rng,
            out,
            timer_tx,
        }
    }

    /// Apply one input to the current screen and push the refreshed view
    pub async fn handle(&mut self, input: SessionInput) -> Result<(), AppError> {
        match input {
            SessionInput::Client(msg) => self.handle_client(msg).await,
            SessionInput::FlagElapsed { kind, epoch } => {
                self.handle_flag_elapsed(kind, epoch).await
            },
        }
    }

    async fn handle_client(&mut self, msg: ClientToServer) -> Result<(), AppError> {
        match msg {
            ClientToServer::Navigate { path } => match Screen::for_path(&path, &mut self.rng) {
                Some(screen) => {
                    tracing::debug!(
                        client_id = %self.client_id,
                        %path,
                        screen = screen.name(),
                        "navigated"
                    );
                    counter!(NAVIGATE).increment(1);
                    let render = screen.render();
                    // Replacing the screen drops the previous view's state
                    self.screen = Some(screen);
                    self.out.send(render).await?;
                    Ok(())
                },
                None => {
                    tracing::debug!(client_id = %self.client_id, %path, "unknown route");
                    self.out.send(ServerToClient::UnknownRoute { path }).await?;
                    Ok(())
                },
            },
            ClientToServer::LoginInput { field, value } => {
                self.on_login(LoginEvent::FieldChanged(field, value)).await
            },
            ClientToServer::LoginSubmit => {
                counter!(LOGIN_REJECTED).increment(1);
                self.on_login(LoginEvent::Submit).await
            },
            ClientToServer::RecoveryInput { value } => {
                self.on_recovery(RecoveryEvent::PasswordChanged(value)).await
            },
            ClientToServer::RecoverySubmit => {
                counter!(RESET_DISMISSED).increment(1);
                self.on_recovery(RecoveryEvent::Submit).await
            },
        }
    }

    async fn on_login(&mut self, event: LoginEvent) -> Result<(), AppError> {
        let render = match &mut self.screen {
            Some(Screen::Login(state)) => {
                state.apply(event);
                ServerToClient::Login { view: state.view() }
            },
            other => {
                let actual = other.as_ref().map_or("none", Screen::name);
                return self.wrong_screen("login", actual).await;
            },
        };
        self.out.send(render).await?;
        Ok(())
    }

    async fn on_recovery(&mut self, event: RecoveryEvent) -> Result<(), AppError> {
        let (render, effects) = match &mut self.screen {
            Some(Screen::Recovery(state)) => {
                let transition = state.apply(event, &mut self.rng, &self.settings.effects);
                let render = transition
                    .changed
                    .then(|| ServerToClient::Recovery { view: state.view() });
                (render, transition.effects)
            },
            other => {
                let actual = other.as_ref().map_or("none", Screen::name);
                return self.wrong_screen("recovery", actual).await;
            },
        };

        for effect in effects {
            self.schedule_revert(effect);
        }
        if let Some(render) = render {
            self.out.send(render).await?;
        }
        Ok(())
    }

    async fn handle_flag_elapsed(&mut self, kind: FlagKind, epoch: u64) -> Result<(), AppError> {
        let render = match &mut self.screen {
            Some(Screen::Recovery(state)) => {
                let transition = state.apply(
                    RecoveryEvent::FlagElapsed { kind, epoch },
                    &mut self.rng,
                    &self.settings.effects,
                );
                transition
                    .changed
                    .then(|| ServerToClient::Recovery { view: state.view() })
            },
            // The timer belongs to a screen that has since been torn down
            _ => None,
        };

        if let Some(render) = render {
            self.out.send(render).await?;
        }
        Ok(())
    }

    async fn wrong_screen(
        &self,
        expected: &'static str,
        actual: &'static str,
    ) -> Result<(), AppError> {
        let err = AppError::WrongScreen { expected, actual };
        tracing::debug!(client_id = %self.client_id, %err, "rejected message");
        self.out
            .send(ServerToClient::Error {
                code: err.error_code().to_string(),
                message: err.to_string(),
            })
            .await?;
        Ok(())
    }

    /// Spawn the revert timer for one animation trigger. The timer is never
    /// cancelled; a superseded epoch simply no-ops when it lands.
    fn schedule_revert(&self, effect: Effect) {
        let timer_tx = self.timer_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(effect.after).await;
            let _ = timer_tx
                .send(SessionInput::FlagElapsed {
                    kind: effect.kind,
                    epoch: effect.epoch,
                })
                .await;
        });
    }
}
