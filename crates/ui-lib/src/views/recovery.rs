// ============================
// crates/ui-lib/src/views/recovery.rs
// ============================
//! Recovery view state machine.
//!
//! Every keystroke recomputes the met list against the full catalog,
//! resamples the displayed requirement subset, re-randomizes the form
//! background, and flashes the heading. Submission never accepts anything:
//! it surfaces a fixed dismissive notice and kicks off the shake and jump
//! animations. The view owns no timers itself; applying an event returns
//! the revert effects the session must schedule.

use crate::config::EffectTimings;
use crate::flags::{FlagKind, PulseFlag};
use crate::rules::{self, Rule};
use neverpass_common::{RecoveryView, RequirementItem};
use rand::Rng;
use std::time::Duration;

/// The notice shown on every submission
pub const DISMISSAL: &str = "You can never set a new password! \u{1F61C}";

/// In-memory state of the recovery form
pub struct RecoveryState {
    password: String,
    active: Vec<&'static Rule>,
    met: Vec<&'static str>,
    flash: PulseFlag,
    shake: PulseFlag,
    jump: PulseFlag,
    bg_color: String,
    notice: Option<&'static str>,
}

/// Events the recovery view reacts to
#[derive(Debug, Clone)]
pub enum RecoveryEvent {
    PasswordChanged(String),
    Submit,
    /// A flag's revert timer fired. Stale epochs (superseded by a newer
    /// trigger) are ignored.
    FlagElapsed {
        kind: FlagKind,
        epoch: u64,
    },
}

/// A revert the session must schedule after applying an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub kind: FlagKind,
    pub epoch: u64,
    pub after: Duration,
}

/// Outcome of applying one event
pub struct Transition {
    /// Whether the view model changed and should be re-pushed to the shell
    pub changed: bool,
    /// Revert timers to schedule
    pub effects: Vec<Effect>,
}

impl RecoveryState {
    /// Construct the view with a freshly sampled requirement subset
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            password: String::new(),
            active: rules::sample_active(rng),
            met: Vec::new(),
            flash: PulseFlag::default(),
            shake: PulseFlag::default(),
            jump: PulseFlag::default(),
            bg_color: "#ffffff".to_string(),
            notice: None,
        }
    }

    /// Apply one event to the form state
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        event: RecoveryEvent,
        rng: &mut R,
        effects: &EffectTimings,
    ) -> Transition {
        match event {
            RecoveryEvent::PasswordChanged(text) => {
                self.met = rules::met_rules(&text);
                self.password = text;
                self.active = rules::sample_active(rng);
                self.bg_color = rules::random_color(rng);
                let epoch = self.flash.trigger();
                Transition {
                    changed: true,
                    effects: vec![Effect {
                        kind: FlagKind::Flash,
                        epoch,
                        after: FlagKind::Flash.duration(effects),
                    }],
                }
            },
            RecoveryEvent::Submit => {
                self.notice = Some(DISMISSAL);
                let shake_epoch = self.shake.trigger();
                let jump_epoch = self.jump.trigger();
                Transition {
                    changed: true,
                    effects: vec![
                        Effect {
                            kind: FlagKind::Shake,
                            epoch: shake_epoch,
                            after: FlagKind::Shake.duration(effects),
                        },
                        Effect {
                            kind: FlagKind::Jump,
                            epoch: jump_epoch,
                            after: FlagKind::Jump.duration(effects),
                        },
                    ],
                }
            },
            RecoveryEvent::FlagElapsed { kind, epoch } => {
                let changed = self.flag_mut(kind).expire(epoch);
                Transition {
                    changed,
                    effects: Vec::new(),
                }
            },
        }
    }

    /// The latest input text. Held only for the lifetime of the view;
    /// nothing validates or stores it beyond this field.
    pub fn password(&self) -> &str {
        &self.password
    }

    fn flag_mut(&mut self, kind: FlagKind) -> &mut PulseFlag {
        match kind {
            FlagKind::Flash => &mut self.flash,
            FlagKind::Shake => &mut self.shake,
            FlagKind::Jump => &mut self.jump,
        }
    }

    /// Render state for the shell
    pub fn view(&self) -> RecoveryView {
        RecoveryView {
            requirements: self
                .active
                .iter()
                .map(|rule| RequirementItem {
                    key: rule.id,
                    text: rule.description.to_string(),
                })
                .collect(),
            met: self.met.iter().map(|text| (*text).to_string()).collect(),
            bg_color: self.bg_color.clone(),
            flash: self.flash.is_active(),
            shake: self.shake.is_active(),
            jump: self.jump.is_active(),
            notice: self.notice.map(str::to_string),
        }
    }
}
