// ============================
// crates/ui-lib/src/flags.rs
// ============================
//! Auto-reverting animation flags.
//!
//! Each flag follows the same two-state machine: a trigger sets it active and
//! a timer clears it after a fixed duration. A new trigger while active simply
//! restarts the clock; the latest trigger unconditionally wins. Supersession
//! is tracked with an epoch counter so a revert scheduled for an earlier
//! trigger becomes a no-op instead of cutting the newer animation short.

use crate::config::EffectTimings;
use std::time::Duration;

/// The three transient animation flags of the recovery view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// Heading font flash, triggered on every password edit
    Flash,
    /// Form shake, triggered on submission
    Shake,
    /// Heading spin-and-bounce, triggered on submission
    Jump,
}

impl FlagKind {
    /// How long this flag stays active once triggered
    pub fn duration(self, effects: &EffectTimings) -> Duration {
        match self {
            FlagKind::Flash => Duration::from_millis(effects.flash_ms),
            FlagKind::Shake => Duration::from_millis(effects.shake_ms),
            FlagKind::Jump => Duration::from_millis(effects.jump_ms),
        }
    }
}

/// A boolean that is set by a trigger and cleared by the matching expiry
#[derive(Debug, Clone, Default)]
pub struct PulseFlag {
    active: bool,
    epoch: u64,
}

impl PulseFlag {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate the flag and start a new epoch. The returned epoch must be
    /// passed back to [`PulseFlag::expire`] by whoever schedules the revert.
    pub fn trigger(&mut self) -> u64 {
        self.active = true;
        self.epoch += 1;
        self.epoch
    }

    /// Clear the flag if `epoch` is still the latest trigger. Returns whether
    /// the flag actually changed; a stale epoch leaves it untouched.
    pub fn expire(&mut self, epoch: u64) -> bool {
        if self.active && epoch == self.epoch {
            self.active = false;
            true
        } else {
            false
        }
    }
}
