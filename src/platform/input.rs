//! Keyboard state
//!
//! Host key events land here asynchronously. The simulation only ever sees a
//! [`TickInput`] snapshot built once at the top of a step.

use std::collections::HashSet;

use crate::settings::{Action, Settings};
use crate::sim::TickInput;

/// Currently held keys plus the bindings that give them meaning
#[derive(Debug, Clone, Default)]
pub struct InputState {
    settings: Settings,
    pressed: HashSet<String>,
}

impl InputState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            pressed: HashSet::new(),
        }
    }

    /// Record a key press.
    ///
    /// Returns the edge-triggered action (shoot/restart) to perform, if this
    /// press is fresh. Auto-repeat of a held key returns `None`.
    pub fn key_down(&mut self, code: &str) -> Option<Action> {
        let fresh = self.pressed.insert(code.to_string());
        let action = self.settings.action_for(code)?;
        (fresh && action.is_edge_triggered()).then_some(action)
    }

    pub fn key_up(&mut self, code: &str) {
        self.pressed.remove(code);
    }

    /// Drop all held keys (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// True if any key bound to `action` is held
    pub fn is_held(&self, action: Action) -> bool {
        self.pressed
            .iter()
            .any(|code| self.settings.action_for(code) == Some(action))
    }

    /// Level-triggered snapshot for one simulation step
    pub fn snapshot(&self) -> TickInput {
        let mut axis = 0.0;
        if self.is_held(Action::MoveLeft) {
            axis -= 1.0;
        }
        if self.is_held(Action::MoveRight) {
            axis += 1.0;
        }
        TickInput {
            axis,
            jump: self.is_held(Action::Jump),
            crouch: self.is_held(Action::Crouch),
        }
    }
}
