//! Game settings and key bindings
//!
//! Stored as JSON. Missing fields fall back to defaults so older or partial
//! files keep working.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Logical input actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    /// Edge-triggered
    Shoot,
    /// Edge-triggered
    Restart,
    /// Pose only
    Crouch,
}

impl Action {
    /// Fires once per press rather than being sampled every frame
    pub fn is_edge_triggered(self) -> bool {
        matches!(self, Action::Shoot | Action::Restart)
    }
}

/// Maps a host key code (e.g. `"KeyA"`, `"ArrowLeft"`) to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub code: String,
    pub action: Action,
}

impl KeyBinding {
    pub fn new(code: &str, action: Action) -> Self {
        Self {
            code: code.to_string(),
            action,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key bindings; several codes may map to one action
    pub bindings: Vec<KeyBinding>,
    /// Show FPS counter in the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        use Action::*;
        Self {
            bindings: vec![
                KeyBinding::new("ArrowLeft", MoveLeft),
                KeyBinding::new("KeyA", MoveLeft),
                KeyBinding::new("ArrowRight", MoveRight),
                KeyBinding::new("KeyD", MoveRight),
                KeyBinding::new("Space", Jump),
                KeyBinding::new("ArrowUp", Jump),
                KeyBinding::new("KeyW", Jump),
                KeyBinding::new("KeyF", Shoot),
                KeyBinding::new("KeyR", Restart),
                KeyBinding::new("ArrowDown", Crouch),
                KeyBinding::new("KeyS", Crouch),
            ],
            show_fps: true,
        }
    }
}

impl Settings {
    /// Action bound to a key code, if any (first binding wins)
    pub fn action_for(&self, code: &str) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.code == code)
            .map(|b| b.action)
    }

    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid settings JSON")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize settings")
    }

    /// Read settings from a file
    pub fn read_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load(path: &Path) -> Self {
        match Self::read_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }
}
