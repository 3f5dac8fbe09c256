//! Frame-loop driver
//!
//! Owns the session, the keyboard state and the frame clock. The host calls
//! `key_down`/`key_up` from its event callbacks and `frame` once per
//! animation frame, then reads `hud`/`snapshot` to draw.

use crate::hud::Hud;
use crate::platform::{FrameClock, InputState};
use crate::settings::{Action, Settings};
use crate::sim::{GameEvent, GameState, Overlay, shoot, tick};
use crate::snapshot::RenderSnapshot;

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    input: InputState,
    clock: FrameClock,
    show_fps: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(),
            show_fps: settings.show_fps,
            input: InputState::new(settings),
            clock: FrameClock::new(),
        }
    }

    /// Key pressed; edge-triggered actions run immediately
    pub fn key_down(&mut self, code: &str) {
        match self.input.key_down(code) {
            Some(Action::Shoot) => shoot(&mut self.state),
            Some(Action::Restart) => self.state.restart(),
            _ => {}
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.input.key_up(code);
    }

    /// Window lost focus: release everything so nothing sticks
    pub fn blur(&mut self) {
        self.input.clear();
    }

    /// The overlay's button was clicked
    pub fn press_overlay_button(&mut self) {
        self.state.press_overlay_button();
    }

    /// Run one frame at host time `now_ms`. Returns the dt used.
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        let dt = self.clock.advance(now_ms);
        let input = self.input.snapshot();
        tick(&mut self.state, &input, dt);
        dt
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.state.overlay.as_ref()
    }

    pub fn hud(&self) -> Hud {
        let fps = self.show_fps.then(|| self.clock.fps());
        Hud::from_state(&self.state, fps)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.state)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }
}
