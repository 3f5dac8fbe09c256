//! Session flow: start, level progression, life loss
//!
//! ```text
//! NotStarted -> Running <-> LevelComplete -> Running(next) -> ... -> Won
//!               Running -> GameOver (lives < 0)
//! ```

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// What the overlay button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayKind {
    /// Initial load
    Title,
    /// Controls help
    Controls,
    LevelComplete,
    Victory,
    GameOver,
}

/// Overlay descriptor surfaced on transitions.
///
/// Presentation renders it however it likes and routes the button back
/// through [`GameState::press_overlay_button`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub title: String,
    /// May contain newlines
    pub subtitle: String,
    /// Restart-style button (false shows the plain "Start Game" button)
    pub show_restart: bool,
    pub button_label: String,
}

/// Control hints shown under every overlay
pub const CONTROLS_FOOTER: &str = "Controls: ← → move · Space / W / ↑ jump · F shoot · R restart";

impl Overlay {
    fn new(kind: OverlayKind, title: String, subtitle: String, show_restart: bool, label: &str) -> Self {
        Self {
            kind,
            title,
            subtitle,
            show_restart,
            button_label: label.to_string(),
        }
    }

    pub fn title() -> Self {
        Self::new(
            OverlayKind::Title,
            "Coin Dash".to_string(),
            "Collect coins, stomp enemies, reach the flag!".to_string(),
            false,
            "Start Game",
        )
    }

    pub fn controls() -> Self {
        Self::new(
            OverlayKind::Controls,
            "🎯 Controls".to_string(),
            "← → move\nSpace / W / ↑ jump\nF shoot (need ammo from Lucky Coin)\nR restart".to_string(),
            false,
            "Start Game",
        )
    }

    fn level_complete(state: &GameState) -> Self {
        Self::new(
            OverlayKind::LevelComplete,
            format!("✅ Level {} Complete!", state.level - 1),
            format!(
                "Score: {}\nCoins: {}/{}\nNext: Level {}",
                state.score, state.coins, state.coin_total, state.level
            ),
            true,
            "Next Level",
        )
    }

    fn victory(state: &GameState) -> Self {
        Self::new(
            OverlayKind::Victory,
            "🏆 You Beat All Levels!".to_string(),
            format!(
                "Final Score: {}\nCoins: {}/{}",
                state.score, state.coins, state.coin_total
            ),
            true,
            "Play Again",
        )
    }

    fn game_over(state: &GameState) -> Self {
        Self::new(
            OverlayKind::GameOver,
            "💀 Game Over".to_string(),
            format!("Score: {}\nCoins: {}/{}", state.score, state.coins, state.coin_total),
            true,
            "Restart",
        )
    }
}

impl GameState {
    /// New run from level 1 with default score, lives and ammo
    pub fn start(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.coins = 0;
        self.lives = START_LIVES;
        self.ammo = 0;
        self.level = 1;
        self.respawn_player();
        self.load_level(self.level);
        self.overlay = None;
        log::info!("Run started");
    }

    /// Enter the current `level` after a level-complete transition.
    ///
    /// Score, lives and ammo carry over. Past the last level this is a full `start`.
    pub fn next_level(&mut self) {
        if self.level > self.max_level {
            self.start();
            return;
        }
        self.phase = GamePhase::Running;
        self.coins = 0;
        self.respawn_player();
        self.load_level(self.level);
        self.overlay = None;
        log::info!("Entering level {}", self.level);
    }

    /// Rebuild the current level and resume, keeping score
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.respawn_player();
        self.load_level(self.level);
        self.overlay = None;
        log::info!("Level {} restarted", self.level);
    }

    /// Lose one life; respawn or end the run
    pub fn lose_life(&mut self) {
        if self.is_game_over() || self.is_won() {
            return;
        }
        self.lives -= 1;
        self.emit(GameEvent::LifeLost);
        log::debug!("Life lost, {} left", self.lives);

        if self.lives < 0 {
            self.phase = GamePhase::GameOver;
            self.overlay = Some(Overlay::game_over(self));
            self.emit(GameEvent::GameOver);
            log::info!("Game over with score {}", self.score);
        } else {
            self.respawn_player();
        }
    }

    /// Flag reached on the current level
    pub(crate) fn reach_flag(&mut self) {
        if self.level < self.max_level {
            self.level += 1;
            self.phase = GamePhase::LevelComplete;
            self.overlay = Some(Overlay::level_complete(self));
            self.emit(GameEvent::LevelComplete { level: self.level - 1 });
            log::info!("Level {} complete, score {}", self.level - 1, self.score);
        } else {
            self.phase = GamePhase::Won;
            self.score += SCORE_VICTORY;
            self.overlay = Some(Overlay::victory(self));
            self.emit(GameEvent::Victory);
            log::info!("All levels cleared, final score {}", self.score);
        }
    }

    /// Show the controls help overlay
    pub fn show_controls(&mut self) {
        self.overlay = Some(Overlay::controls());
    }

    /// Act on the overlay's button: a fresh run after a terminal state or
    /// from the title, otherwise continue to the next level
    pub fn press_overlay_button(&mut self) {
        let Some(overlay) = self.overlay.take() else {
            return;
        };
        match overlay.kind {
            OverlayKind::Title | OverlayKind::Controls => self.start(),
            _ if self.is_game_over() || self.is_won() => self.start(),
            _ => self.next_level(),
        }
    }
}
