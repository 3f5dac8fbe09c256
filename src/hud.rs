//! HUD values for presentation
//!
//! Plain numbers and labels; formatting and layout belong to whatever draws them.

use serde::Serialize;

use crate::sim::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub coins: u32,
    pub coin_total: u32,
    /// Never shown below zero
    pub lives: u32,
    pub ammo: u32,
    /// World label, e.g. "2-2"
    pub world: String,
    /// None when the FPS counter is disabled
    pub fps: Option<u32>,
}

impl Hud {
    pub fn from_state(state: &GameState, fps: Option<u32>) -> Self {
        Self {
            score: state.score,
            coins: state.coins,
            coin_total: state.coin_total,
            lives: state.lives.max(0) as u32,
            ammo: state.ammo,
            world: format!("{}-{}", state.level, state.level),
            fps,
        }
    }
}
