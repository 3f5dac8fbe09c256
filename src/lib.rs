//! Coin Dash - A side-scrolling coin platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `platform`: Host abstraction (keyboard input, frame clock)
//! - `hud`: HUD values and overlay descriptors for presentation
//! - `snapshot`: Read-only world view handed to the renderer
//! - `settings`: Key bindings and preferences

pub mod game;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use game::Game;
pub use settings::{Action, KeyBinding, Settings};

/// Game configuration constants
pub mod consts {
    /// Visible viewport (logical units)
    pub const VIEWPORT_WIDTH: f32 = 1280.0;
    pub const VIEWPORT_HEIGHT: f32 = 720.0;

    /// Largest frame delta the simulation will integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

    /// World physics
    pub const GRAVITY: f32 = 2000.0;
    pub const MOVE_SPEED: f32 = 360.0;
    pub const JUMP_VELOCITY: f32 = -760.0;
    /// Jump grace timer set on takeoff (presentation only)
    pub const JUMP_GRACE: f32 = 0.2;
    /// Falling below this y costs a life
    pub const FALL_OUT_Y: f32 = 2000.0;

    /// World width grows with the level index
    pub const BASE_WORLD_WIDTH: f32 = 3600.0;
    pub const WORLD_WIDTH_PER_LEVEL: f32 = 200.0;

    /// Camera leads the player by this much and may overshoot the world edge by the margin
    pub const CAMERA_LEAD: f32 = 540.0;
    pub const CAMERA_MARGIN: f32 = 80.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 42.0;
    pub const PLAYER_HEIGHT: f32 = 58.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 200.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 40.0;
    pub const ENEMY_SPAWN_Y: f32 = 600.0 - 48.0;
    pub const WALKER_SPEED: f32 = 90.0;
    pub const RUNNER_SPEED: f32 = 120.0;
    pub const RUNNER_MULTIPLIER: f32 = 1.2;
    /// Max depth of player-bottom into enemy-top that still counts as a stomp
    pub const STOMP_DEPTH: f32 = 24.0;
    pub const STOMP_BOUNCE: f32 = -520.0;

    /// Coins
    pub const COIN_RADIUS: f32 = 10.0;
    pub const COIN_PICKUP_RADIUS: f32 = 28.0;
    pub const LUCKY_AMMO: u32 = 5;

    /// Bullets
    pub const BULLET_SPEED: f32 = 700.0;
    pub const BULLET_RADIUS: f32 = 6.0;
    pub const BULLET_LIFE: f32 = 1.8;
    /// Horizontal offset from the player's center to the muzzle
    pub const MUZZLE_OFFSET: f32 = 20.0;

    /// Flag (goal) size
    pub const FLAG_WIDTH: f32 = 24.0;
    pub const FLAG_HEIGHT: f32 = 200.0;

    /// Session
    pub const START_LIVES: i32 = 3;
    pub const MAX_LEVEL: u32 = 3;

    /// Scoring
    pub const SCORE_COIN: u64 = 100;
    pub const SCORE_LUCKY_COIN: u64 = 250;
    pub const SCORE_STOMP: u64 = 200;
    pub const SCORE_SHOT: u64 = 250;
    pub const SCORE_VICTORY: u64 = 500;
}

/// Clamp `v` into `[min, max]`, preferring `min` when the range is inverted
#[inline]
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    min.max(max.min(v))
}

/// Linear interpolation from `a` toward `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inverted_range_prefers_min() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
        assert_eq!(clamp(-1.0, 0.0, 4.0), 0.0);
        assert_eq!(clamp(9.0, 0.0, 4.0), 4.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(4.0, 0.0, 0.0), 4.0);
    }
}
