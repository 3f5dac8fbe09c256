//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per frame with a caller-clamped dt
//! - Input is a snapshot taken before the step
//! - Stable iteration order (entities are never removed mid-level)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod level;
pub mod session;
pub mod state;
pub mod tick;

pub use collision::{ground_stick_enemy, patrol_enemy, resolve_player_vs_platforms};
pub use geometry::{Rect, overlaps};
pub use level::{LevelLayout, build_level};
pub use session::{CONTROLS_FOOTER, Overlay, OverlayKind};
pub use state::{
    Bullet, Coin, Enemy, EnemyKind, Facing, GameEvent, GamePhase, GameState, Player, World,
};
pub use tick::{TickInput, shoot, tick};
