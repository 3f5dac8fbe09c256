//! Read-only world view for the renderer
//!
//! Built after the step each frame. The renderer gets owned copies, so it
//! can live on another thread without touching simulation state.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Facing, GamePhase, GameState, Rect};

/// Player pose and animation timers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub vel: Vec2,
    pub facing: Facing,
    pub on_ground: bool,
    pub crouching: bool,
    pub run_t: f32,
    pub blink_t: f32,
    pub jump_t: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinView {
    pub pos: Vec2,
    pub radius: f32,
    pub lucky: bool,
    pub taken: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub rect: Rect,
    pub alive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub radius: f32,
    pub alive: bool,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub camera: Vec2,
    pub world_width: f32,
    pub world_height: f32,
    pub platforms: Vec<Rect>,
    pub coins: Vec<CoinView>,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub player: PlayerView,
    pub flag: Rect,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let p = &state.player;
        Self {
            phase: state.phase,
            camera: state.camera,
            world_width: state.world.width,
            world_height: state.world.height,
            platforms: state.platforms.clone(),
            coins: state
                .coin_list
                .iter()
                .map(|c| CoinView {
                    pos: c.pos,
                    radius: c.radius,
                    lucky: c.lucky,
                    taken: c.taken,
                })
                .collect(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    rect: e.rect(),
                    alive: e.alive,
                })
                .collect(),
            bullets: state
                .bullets
                .iter()
                .map(|b| BulletView {
                    pos: b.pos,
                    radius: b.radius,
                    alive: b.alive,
                })
                .collect(),
            player: PlayerView {
                rect: p.rect(),
                vel: p.vel,
                facing: p.facing,
                on_ground: p.on_ground,
                crouching: p.crouching,
                run_t: p.run_t,
                blink_t: p.blink_t,
                jump_t: p.jump_t,
            },
            flag: state.flag,
        }
    }

    /// Coins still to be drawn
    pub fn visible_coins(&self) -> impl Iterator<Item = &CoinView> {
        self.coins.iter().filter(|c| !c.taken)
    }

    /// Enemies still to be drawn
    pub fn visible_enemies(&self) -> impl Iterator<Item = &EnemyView> {
        self.enemies.iter().filter(|e| e.alive)
    }

    /// Bullets still to be drawn
    pub fn visible_bullets(&self) -> impl Iterator<Item = &BulletView> {
        self.bullets.iter().filter(|b| b.alive)
    }
}
