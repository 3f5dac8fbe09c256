//! Game state and core simulation types
//!
//! Entities are plain data. Dead enemies, taken coins and spent bullets stay
//! in their collections with a liveness flag so indices remain stable for the
//! whole level; every loop skips them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::level::build_level;
use super::session::Overlay;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title overlay, nothing simulated yet
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Flag reached, waiting for `next_level`. Still counts as running.
    LevelComplete,
    /// Lives exhausted (terminal until `start`/`restart`)
    GameOver,
    /// Final flag reached (terminal until `start`/`restart`)
    Won,
}

/// Horizontal facing of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, +1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing for a non-zero input axis
    pub fn from_axis(axis: f32) -> Option<Self> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub on_ground: bool,
    pub alive: bool,
    /// Crouch pose (presentation only)
    pub crouching: bool,
    /// Run-cycle phase
    pub run_t: f32,
    /// Free-running blink timer
    pub blink_t: f32,
    /// Jump grace timer, decays to zero
    pub jump_t: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            facing: Facing::Right,
            on_ground: false,
            alive: true,
            crouching: false,
            run_t: 0.0,
            blink_t: 0.0,
            jump_t: 0.0,
        }
    }
}

impl Player {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Walker,
    Runner,
}

impl EnemyKind {
    /// Initial patrol speed
    pub fn base_speed(self) -> f32 {
        match self {
            EnemyKind::Walker => WALKER_SPEED,
            EnemyKind::Runner => RUNNER_SPEED,
        }
    }

    /// Multiplier applied to patrol motion every step
    pub fn speed_multiplier(self) -> f32 {
        match self {
            EnemyKind::Walker => 1.0,
            EnemyKind::Runner => RUNNER_MULTIPLIER,
        }
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Patrol bounds: the enemy's left edge never goes below `left`,
    /// its right edge never beyond `right`
    pub left: f32,
    pub right: f32,
    pub alive: bool,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn new(x: f32, left: f32, right: f32, kind: EnemyKind) -> Self {
        Self {
            pos: Vec2::new(x, ENEMY_SPAWN_Y),
            vel: Vec2::new(kind.base_speed(), 0.0),
            size: Vec2::splat(ENEMY_SIZE),
            left,
            right,
            alive: true,
            kind,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    /// Center
    pub pos: Vec2,
    pub radius: f32,
    pub taken: bool,
    /// Lucky coins pay more and grant ammo
    pub lucky: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32, lucky: bool) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius: COIN_RADIUS,
            taken: false,
            lucky,
        }
    }

    pub fn score(&self) -> u64 {
        if self.lucky {
            SCORE_LUCKY_COIN
        } else {
            SCORE_COIN
        }
    }
}

/// A player projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    /// Center
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Remaining lifetime in seconds
    pub life: f32,
    pub alive: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, dir: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(BULLET_SPEED * dir, 0.0),
            radius: BULLET_RADIUS,
            life: BULLET_LIFE,
            alive: true,
        }
    }
}

/// World extents for the current level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
}

impl World {
    pub fn for_level(level: u32) -> Self {
        Self {
            width: BASE_WORLD_WIDTH + level as f32 * WORLD_WIDTH_PER_LEVEL,
            height: VIEWPORT_HEIGHT,
        }
    }
}

/// Things that happened during a step, for audio/effects hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { lucky: bool },
    EnemyStomped,
    EnemyShot,
    BulletFired,
    LifeLost,
    LevelComplete { level: u32 },
    Victory,
    GameOver,
}

/// Complete session state. Owns every entity collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Current level (1-based)
    pub level: u32,
    pub max_level: u32,
    pub score: u64,
    /// Coins collected this level
    pub coins: u32,
    /// Coins in this level
    pub coin_total: u32,
    /// Lives remaining; game over once this drops below zero
    pub lives: i32,
    pub ammo: u32,
    pub world: World,
    pub player: Player,
    pub platforms: Vec<Rect>,
    pub coin_list: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub flag: Rect,
    /// Derived camera offset (y stays 0)
    pub camera: Vec2,
    /// Overlay to show, if any
    pub overlay: Option<Overlay>,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh session on the title overlay with level 1 laid out behind it
    pub fn new() -> Self {
        let mut state = Self {
            phase: GamePhase::NotStarted,
            level: 1,
            max_level: MAX_LEVEL,
            score: 0,
            coins: 0,
            coin_total: 0,
            lives: START_LIVES,
            ammo: 0,
            world: World::for_level(1),
            player: Player::default(),
            platforms: Vec::new(),
            coin_list: Vec::new(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            flag: Rect::default(),
            camera: Vec2::ZERO,
            overlay: Some(Overlay::title()),
            events: Vec::new(),
        };
        state.load_level(1);
        state
    }

    /// Replace all level geometry and entities wholesale
    pub fn load_level(&mut self, level: u32) {
        let layout = build_level(level);
        self.world = World::for_level(level);
        self.platforms = layout.platforms;
        self.coin_list = layout.coins;
        self.enemies = layout.enemies;
        self.bullets.clear();
        self.flag = layout.flag;
        self.coin_total = self.coin_list.len() as u32;
    }

    /// Replace the player with a fresh instance at the spawn point
    pub fn respawn_player(&mut self) {
        self.player = Player::default();
    }

    /// Running or paused on the level-complete overlay
    pub fn is_running(&self) -> bool {
        matches!(self.phase, GamePhase::Running | GamePhase::LevelComplete)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
