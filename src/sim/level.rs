//! Hand-authored level layouts
//!
//! `build_level` is pure: the same index always yields the same geometry
//! with every coin untaken and every enemy alive.

use super::geometry::Rect;
use super::state::{Coin, Enemy, EnemyKind};
use crate::consts::*;

/// Default goal position (used by unknown levels)
const DEFAULT_FLAG_X: f32 = 3200.0;
const FLAG_Y: f32 = 460.0;

/// Everything `build_level` produces for one level
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub platforms: Vec<Rect>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub flag: Rect,
}

fn flag_at(x: f32) -> Rect {
    Rect::new(x, FLAG_Y, FLAG_WIDTH, FLAG_HEIGHT)
}

/// Three ground strips shared by every level
fn ground() -> Vec<Rect> {
    vec![
        Rect::new(0.0, 640.0, 1400.0, 120.0),
        Rect::new(1400.0, 640.0, 1400.0, 120.0),
        Rect::new(2800.0, 640.0, 1600.0, 120.0),
    ]
}

fn coins_from(positions: &[(f32, f32)], lucky: &[usize]) -> Vec<Coin> {
    positions
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Coin::new(x, y, lucky.contains(&i)))
        .collect()
}

/// Build the layout for `level` (1-based)
pub fn build_level(level: u32) -> LevelLayout {
    let mut platforms = ground();

    let layout = match level {
        1 => {
            // Gentle intro
            platforms.extend([
                Rect::new(280.0, 520.0, 220.0, 24.0),
                Rect::new(560.0, 460.0, 180.0, 24.0),
                Rect::new(820.0, 420.0, 200.0, 24.0),
                Rect::new(1120.0, 520.0, 220.0, 24.0),
                Rect::new(1460.0, 480.0, 200.0, 24.0),
                Rect::new(1760.0, 420.0, 180.0, 24.0),
                Rect::new(2060.0, 380.0, 180.0, 24.0),
                Rect::new(2360.0, 340.0, 220.0, 24.0),
                Rect::new(2660.0, 520.0, 220.0, 24.0),
            ]);

            let positions = [
                (320.0, 480.0),
                (360.0, 480.0),
                (400.0, 480.0),
                (600.0, 420.0),
                (640.0, 420.0),
                (860.0, 380.0),
                (900.0, 380.0),
                (1140.0, 480.0),
                (1180.0, 480.0),
                (1460.0, 440.0),
                (1500.0, 440.0),
                (1740.0, 380.0),
            ];

            LevelLayout {
                platforms,
                coins: coins_from(&positions, &[2]),
                enemies: vec![
                    Enemy::new(700.0, 640.0, 980.0, EnemyKind::Walker),
                    Enemy::new(1600.0, 1540.0, 1880.0, EnemyKind::Walker),
                    Enemy::new(2500.0, 2460.0, 2760.0, EnemyKind::Walker),
                ],
                flag: flag_at(3200.0),
            }
        }
        2 => {
            // More verticality
            platforms.extend([
                Rect::new(340.0, 540.0, 180.0, 24.0),
                Rect::new(620.0, 500.0, 160.0, 24.0),
                Rect::new(900.0, 460.0, 160.0, 24.0),
                Rect::new(1180.0, 420.0, 180.0, 24.0),
                Rect::new(1500.0, 380.0, 200.0, 24.0),
                Rect::new(1840.0, 420.0, 180.0, 24.0),
                Rect::new(2140.0, 460.0, 160.0, 24.0),
                Rect::new(2440.0, 500.0, 160.0, 24.0),
                Rect::new(2740.0, 540.0, 160.0, 24.0),
                Rect::new(2920.0, 420.0, 220.0, 24.0),
            ]);

            // Zig-zag row of 14
            let positions: Vec<(f32, f32)> = (0..14)
                .map(|i| {
                    let dy = if i % 2 == 1 { 20.0 } else { -20.0 };
                    (420.0 + i as f32 * 200.0, 360.0 + dy)
                })
                .collect();

            LevelLayout {
                platforms,
                coins: coins_from(&positions, &[8]),
                enemies: vec![
                    Enemy::new(520.0, 480.0, 760.0, EnemyKind::Runner),
                    Enemy::new(1320.0, 360.0, 1700.0, EnemyKind::Runner),
                    Enemy::new(2100.0, 440.0, 2500.0, EnemyKind::Runner),
                    Enemy::new(3000.0, 600.0, 3300.0, EnemyKind::Walker),
                ],
                flag: flag_at(3400.0),
            }
        }
        3 => {
            // Narrow platforms, dense enemies
            platforms.extend([
                Rect::new(260.0, 560.0, 160.0, 20.0),
                Rect::new(520.0, 520.0, 140.0, 20.0),
                Rect::new(760.0, 480.0, 140.0, 20.0),
                Rect::new(1000.0, 440.0, 140.0, 20.0),
                Rect::new(1240.0, 400.0, 160.0, 20.0),
                Rect::new(1500.0, 360.0, 140.0, 20.0),
                Rect::new(1760.0, 400.0, 140.0, 20.0),
                Rect::new(2020.0, 440.0, 160.0, 20.0),
                Rect::new(2320.0, 500.0, 180.0, 24.0),
                Rect::new(2640.0, 540.0, 180.0, 24.0),
                Rect::new(2920.0, 500.0, 180.0, 24.0),
                Rect::new(3180.0, 460.0, 200.0, 26.0),
            ]);

            // Sine wave of 18
            let positions: Vec<(f32, f32)> = (0..18)
                .map(|i| {
                    let i = i as f32;
                    (300.0 + i * 160.0, 320.0 + (i * 0.7).sin() * 40.0)
                })
                .collect();

            LevelLayout {
                platforms,
                coins: coins_from(&positions, &[3, 13]),
                enemies: vec![
                    Enemy::new(620.0, 520.0, 900.0, EnemyKind::Runner),
                    Enemy::new(1100.0, 580.0, 1400.0, EnemyKind::Walker),
                    Enemy::new(1700.0, 350.0, 2050.0, EnemyKind::Runner),
                    Enemy::new(2300.0, 500.0, 2600.0, EnemyKind::Walker),
                    Enemy::new(2900.0, 480.0, 3250.0, EnemyKind::Runner),
                ],
                flag: flag_at(3500.0),
            }
        }
        _ => {
            log::warn!("No layout for level {}, using bare ground", level);
            LevelLayout {
                platforms,
                coins: Vec::new(),
                enemies: Vec::new(),
                flag: flag_at(DEFAULT_FLAG_X),
            }
        }
    };

    log::info!(
        "Level {} built: {} platforms, {} coins, {} enemies",
        level,
        layout.platforms.len(),
        layout.coins.len(),
        layout.enemies.len()
    );

    layout
}
