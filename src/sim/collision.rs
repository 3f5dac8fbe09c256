//! Collision response against static platforms
//!
//! The player is resolved one axis at a time: move on x and push out, then
//! apply gravity, move on y and push out. Overlapping platforms are handled
//! independently in list order, so when several apply in one pass the last
//! one wins. Enemies only get the vertical half (ground stick).

use super::geometry::{Rect, overlaps};
use super::state::{Enemy, Player};
use crate::clamp;
use crate::consts::*;

/// Integrate and resolve the player against `platforms` for one step.
///
/// Returns true if the player has fallen out of the world; the caller
/// decides what that costs.
pub fn resolve_player_vs_platforms(
    player: &mut Player,
    platforms: &[Rect],
    world_width: f32,
    dt: f32,
) -> bool {
    player.on_ground = false;

    // Horizontal
    player.pos.x += player.vel.x * dt;
    for platform in platforms {
        if overlaps(&player.rect(), platform) {
            if player.vel.x > 0.0 {
                player.pos.x = platform.x - player.size.x;
            } else if player.vel.x < 0.0 {
                player.pos.x = platform.right();
            }
            player.vel.x = 0.0;
        }
    }

    // Vertical
    player.vel.y += GRAVITY * dt;
    player.pos.y += player.vel.y * dt;
    for platform in platforms {
        if overlaps(&player.rect(), platform) {
            if player.vel.y > 0.0 {
                // Landed
                player.pos.y = platform.y - player.size.y;
                player.vel.y = 0.0;
                player.on_ground = true;
                player.jump_t = 0.0;
            } else if player.vel.y < 0.0 {
                // Bonked
                player.pos.y = platform.bottom();
                player.vel.y = 0.0;
            }
        }
    }

    player.pos.x = clamp(player.pos.x, 0.0, world_width - player.size.x);

    player.pos.y > FALL_OUT_Y
}

/// Patrol an enemy between its bounds, bouncing at either end
pub fn patrol_enemy(enemy: &mut Enemy, dt: f32) {
    enemy.pos.x += enemy.vel.x * dt * enemy.kind.speed_multiplier();
    if enemy.pos.x < enemy.left {
        enemy.pos.x = enemy.left;
        enemy.vel.x = enemy.vel.x.abs();
    }
    if enemy.pos.x + enemy.size.x > enemy.right {
        enemy.pos.x = enemy.right - enemy.size.x;
        enemy.vel.x = -enemy.vel.x.abs();
    }
}

/// Apply gravity and snap a falling enemy onto the first platform it sinks into
pub fn ground_stick_enemy(enemy: &mut Enemy, platforms: &[Rect], dt: f32) {
    enemy.vel.y += GRAVITY * dt;
    enemy.pos.y += enemy.vel.y * dt;
    if enemy.vel.y <= 0.0 {
        return;
    }
    if let Some(platform) = platforms.iter().find(|p| overlaps(&enemy.rect(), p)) {
        enemy.pos.y = platform.y - enemy.size.y;
        enemy.vel.y = 0.0;
    }
}
