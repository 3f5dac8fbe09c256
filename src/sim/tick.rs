//! Per-frame simulation step
//!
//! One variable-length step per frame. The input snapshot is taken once by
//! the caller and never re-read mid-step, so a step is a pure function of
//! (state, input, dt).

use glam::Vec2;

use super::collision::{ground_stick_enemy, patrol_enemy, resolve_player_vs_platforms};
use super::geometry::overlaps;
use super::state::{Bullet, Facing, GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::{clamp, lerp};

/// Input sampled for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Horizontal axis: -1, 0 or +1
    pub axis: f32,
    /// Jump held
    pub jump: bool,
    /// Crouch held (pose only)
    pub crouch: bool,
}

/// Advance the session by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Only live play advances; the level-complete overlay freezes the world
    if state.phase != GamePhase::Running {
        return;
    }

    apply_input(state, input);

    if resolve_player_vs_platforms(&mut state.player, &state.platforms, state.world.width, dt) {
        log::debug!("Player fell out of the world");
        state.lose_life();
    }

    animate_player(state, dt);
    collect_coins(state);
    step_enemies(state, dt);
    step_bullets(state, dt);

    // Reached flag
    if state.phase == GamePhase::Running && overlaps(&state.player.rect(), &state.flag) {
        state.reach_flag();
    }

    update_camera(state);
}

/// Fire one bullet from the player's facing edge.
///
/// Silently ignored when not playing or out of ammo.
pub fn shoot(state: &mut GameState) {
    if state.phase != GamePhase::Running || state.ammo == 0 {
        return;
    }
    let player = &state.player;
    let dir = player.facing.sign();
    let muzzle = Vec2::new(
        player.pos.x + player.size.x / 2.0 + dir * MUZZLE_OFFSET,
        player.pos.y + player.size.y * 0.55,
    );
    state.bullets.push(Bullet::new(muzzle, dir));
    state.ammo -= 1;
    state.emit(GameEvent::BulletFired);
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    let axis = input.axis.clamp(-1.0, 1.0);
    let player = &mut state.player;
    player.vel.x = axis * MOVE_SPEED;
    if let Some(facing) = Facing::from_axis(axis) {
        player.facing = facing;
    }
    player.crouching = input.crouch;

    if input.jump && player.on_ground {
        player.vel.y = JUMP_VELOCITY;
        player.on_ground = false;
        player.jump_t = JUMP_GRACE;
    }
}

/// Presentation timers derived from simulation facts
fn animate_player(state: &mut GameState, dt: f32) {
    let player = &mut state.player;
    if player.vel.x.abs() > 1.0 && player.on_ground {
        player.run_t += dt * 10.0;
    } else {
        player.run_t = lerp(player.run_t, 0.0, dt * 10.0);
    }
    player.blink_t += dt;
    player.jump_t = (player.jump_t - dt).max(0.0);
}

fn collect_coins(state: &mut GameState) {
    let center = state.player.center();
    let mut picked = Vec::new();
    for coin in state.coin_list.iter_mut().filter(|c| !c.taken) {
        if center.distance(coin.pos) < COIN_PICKUP_RADIUS {
            coin.taken = true;
            picked.push((coin.lucky, coin.score()));
        }
    }

    for (lucky, score) in picked {
        state.coins += 1;
        state.score += score;
        if lucky {
            state.ammo += LUCKY_AMMO;
        }
        state.emit(GameEvent::CoinCollected { lucky });
        log::debug!("Coin collected (lucky: {}), score {}", lucky, state.score);
    }
}

fn step_enemies(state: &mut GameState, dt: f32) {
    // Indexed: a non-stomp contact calls back into the session
    for i in 0..state.enemies.len() {
        if !state.enemies[i].alive {
            continue;
        }

        let enemy = &mut state.enemies[i];
        patrol_enemy(enemy, dt);
        ground_stick_enemy(enemy, &state.platforms, dt);

        let enemy_rect = enemy.rect();
        if !overlaps(&state.player.rect(), &enemy_rect) {
            continue;
        }

        let player = &state.player;
        let stomp = player.vel.y > 0.0 && player.bottom() - enemy_rect.y < STOMP_DEPTH;
        if stomp {
            state.enemies[i].alive = false;
            state.score += SCORE_STOMP;
            state.player.vel.y = STOMP_BOUNCE;
            state.emit(GameEvent::EnemyStomped);
            log::debug!("Enemy {} stomped", i);
        } else {
            state.lose_life();
        }
    }
}

/// Bullets fly straight and ignore platforms; they only expire or hit enemies
fn step_bullets(state: &mut GameState, dt: f32) {
    let mut hits = 0u64;
    for bullet in state.bullets.iter_mut().filter(|b| b.alive) {
        bullet.pos += bullet.vel * dt;
        bullet.life -= dt;
        if bullet.life <= 0.0 {
            bullet.alive = false;
            continue;
        }

        if let Some(enemy) = state
            .enemies
            .iter_mut()
            .find(|e| e.alive && e.rect().contains_point(bullet.pos))
        {
            enemy.alive = false;
            bullet.alive = false;
            hits += 1;
        }
    }

    for _ in 0..hits {
        state.score += SCORE_SHOT;
        state.emit(GameEvent::EnemyShot);
    }
    if hits > 0 {
        log::debug!("{} enemies shot, score {}", hits, state.score);
    }
}

fn update_camera(state: &mut GameState) {
    let max_x = state.world.width - VIEWPORT_WIDTH + CAMERA_MARGIN;
    state.camera = Vec2::new(clamp(state.player.pos.x - CAMERA_LEAD, 0.0, max_x), 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use crate::sim::state::{Coin, Enemy, EnemyKind};

    fn running() -> GameState {
        let mut state = GameState::new();
        state.start();
        state
    }

    /// A running session with no coins or enemies on a flat floor
    fn empty_running() -> GameState {
        let mut state = running();
        state.platforms = vec![Rect::new(0.0, 640.0, 4000.0, 120.0)];
        state.coin_list.clear();
        state.enemies.clear();
        state
    }

    #[test]
    fn test_tick_ignored_before_start() {
        let mut state = GameState::new();
        let before = state.player.pos;
        tick(&mut state, &TickInput { axis: 1.0, ..Default::default() }, MAX_FRAME_DT);
        assert_eq!(state.player.pos, before);
    }

    #[test]
    fn test_move_sets_velocity_and_facing() {
        let mut state = empty_running();
        tick(&mut state, &TickInput { axis: -1.0, ..Default::default() }, MAX_FRAME_DT);
        assert_eq!(state.player.facing, Facing::Left);
        assert_eq!(state.player.vel.x, -MOVE_SPEED);

        // Releasing keeps the last facing
        tick(&mut state, &TickInput::default(), MAX_FRAME_DT);
        assert_eq!(state.player.facing, Facing::Left);
        assert_eq!(state.player.vel.x, 0.0);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut state = empty_running();
        state.player.pos.y = 640.0 - PLAYER_HEIGHT;
        state.player.on_ground = true;
        let jump = TickInput { jump: true, ..Default::default() };
        tick(&mut state, &jump, MAX_FRAME_DT);
        assert!(state.player.vel.y < 0.0);
        assert!(!state.player.on_ground);
        assert!(state.player.jump_t > 0.0);

        // Mid-air: holding jump does not re-launch
        let vy = state.player.vel.y;
        tick(&mut state, &jump, MAX_FRAME_DT);
        assert!(state.player.vel.y > vy);
    }

    #[test]
    fn test_coin_pickup_scores_and_counts() {
        let mut state = empty_running();
        let center = state.player.center();
        state.coin_list = vec![
            Coin::new(center.x + 5.0, center.y, false),
            Coin::new(center.x - 5.0, center.y, true),
            Coin::new(center.x + 500.0, center.y, false),
        ];
        collect_coins(&mut state);
        assert_eq!(state.coins, 2);
        assert_eq!(state.score, SCORE_COIN + SCORE_LUCKY_COIN);
        assert_eq!(state.ammo, LUCKY_AMMO);
        assert!(state.coin_list[0].taken && state.coin_list[1].taken);
        assert!(!state.coin_list[2].taken);

        // Taken coins never pay twice
        collect_coins(&mut state);
        assert_eq!(state.coins, 2);
        assert_eq!(state.score, SCORE_COIN + SCORE_LUCKY_COIN);
    }

    #[test]
    fn test_coin_pickup_radius_is_strict() {
        let mut state = empty_running();
        let center = state.player.center();
        state.coin_list = vec![Coin::new(center.x + COIN_PICKUP_RADIUS, center.y, false)];
        collect_coins(&mut state);
        assert_eq!(state.coins, 0);
    }

    #[test]
    fn test_stomp_kills_enemy_and_bounces() {
        // Scenario A: falling, player bottom 10 below enemy top
        let mut state = empty_running();
        let mut enemy = Enemy::new(100.0, 0.0, 1000.0, EnemyKind::Walker);
        enemy.pos.y = 400.0;
        state.enemies = vec![enemy];
        state.player.pos = Vec2::new(100.0, 400.0 + 10.0 - PLAYER_HEIGHT);
        state.player.vel.y = 200.0;

        step_enemies(&mut state, 0.0);
        assert!(!state.enemies[0].alive);
        assert_eq!(state.score, SCORE_STOMP);
        assert_eq!(state.player.vel.y, STOMP_BOUNCE);
        assert_eq!(state.lives, START_LIVES);
    }

    #[test]
    fn test_side_contact_costs_a_life() {
        // Scenario B: not falling
        let mut state = empty_running();
        let mut enemy = Enemy::new(100.0, 0.0, 1000.0, EnemyKind::Walker);
        enemy.pos.y = 400.0;
        state.enemies = vec![enemy];
        state.player.pos = Vec2::new(110.0, 380.0);
        state.player.vel.y = 0.0;

        step_enemies(&mut state, 0.0);
        assert!(state.enemies[0].alive);
        assert_eq!(state.lives, START_LIVES - 1);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        assert!(state.drain_events().contains(&GameEvent::LifeLost));
    }

    #[test]
    fn test_deep_fall_into_enemy_is_not_a_stomp() {
        let mut state = empty_running();
        let mut enemy = Enemy::new(100.0, 0.0, 1000.0, EnemyKind::Walker);
        enemy.pos.y = 400.0;
        state.enemies = vec![enemy];
        // Bottom 30 below enemy top
        state.player.pos = Vec2::new(100.0, 430.0 - PLAYER_HEIGHT);
        state.player.vel.y = 200.0;

        step_enemies(&mut state, 0.0);
        assert!(state.enemies[0].alive);
        assert_eq!(state.lives, START_LIVES - 1);
    }

    #[test]
    fn test_dead_enemies_are_skipped() {
        let mut state = empty_running();
        let mut enemy = Enemy::new(100.0, 0.0, 1000.0, EnemyKind::Walker);
        enemy.alive = false;
        let x = enemy.pos.x;
        state.enemies = vec![enemy];
        step_enemies(&mut state, 0.5);
        assert_eq!(state.enemies[0].pos.x, x);
    }

    #[test]
    fn test_bullet_travels_at_fixed_speed() {
        // Scenario C
        let mut state = empty_running();
        state.ammo = 1;
        shoot(&mut state);
        assert_eq!(state.ammo, 0);
        let start_x = state.bullets[0].pos.x;

        step_bullets(&mut state, 1.0);
        let bullet = &state.bullets[0];
        assert!(bullet.alive);
        assert!((bullet.life - 0.8).abs() < 1e-6);
        assert_eq!(bullet.pos.x, start_x + BULLET_SPEED);
    }

    #[test]
    fn test_bullet_expires() {
        let mut state = empty_running();
        state.ammo = 1;
        shoot(&mut state);
        step_bullets(&mut state, 1.0);
        step_bullets(&mut state, 1.0);
        assert!(!state.bullets[0].alive);
    }

    #[test]
    fn test_bullet_kills_enemy() {
        let mut state = empty_running();
        state.ammo = 2;
        state.player.facing = Facing::Left;
        shoot(&mut state);
        let muzzle = state.bullets[0].pos;
        assert!(muzzle.x < state.player.center().x);

        let mut enemy = Enemy::new(0.0, -1000.0, 1000.0, EnemyKind::Runner);
        enemy.pos = Vec2::new(muzzle.x - 70.0 - 20.0, muzzle.y - 20.0);
        state.enemies = vec![enemy];

        step_bullets(&mut state, 0.1);
        assert!(!state.enemies[0].alive);
        assert!(!state.bullets[0].alive);
        assert_eq!(state.score, SCORE_SHOT);
    }

    #[test]
    fn test_bullets_pass_through_platforms() {
        let mut state = empty_running();
        state.ammo = 1;
        shoot(&mut state);
        let y = state.bullets[0].pos.y;
        state.platforms.push(Rect::new(0.0, y - 50.0, 4000.0, 100.0));
        step_bullets(&mut state, 0.5);
        assert!(state.bullets[0].alive);
    }

    #[test]
    fn test_shoot_requires_ammo_and_play() {
        let mut state = empty_running();
        shoot(&mut state);
        assert!(state.bullets.is_empty());

        state.ammo = 3;
        state.phase = GamePhase::GameOver;
        shoot(&mut state);
        assert!(state.bullets.is_empty());
        assert_eq!(state.ammo, 3);
    }

    #[test]
    fn test_flag_advances_level() {
        // Scenario D
        let mut state = empty_running();
        state.player.pos = Vec2::new(state.flag.x, state.flag.y + 10.0);
        state.player.on_ground = true;
        tick(&mut state, &TickInput::default(), MAX_FRAME_DT);
        assert_eq!(state.level, 2);
        assert!(state.is_running());
        assert!(!state.is_won());

        // Frozen until next_level: the flag cannot fire twice
        tick(&mut state, &TickInput::default(), MAX_FRAME_DT);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_flag_on_last_level_wins() {
        // Scenario E
        let mut state = empty_running();
        state.level = MAX_LEVEL;
        state.score = 1000;
        state.player.pos = Vec2::new(state.flag.x, state.flag.y + 10.0);
        tick(&mut state, &TickInput::default(), MAX_FRAME_DT);
        assert!(state.is_won());
        assert!(!state.is_running());
        assert_eq!(state.score, 1500);
    }

    #[test]
    fn test_fall_out_of_world_costs_a_life() {
        let mut state = empty_running();
        state.platforms.clear();
        state.player.pos.y = FALL_OUT_Y + 10.0;
        tick(&mut state, &TickInput::default(), MAX_FRAME_DT);
        assert_eq!(state.lives, START_LIVES - 1);
        assert_eq!(state.player.pos.y, PLAYER_SPAWN_Y);
    }

    #[test]
    fn test_camera_follows_and_clamps() {
        let mut state = empty_running();
        state.player.pos.x = 100.0;
        update_camera(&mut state);
        assert_eq!(state.camera, Vec2::ZERO);

        state.player.pos.x = 2000.0;
        update_camera(&mut state);
        assert_eq!(state.camera.x, 2000.0 - CAMERA_LEAD);

        state.player.pos.x = state.world.width;
        update_camera(&mut state);
        assert_eq!(state.camera.x, state.world.width - VIEWPORT_WIDTH + CAMERA_MARGIN);
    }

    #[test]
    fn test_run_timer_grows_only_when_grounded_and_moving() {
        let mut state = empty_running();
        state.player.pos.y = 640.0 - PLAYER_HEIGHT;
        state.player.on_ground = true;
        let right = TickInput { axis: 1.0, ..Default::default() };
        tick(&mut state, &right, MAX_FRAME_DT);
        tick(&mut state, &right, MAX_FRAME_DT);
        let run_t = state.player.run_t;
        assert!(run_t > 0.0);

        tick(&mut state, &TickInput::default(), MAX_FRAME_DT);
        assert!(state.player.run_t < run_t);
    }

    #[test]
    fn test_levels_without_enemies_or_coins() {
        let mut state = empty_running();
        for _ in 0..30 {
            tick(&mut state, &TickInput { axis: 1.0, ..Default::default() }, MAX_FRAME_DT);
        }
        assert_eq!(state.score, 0);
        assert!(state.player.pos.x > PLAYER_SPAWN_X);
    }

    #[test]
    fn test_full_level_one_play_is_deterministic() {
        let script = |frame: usize| TickInput {
            axis: 1.0,
            jump: frame % 40 < 6,
            crouch: false,
        };
        let mut a = running();
        let mut b = running();
        for frame in 0..600 {
            tick(&mut a, &script(frame), 1.0 / 60.0);
            tick(&mut b, &script(frame), 1.0 / 60.0);
        }
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.level, b.level);
    }
}
