//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by exactly one step.

use super::bullet::BulletOwner;
use super::collision::{CollisionPair, EntityRef};
use super::phase::GamePhase;
use super::state::GameState;
use crate::consts::PLAYER_SPAWN_INSET;

/// Input intent for a single tick.
///
/// `pause`, `escape` and `confirm` are expected to be edge-triggered by the
/// caller (true only on the frame the key went down).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Leave the session / return to menu
    pub escape: bool,
    /// Start or restart a session
    pub confirm: bool,
    /// Demo mode - the simulation drives its own input
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut input = input.clone();
    if input.autopilot {
        steer_autopilot(state, &mut input);
    }
    let input = &input;

    match state.phase() {
        GamePhase::Menu => {
            if input.confirm {
                state.start_session();
                return;
            }
            state.starfield.update(&mut state.rng, dt);
        }

        GamePhase::Playing => {
            if input.pause {
                state.phase.toggle_pause();
                log::debug!("Paused at {:.2}s", state.elapsed);
                return;
            }
            if input.escape {
                state.abandon_session();
                return;
            }
            update_playing(state, input, dt);
        }

        GamePhase::Paused => {
            // Frozen: only the pause toggle gets through
            if input.pause {
                state.phase.toggle_pause();
                log::debug!("Resumed at {:.2}s", state.elapsed);
            }
        }

        GamePhase::GameOver => {
            if input.confirm {
                state.start_session();
                return;
            }
            if input.escape {
                state.phase.set(GamePhase::Menu);
                return;
            }
            // Let the last explosions play out
            state.starfield.update(&mut state.rng, dt);
            for particle in &mut state.particles {
                particle.update(dt);
            }
            state.particles.retain(|p| p.active);
        }
    }
}

fn update_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    // Derived from the tick count so the clock does not drift over long sessions
    state.time_ticks += 1;
    state.elapsed = state.time_ticks as f32 * dt;

    state.starfield.update(&mut state.rng, dt);

    let wants_to_fire = match state.player.as_mut() {
        Some(player) => {
            player.set_input(input);
            player.update(dt);
            player.wants_to_fire()
        }
        None => {
            log::warn!("Playing without a player; starting a fresh session");
            state.start_session();
            return;
        }
    };
    if wants_to_fire {
        state.fire_player_bullet();
    }

    // Update pass, then a single prune pass
    for enemy in &mut state.enemies {
        enemy.update(dt);
    }
    for bullet in &mut state.bullets {
        bullet.update(dt);
    }
    for particle in &mut state.particles {
        particle.update(dt);
    }
    state.prune();

    state.spawn_timer += dt;
    if state.spawn_timer >= state.spawn_interval {
        state.spawn_timer = 0.0;
        state.spawn_enemy();
    }

    for pair in state.collect_collisions() {
        resolve_collision(state, pair);
    }

    if state.player.as_ref().is_some_and(|p| p.health.is_dead()) {
        state.end_session();
    }

    state.update_difficulty();
}

/// Single resolution table keyed by kind pair
fn resolve_collision(state: &mut GameState, pair: CollisionPair) {
    match pair.ordered() {
        (EntityRef::Player, EntityRef::Enemy(enemy)) => player_hits_enemy(state, enemy),
        (EntityRef::Enemy(enemy), EntityRef::Bullet(bullet)) => bullet_hits_enemy(state, bullet, enemy),
        // Every other eligible pair is inert
        _ => {}
    }
}

fn player_hits_enemy(state: &mut GameState, enemy_idx: usize) {
    let Some(enemy) = state.enemies.get_mut(enemy_idx) else {
        return;
    };
    if !enemy.active {
        return;
    }
    enemy.active = false;
    let pos = enemy.pos;

    if let Some(player) = state.player.as_mut() {
        player.health.damage(state.settings.contact_damage);
        log::debug!("Player rammed, health {}", player.health.current);
    }
    state.spawn_explosion(pos);
}

fn bullet_hits_enemy(state: &mut GameState, bullet_idx: usize, enemy_idx: usize) {
    let (Some(bullet), Some(enemy)) = (
        state.bullets.get_mut(bullet_idx),
        state.enemies.get_mut(enemy_idx),
    ) else {
        return;
    };
    // Either side may already have been consumed by an earlier pair this tick
    if !bullet.active || !enemy.active {
        return;
    }

    match bullet.owner {
        BulletOwner::Player => {
            bullet.active = false;
            if !enemy.take_damage(bullet.damage) {
                return;
            }
            let (pos, kind, value) = (enemy.pos, enemy.kind, enemy.score_value);
            if let Some(player) = state.player.as_mut() {
                player.add_score(value);
                player.kills += 1;
            }
            log::debug!("{kind:?} destroyed at {pos}, +{value}");
            state.spawn_explosion(pos);
        }
        // Enemy fire passes through other enemies; nothing spawns it yet
        BulletOwner::Enemy => {}
    }
}

/// Distance (u) inside which the autopilot considers itself lined up
const AUTOPILOT_DEADZONE: f32 = 6.0;
/// Horizontal window in which the autopilot opens fire
const AUTOPILOT_FIRE_WINDOW: f32 = 30.0;
/// Enemies closer than this make the autopilot sidestep
const AUTOPILOT_DODGE_RADIUS: f32 = 90.0;

/// Synthesize intent: chase the lowest enemy above the ship, hold the home
/// row, sidestep anything about to ram us
fn steer_autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase() {
        GamePhase::Menu | GamePhase::GameOver => input.confirm = true,
        GamePhase::Paused => {}
        GamePhase::Playing => {
            let Some(player) = state.player() else {
                return;
            };

            input.left = false;
            input.right = false;
            input.fire = false;

            let target = state
                .active_enemies()
                .filter(|e| e.pos.y < player.pos.y)
                .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
            if let Some(enemy) = target {
                let dx = enemy.pos.x - player.pos.x;
                input.left = dx < -AUTOPILOT_DEADZONE;
                input.right = dx > AUTOPILOT_DEADZONE;
                input.fire = dx.abs() < AUTOPILOT_FIRE_WINDOW;
            }

            let threat = state
                .active_enemies()
                .filter(|e| e.pos.distance_squared(player.pos) < AUTOPILOT_DODGE_RADIUS.powi(2))
                .min_by(|a, b| {
                    a.pos
                        .distance_squared(player.pos)
                        .total_cmp(&b.pos.distance_squared(player.pos))
                });
            if let Some(enemy) = threat {
                // Step away; toward the open side when directly overhead
                let away_left = enemy.pos.x > player.pos.x
                    || (enemy.pos.x == player.pos.x && player.pos.x > state.settings.screen_width / 2.0);
                input.left = away_left;
                input.right = !away_left;
            }

            let home_y = state.settings.screen_height - PLAYER_SPAWN_INSET;
            input.up = player.pos.y > home_y + AUTOPILOT_DEADZONE;
            input.down = player.pos.y < home_y - AUTOPILOT_DEADZONE;
        }
    }
}
