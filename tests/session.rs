use glam::Vec2;
use space_shooter::consts::*;
use space_shooter::sim::*;

fn playing(seed: u64) -> GameState {
    let mut state = GameState::with_seed(seed);
    tick(
        &mut state,
        &TickInput {
            confirm: true,
            ..Default::default()
        },
        SIM_DT,
    );
    assert_eq!(state.phase(), GamePhase::Playing);
    state
}

fn idle(state: &mut GameState) {
    tick(state, &TickInput::default(), SIM_DT);
}

fn drop_player_bullet(state: &mut GameState, pos: Vec2) {
    let bounds = state.bounds();
    state.bullets.push(Bullet::new(
        pos,
        Vec2::ZERO,
        PLAYER_BULLET_DAMAGE,
        BulletOwner::Player,
        bounds,
    ));
}

fn score(state: &GameState) -> u64 {
    state.player().map(|p| p.score).unwrap_or_default()
}

// ── Bullet × Enemy ───────────────────────────────────────────────────────────

#[test]
fn basic_enemy_dies_on_second_hit_and_scores_once() {
    let mut state = playing(7);
    state.spawn_enemy_at(EnemyKind::Basic, Vec2::new(200.0, 150.0));

    let pos = state.enemies[0].pos;
    drop_player_bullet(&mut state, pos);
    idle(&mut state);
    assert!(state.enemies[0].active);
    assert_eq!(state.enemies[0].health.current, 10);
    assert_eq!(score(&state), 0);

    let pos = state.enemies[0].pos;
    drop_player_bullet(&mut state, pos);
    idle(&mut state);
    assert!(!state.enemies[0].active);
    assert_eq!(score(&state), 10);
    assert!(state.active_particles().count() >= EXPLOSION_PARTICLES);

    // Third bullet lands where the enemy was; it is gone by now
    let pos = state.enemies[0].pos;
    drop_player_bullet(&mut state, pos);
    idle(&mut state);
    assert!(state.enemies.is_empty());
    assert_eq!(score(&state), 10);
    assert_eq!(state.player().unwrap().kills, 1);
    assert_eq!(state.active_bullets().count(), 1);
}

#[test]
fn simultaneous_hits_consume_only_what_is_needed() {
    let mut state = playing(8);
    state.spawn_enemy_at(EnemyKind::Basic, Vec2::new(300.0, 150.0));
    let pos = state.enemies[0].pos;
    for _ in 0..3 {
        drop_player_bullet(&mut state, pos);
    }

    idle(&mut state);
    assert!(!state.enemies[0].active);
    assert_eq!(score(&state), 10);
    // Two bullets spent, the third passes through the wreck
    assert_eq!(state.bullets.iter().filter(|b| b.active).count(), 1);
}

#[test]
fn tank_survives_volley() {
    let mut state = playing(9);
    state.spawn_enemy_at(EnemyKind::Tank, Vec2::new(300.0, 150.0));
    let pos = state.enemies[0].pos;
    for _ in 0..4 {
        drop_player_bullet(&mut state, pos);
    }
    idle(&mut state);
    assert!(state.enemies[0].active);
    assert_eq!(state.enemies[0].health.current, 10);
    assert_eq!(score(&state), 0);
}

// ── Player × Enemy ───────────────────────────────────────────────────────────

#[test]
fn ramming_costs_twenty_health_and_kills_enemy_same_tick() {
    let mut state = playing(10);
    let pos = state.player().unwrap().pos;
    state.spawn_enemy_at(EnemyKind::Basic, pos);

    idle(&mut state);
    assert_eq!(state.player().unwrap().health.current, PLAYER_MAX_HEALTH - 20);
    assert!(!state.enemies[0].active);
    assert_eq!(score(&state), 0, "ramming does not score");
    assert!(state.active_particles().count() >= EXPLOSION_PARTICLES);

    // Inactive enemy is never hit twice and is pruned next tick
    idle(&mut state);
    assert_eq!(state.player().unwrap().health.current, PLAYER_MAX_HEALTH - 20);
    assert!(state.enemies.is_empty());
}

#[test]
fn five_rams_end_the_session() {
    let mut state = playing(11);
    for _ in 0..5 {
        let pos = state.player().unwrap().pos;
        state.spawn_enemy_at(EnemyKind::Fast, pos);
        idle(&mut state);
    }
    assert_eq!(state.phase(), GamePhase::GameOver);
    assert_eq!(state.player().unwrap().health.current, 0);
}

// ── Exclusions ───────────────────────────────────────────────────────────────

#[test]
fn player_bullets_never_hit_the_player() {
    let mut state = playing(12);
    let pos = state.player().unwrap().pos;
    drop_player_bullet(&mut state, pos);

    idle(&mut state);
    assert_eq!(state.player().unwrap().health.current, PLAYER_MAX_HEALTH);
    assert!(state.bullets[0].active);
    assert!(state.collect_collisions().is_empty());
}

#[test]
fn enemies_pass_through_each_other() {
    let mut state = playing(13);
    state.spawn_enemy_at(EnemyKind::Basic, Vec2::new(100.0, 100.0));
    state.spawn_enemy_at(EnemyKind::Tank, Vec2::new(100.0, 100.0));
    idle(&mut state);
    assert_eq!(state.active_enemies().count(), 2);
}

// ── Pacing ───────────────────────────────────────────────────────────────────

#[test]
fn spawn_interval_halves_after_thirty_seconds() {
    let mut state = playing(14);
    state.player.as_mut().unwrap().health = Health::new(1_000_000);

    let ticks = (DIFFICULTY_RAMP_SECS / SIM_DT).round() as usize;
    for _ in 0..ticks {
        idle(&mut state);
    }

    assert_eq!(state.phase(), GamePhase::Playing);
    assert!((state.elapsed - 30.0).abs() < 1e-2, "elapsed {}", state.elapsed);
    assert!((state.difficulty - 2.0).abs() < 1e-3);
    assert!((state.spawn_interval - 1.0).abs() < 1e-3);
}

#[test]
fn restart_resets_pacing() {
    let mut state = playing(15);
    state.player.as_mut().unwrap().health = Health::new(1_000_000);
    for _ in 0..600 {
        idle(&mut state);
    }
    assert!(state.difficulty > 1.0);

    state.end_session();
    tick(
        &mut state,
        &TickInput {
            confirm: true,
            ..Default::default()
        },
        SIM_DT,
    );
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(state.difficulty, 1.0);
    assert_eq!(state.spawn_timer, 0.0);
    assert!(state.enemies.is_empty());
    assert!(state.bullets.is_empty());
    assert!(state.particles.is_empty());
}

// ── Invariants over a long autopilot run ─────────────────────────────────────

#[test]
fn autopilot_run_keeps_invariants() {
    let mut state = GameState::with_seed(2024);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    for _ in 0..(60 * 120) {
        tick(&mut state, &input, SIM_DT);

        if let Some(player) = state.player() {
            assert!(player.health.current >= 0);
            let r = player.radius;
            assert!(player.pos.x >= r && player.pos.x <= SCREEN_WIDTH - r);
            assert!(player.pos.y >= r && player.pos.y <= SCREEN_HEIGHT - r);
        }
        for pair in state.collect_collisions() {
            assert!(should_collide(pair.a.kind(), pair.b.kind()));
        }
    }

    assert!(state.high_scores.entries.len() <= space_shooter::highscores::MAX_HIGH_SCORES);
}
