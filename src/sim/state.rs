//! Session state and the read-only views handed to the renderer
//!
//! `GameState` exclusively owns the player and every entity collection. The
//! collision system only ever sees per-frame copies built by
//! `GameState::collect_collisions`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, BulletOwner};
use super::collision::{CollisionPair, CollisionSystem, EntityRef};
use super::enemy::{Enemy, EnemyKind};
use super::particle::{Particle, spawn_explosion, spawn_trail};
use super::phase::{GamePhase, StateManager};
use super::player::Player;
use super::starfield::{Star, Starfield};
use crate::highscores::{HighScoreEntry, HighScores};
use crate::settings::Settings;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) phase: StateManager,
    /// Absent until the first session starts
    pub player: Option<Player>,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub starfield: Starfield,
    /// Seconds since the last enemy spawn
    pub spawn_timer: f32,
    /// Seconds between enemy spawns at the current difficulty
    pub spawn_interval: f32,
    pub difficulty: f32,
    /// Seconds of play in the current session
    pub elapsed: f32,
    /// Simulation tick counter for the current session
    pub time_ticks: u64,
    pub high_scores: HighScores,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);
        let starfield = Starfield::new(&mut rng, settings.star_count, settings.bounds());
        log::info!(
            "Simulation ready: {}x{} playfield, seed {}",
            settings.screen_width,
            settings.screen_height,
            seed
        );

        Self {
            spawn_interval: settings.base_spawn_interval,
            settings,
            seed,
            rng,
            phase: StateManager::new(),
            player: None,
            enemies: Vec::with_capacity(50),
            bullets: Vec::with_capacity(100),
            particles: Vec::with_capacity(200),
            starfield,
            spawn_timer: 0.0,
            difficulty: 1.0,
            elapsed: 0.0,
            time_ticks: 0,
            high_scores: HighScores::new(),
        }
    }

    /// Default settings with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Settings::with_seed(seed))
    }

    pub fn bounds(&self) -> Vec2 {
        self.settings.bounds()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase.current()
    }

    pub fn previous_phase(&self) -> GamePhase {
        self.phase.previous()
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn active_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| e.active)
    }

    pub fn active_bullets(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.active)
    }

    pub fn active_particles(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|p| p.active)
    }

    /// Begin a fresh session: new player, empty collections, reset pacing
    pub fn start_session(&mut self) {
        self.player = Some(Player::spawn(self.bounds()));
        self.enemies.clear();
        self.bullets.clear();
        self.particles.clear();
        self.spawn_timer = 0.0;
        self.difficulty = 1.0;
        self.spawn_interval = self.settings.base_spawn_interval;
        self.elapsed = 0.0;
        self.time_ticks = 0;
        self.phase.set(GamePhase::Playing);
        log::info!("Session started");
    }

    /// Leave the session for the menu
    pub fn abandon_session(&mut self) {
        self.phase.set(GamePhase::Menu);
        log::info!("Session abandoned after {:.1}s", self.elapsed);
    }

    /// Player died: record the run and switch to GameOver
    pub fn end_session(&mut self) {
        self.phase.set(GamePhase::GameOver);
        let Some(player) = self.player.as_ref() else {
            return;
        };
        let rank = self.high_scores.add_score(HighScoreEntry {
            score: player.score,
            kills: player.kills,
            survived_secs: self.elapsed,
        });
        match rank {
            Some(rank) => log::info!(
                "Game over: score {} ({} kills, {:.1}s) - rank #{}",
                player.score,
                player.kills,
                self.elapsed,
                rank
            ),
            None => log::info!(
                "Game over: score {} ({} kills, {:.1}s)",
                player.score,
                player.kills,
                self.elapsed
            ),
        }
    }

    pub fn spawn_enemy(&mut self) {
        let bounds = self.bounds();
        let enemy = Enemy::spawn_random(&mut self.rng, bounds);
        log::debug!("Spawned {:?} at x={:.0}", enemy.kind, enemy.pos.x);
        self.enemies.push(enemy);
    }

    /// Spawn an enemy of a given kind at a given position
    pub fn spawn_enemy_at(&mut self, kind: EnemyKind, pos: Vec2) -> usize {
        self.enemies.push(Enemy::new(kind, pos, self.bounds()));
        self.enemies.len() - 1
    }

    /// Fire the player's weapon: bullet above the ship plus an exhaust trail
    pub fn fire_player_bullet(&mut self) {
        let bounds = self.bounds();
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let vel = Vec2::new(0.0, -player.weapon.bullet_speed);
        let bullet = Bullet::new(
            player.muzzle(),
            vel,
            player.weapon.damage,
            BulletOwner::Player,
            bounds,
        );
        let origin = player.pos;
        player.fire_weapon();

        log::trace!("Player fired from {origin}");
        self.bullets.push(bullet);
        self.particles.push(spawn_trail(&mut self.rng, origin, vel));
    }

    pub fn spawn_explosion(&mut self, pos: Vec2) {
        let count = self.settings.explosion_particles;
        self.particles
            .extend(spawn_explosion(&mut self.rng, pos, count));
    }

    /// Drop every entity that went inactive
    pub fn prune(&mut self) {
        self.enemies.retain(|e| e.active);
        self.bullets.retain(|b| b.active);
        self.particles.retain(|p| p.active);
    }

    /// Overlapping pairs among the player, active enemies and active bullets.
    ///
    /// Particles are left out entirely since the policy never lets them collide.
    pub fn collect_collisions(&self) -> Vec<CollisionPair> {
        let mut system = CollisionSystem::with_capacity(1 + self.enemies.len() + self.bullets.len());

        if let Some(player) = &self.player {
            system.add_entity(EntityRef::Player, player);
        }
        for (i, enemy) in self.enemies.iter().enumerate() {
            if enemy.active {
                system.add_entity(EntityRef::Enemy(i), enemy);
            }
        }
        for (i, bullet) in self.bullets.iter().enumerate() {
            if bullet.active {
                system.add_entity(EntityRef::Bullet(i), bullet);
            }
        }

        system.check_collisions()
    }

    /// Difficulty rises linearly with play time; spawn interval shrinks inversely
    pub fn update_difficulty(&mut self) {
        self.difficulty = 1.0 + self.elapsed / self.settings.difficulty_ramp_secs;
        self.spawn_interval = self.settings.base_spawn_interval / self.difficulty;
    }

    /// Serializable view of everything the renderer draws
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            elapsed: self.elapsed,
            difficulty: self.difficulty,
            player: self.player.as_ref().map(|p| PlayerView {
                pos: p.pos,
                radius: p.radius,
                size: p.size,
                health: p.health.current,
                max_health: p.health.max,
                score: p.score,
                kills: p.kills,
            }),
            enemies: self
                .active_enemies()
                .map(|e| EnemyView {
                    kind: e.kind,
                    pos: e.pos,
                    radius: e.radius,
                    size: e.stats().size,
                    color: e.stats().color,
                    health: e.health.fraction(),
                })
                .collect(),
            bullets: self
                .active_bullets()
                .map(|b| BulletView {
                    owner: b.owner,
                    pos: b.pos,
                    radius: b.radius,
                    size: b.size,
                    color: b.owner.color(),
                })
                .collect(),
            particles: self
                .active_particles()
                .map(|p| ParticleView {
                    pos: p.pos,
                    size: p.size,
                    color: p.color,
                    life: p.life_fraction(),
                    fade: p.fade,
                })
                .collect(),
            stars: self.starfield.stars.clone(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Player fields the HUD and renderer need
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub score: u64,
    pub kills: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub radius: f32,
    pub size: f32,
    pub color: crate::Rgba,
    /// Remaining health fraction
    pub health: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub owner: BulletOwner,
    pub pos: Vec2,
    pub radius: f32,
    pub size: Vec2,
    pub color: crate::Rgba,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub size: f32,
    pub color: crate::Rgba,
    /// Remaining lifetime fraction
    pub life: f32,
    pub fade: bool,
}

/// Read-only frame snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub elapsed: f32,
    pub difficulty: f32,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub particles: Vec<ParticleView>,
    pub stars: Vec<Star>,
}
