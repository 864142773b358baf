//! Space Shooter - top-down arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (entities, spawning, collisions, session state)
//! - `settings`: Playfield and session tunables loaded from JSON
//! - `highscores`: In-memory leaderboard of finished sessions

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 300.0;
    pub const PLAYER_FIRE_RATE: f32 = 0.15;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_BULLET_SPEED: f32 = 500.0;
    pub const PLAYER_BULLET_DAMAGE: i32 = 10;
    /// Distance above the player's center where new bullets appear
    pub const PLAYER_MUZZLE_OFFSET: f32 = 20.0;
    /// Player spawns this far above the bottom edge
    pub const PLAYER_SPAWN_INSET: f32 = 100.0;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const BULLET_MAX_LIFE: f32 = 3.0;
    /// Bullets survive this far outside the screen before culling
    pub const BULLET_CULL_MARGIN: f32 = 20.0;

    /// Enemies survive this far outside the screen before culling
    pub const ENEMY_CULL_MARGIN: f32 = 50.0;
    /// Enemies spawn this far above the top edge
    pub const ENEMY_SPAWN_Y: f32 = -30.0;
    /// Lateral speed of zig-zag movers (u/s)
    pub const ZIGZAG_LATERAL_SPEED: f32 = 150.0;
    /// Seconds between zig-zag direction flips
    pub const ZIGZAG_FLIP_SECS: f32 = 0.5;
    /// Peak lateral speed of sine movers (u/s)
    pub const SINE_AMPLITUDE: f32 = 100.0;

    /// Per-tick velocity multiplier applied to particles
    pub const PARTICLE_DRAG: f32 = 0.98;
    /// Trail particles move against their parent at this fraction of its velocity
    pub const TRAIL_VELOCITY_SCALE: f32 = -0.3;

    /// Session pacing defaults
    pub const BASE_SPAWN_INTERVAL: f32 = 2.0;
    pub const DIFFICULTY_RAMP_SECS: f32 = 30.0;
    pub const EXPLOSION_PARTICLES: usize = 20;
    /// Health lost by the player on contact with an enemy
    pub const CONTACT_DAMAGE: i32 = 20;

    /// Background stars
    pub const STAR_COUNT: usize = 100;
}

/// RGBA color hint handed to the renderer
pub type Rgba = [u8; 4];
