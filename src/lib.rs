//! Galaxy Defender - a wave-based arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `hud`: Read-only HUD snapshot projection
//! - `game`: Lifecycle controller (start/pause/resume/restart)
//! - `config`: Per-instance tuning (kill goal, boss interval)
//!
//! Rendering, audio synthesis and raw input handling live outside this
//! crate. Collaborators feed each frame a pointer position plus a
//! fire-held flag, and read back the state snapshot and queued
//! [`sim::GameEvent`]s after the tick.

pub mod config;
pub mod game;
pub mod hud;
pub mod sim;

pub use config::GameConfig;
pub use game::Game;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in simulation units
    pub const PLAYFIELD_WIDTH: f32 = 960.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Cap on per-frame elapsed time (prevents collision tunneling on stalls)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Player ship
    pub const PLAYER_WIDTH: f32 = 44.0;
    pub const PLAYER_HEIGHT: f32 = 46.0;
    /// Distance of the ship's baseline row from the bottom edge
    pub const PLAYER_BASELINE_OFFSET: f32 = 84.0;
    /// Horizontal clamp margin for the ship
    pub const PLAYER_MARGIN: f32 = 12.0;
    /// Easing rate toward the pointer (blend = clamp(rate * dt, 0, 1))
    pub const PLAYER_EASE_RATE: f32 = 20.0;

    /// Weapon reload periods (ms)
    pub const RELOAD_SINGLE_MS: f32 = 220.0;
    pub const RELOAD_RAPID_MS: f32 = 90.0;
    pub const RELOAD_DOUBLE_MS: f32 = 260.0;

    /// Enemy spawn cadence (ms)
    pub const SPAWN_INTERVAL_BASE_MS: f32 = 1100.0;
    pub const SPAWN_INTERVAL_MIN_MS: f32 = 600.0;
    pub const SPAWN_INTERVAL_MAX_MS: f32 = 1400.0;
    /// Interval shrink per kill and per wave (ms)
    pub const SPAWN_DECAY_PER_KILL_MS: f32 = 6.0;
    pub const SPAWN_DECAY_PER_WAVE_MS: f32 = 20.0;

    /// Side-wall margin at which enemies reflect
    pub const WALL_MARGIN: f32 = 8.0;
    /// Entities this far below the playfield despawn silently
    pub const ENEMY_DESPAWN_MARGIN: f32 = 80.0;
    pub const POWER_UP_DESPAWN_MARGIN: f32 = 40.0;
    /// Bullets are culled outside this vertical band
    pub const BULLET_CULL_TOP: f32 = -40.0;
    pub const BULLET_CULL_MARGIN: f32 = 80.0;

    /// Power-ups
    pub const POWER_UP_SIZE: f32 = 28.0;
    pub const POWER_UP_FALL_SPEED: f32 = 70.0;
    pub const POWER_UP_DURATION_MS: f64 = 10_000.0;
    /// Drop chance on enemy death / ambient spawn chance per enemy spawn
    pub const POWER_UP_DROP_CHANCE: f64 = 0.18;
    pub const POWER_UP_AMBIENT_CHANCE: f64 = 0.08;

    /// Boss behavior
    pub const BOSS_DESCEND_SPEED: f32 = 80.0;
    /// Vertical depth at which the boss stops descending
    pub const BOSS_HOVER_Y: f32 = 24.0;
    /// Horizontal easing rate toward the retarget point
    pub const BOSS_TRACK_RATE: f32 = 1.8;
    pub const BOSS_RETARGET_CHANCE: f64 = 0.05;
    pub const BOSS_FIRE_CHANCE: f64 = 0.02;
    /// Horizontal margin for boss retarget points
    pub const BOSS_MARGIN: f32 = 40.0;

    /// Score rewards
    pub const SCORE_SCOUT: f64 = 25.0;
    pub const SCORE_FIGHTER: f64 = 45.0;
    pub const SCORE_KAMIKAZE: f64 = 75.0;
    pub const SCORE_BOSS: f64 = 400.0;
    pub const SCORE_MEGA_BOSS: f64 = 1500.0;

    /// Downward acceleration applied to particles (px/s^2)
    pub const PARTICLE_GRAVITY: f32 = 900.0;
}

/// Palette indices for the renderer's color lookup
pub mod palette {
    pub const WHITE: u32 = 0;
    pub const SCOUT_RED: u32 = 1;
    pub const FIGHTER_AMBER: u32 = 2;
    pub const KAMIKAZE_ROSE: u32 = 3;
    pub const BOSS_VIOLET: u32 = 4;
    pub const PICKUP_AQUA: u32 = 5;
    pub const SPARK_GOLD: u32 = 6;
}
