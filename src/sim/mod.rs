//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed input sample per tick, elapsed time supplied by the caller
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, overlaps};
pub use spawn::{spawn_boss, spawn_enemy, spawn_particles, spawn_power_up};
pub use state::{
    ActivePower, Boss, Bullet, BulletOwner, Enemy, EnemyKind, GameEvent, GamePhase, GameState,
    Particle, Player, PowerKind, PowerUp, Weapon,
};
pub use tick::{TickInput, tick};
