//! Game state and core simulation types
//!
//! Everything the update step mutates lives here, owned by a single
//! [`GameState`]. The state is serializable and carries its own seeded
//! RNG, so a run is reproducible from `(config, seed)`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of a run
///
/// Idle -> Running -> {Paused <-> Running} -> {Victory | Defeat} -> Idle
/// (on reset). Victory and Defeat are terminal until an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed or reset, waiting for start
    Idle,
    /// Active gameplay
    Running,
    /// Update suspended; timers do not advance
    Paused,
    /// Kill goal reached and final boss destroyed
    Victory,
    /// Lives exhausted
    Defeat,
}

/// Player weapon variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Weapon {
    #[default]
    Single,
    Double,
    Rapid,
}

impl Weapon {
    pub fn label(&self) -> &'static str {
        match self {
            Weapon::Single => "Single",
            Weapon::Double => "Double",
            Weapon::Rapid => "Rapid",
        }
    }

    /// Reload period between shots (ms)
    pub fn reload_ms(&self) -> f32 {
        match self {
            Weapon::Single => RELOAD_SINGLE_MS,
            Weapon::Double => RELOAD_DOUBLE_MS,
            Weapon::Rapid => RELOAD_RAPID_MS,
        }
    }
}

/// The player's ship
///
/// Created once per run and reset in place, never destroyed. The ship
/// moves only horizontally along a fixed baseline row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Left edge
    pub x: f32,
    /// Vertical center line the ship rides on
    pub baseline_y: f32,
    pub size: Vec2,
    /// Countdown until the next shot is allowed (ms)
    pub reload_ms: f32,
    /// Reload period of the current weapon (ms)
    pub reload_max_ms: f32,
    pub weapon: Weapon,
    pub shield: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYFIELD_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
            baseline_y: PLAYFIELD_HEIGHT - PLAYER_BASELINE_OFFSET,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            reload_ms: 0.0,
            reload_max_ms: RELOAD_SINGLE_MS,
            weapon: Weapon::Single,
            shield: false,
        }
    }
}

impl Player {
    /// Top edge of the ship's bounding box
    pub fn top(&self) -> f32 {
        self.baseline_y - self.size.y / 2.0
    }

    /// Center of the ship's bounding box
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.size.x / 2.0, self.baseline_y)
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: Vec2::new(self.x, self.top()),
            size: self.size,
        }
    }

    /// Switch weapons and take over its reload period
    pub fn arm(&mut self, weapon: Weapon) {
        self.weapon = weapon;
        self.reload_max_ms = weapon.reload_ms();
    }
}

/// Enemy variants, in ascending reward order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Scout,
    Fighter,
    Kamikaze,
}

impl EnemyKind {
    /// Score awarded when destroyed
    pub fn reward(&self) -> f64 {
        match self {
            EnemyKind::Scout => SCORE_SCOUT,
            EnemyKind::Fighter => SCORE_FIGHTER,
            EnemyKind::Kamikaze => SCORE_KAMIKAZE,
        }
    }

    /// Palette index for the renderer and for explosion particles
    pub fn color(&self) -> u32 {
        match self {
            EnemyKind::Scout => crate::palette::SCOUT_RED,
            EnemyKind::Fighter => crate::palette::FIGHTER_AMBER,
            EnemyKind::Kamikaze => crate::palette::KAMIKAZE_ROSE,
        }
    }
}

/// An enemy ship (top-left anchored)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Remaining hit points; the enemy is removed the frame this reaches 0
    pub hp: i32,
    pub kind: EnemyKind,
    /// Palette index, fixed at spawn from the kind
    pub color: u32,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The singleton boss
///
/// At most one exists at a time; its existence implies
/// `GameState::boss_active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    /// Horizontal point the boss eases toward, retargeted at random
    pub target_x: f32,
    pub size: Vec2,
    pub hp: i32,
    /// Spawn-time hit points, for the health-bar ratio
    pub max_hp: i32,
    /// Final boss variant
    pub mega: bool,
}

impl Boss {
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Remaining health as a 0..=1 ratio for the health bar
    pub fn hp_ratio(&self) -> f32 {
        (self.hp.max(0) as f32 / self.max_hp as f32).clamp(0.0, 1.0)
    }
}

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub owner: BulletOwner,
}

impl Bullet {
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Timed buff variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerKind {
    Rapid,
    Shield,
    Double,
}

impl PowerKind {
    pub fn label(&self) -> &'static str {
        match self {
            PowerKind::Rapid => "Rapid",
            PowerKind::Shield => "Shield",
            PowerKind::Double => "Double",
        }
    }

    /// HUD icon for the buff
    pub fn icon(&self) -> &'static str {
        match self {
            PowerKind::Rapid => "⚡",
            PowerKind::Shield => "🛡️",
            PowerKind::Double => "2️⃣",
        }
    }
}

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    /// Downward speed (px/s)
    pub fall_speed: f32,
    pub size: Vec2,
    pub kind: PowerKind,
}

impl PowerUp {
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The single currently-in-effect timed buff
///
/// Picking up a new power-up overwrites both kind and deadline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePower {
    pub kind: PowerKind,
    /// Absolute deadline on the simulation clock (ms)
    pub expires_at_ms: f64,
}

/// A cosmetic explosion/pickup particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Palette index for the renderer
    pub color: u32,
    pub radius: f32,
    pub age_ms: f32,
    pub life_ms: f32,
    /// Rendered with a glow halo
    pub glow: bool,
}

/// Discrete notifications for the audio/FX collaborators
///
/// Queued during a tick and readable until the next tick runs. The core
/// never plays sound itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    LaserFired,
    Explosion { x: f32, y: f32 },
    PowerUpCollected { kind: PowerKind },
    LifeLost,
    BossSpawned { mega: bool },
    BossDefeated { mega: bool },
    Victory,
    Defeat,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; every probabilistic draw samples this
    pub rng: Pcg32,
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Accumulated score; floored for display
    pub score: f64,
    pub lives: i32,
    pub kills: u32,
    /// Difficulty counter, advanced on boss spawn and regular-boss defeat
    pub wave: u32,
    /// Current enemy spawn cadence (ms), recomputed each tick
    pub spawn_interval_ms: f32,
    pub spawn_timer_ms: f32,
    /// Simulation clock (ms accumulated from dt); power-up deadlines are
    /// absolute on this clock
    pub clock_ms: f64,
    /// Kill count at which boss logic last fired, so a boss triggers at
    /// most once per interval multiple
    pub last_boss_kills: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub boss: Option<Boss>,
    pub boss_active: bool,
    pub active_power: Option<ActivePower>,
    /// Events from the most recent tick (not persisted)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::Idle,
            score: 0.0,
            lives: 3,
            kills: 0,
            wave: 1,
            spawn_interval_ms: SPAWN_INTERVAL_BASE_MS,
            spawn_timer_ms: 0.0,
            clock_ms: 0.0,
            last_boss_kills: 0,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            boss: None,
            boss_active: false,
            active_power: None,
            events: Vec::new(),
        }
    }

    /// Reinitialize counters, collections and flags to run defaults
    ///
    /// The RNG stream and clock position are kept; reproducibility is per
    /// construction seed, not per reset.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
        self.score = 0.0;
        self.lives = 3;
        self.kills = 0;
        self.wave = 1;
        self.spawn_interval_ms = SPAWN_INTERVAL_BASE_MS;
        self.spawn_timer_ms = 0.0;
        self.last_boss_kills = 0;
        self.player = Player::default();
        self.bullets.clear();
        self.enemies.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.boss = None;
        self.boss_active = false;
        self.active_power = None;
        self.events.clear();
    }

    /// Whether the run has reached a terminal phase
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::Victory | GamePhase::Defeat)
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = GameState::new(GameConfig::default(), 7);
        state.phase = GamePhase::Running;
        state.score = 1234.5;
        state.lives = 1;
        state.kills = 23;
        state.wave = 4;
        state.player.weapon = Weapon::Rapid;
        state.player.shield = true;
        state.bullets.push(Bullet {
            pos: Vec2::ZERO,
            vel: Vec2::new(0.0, -720.0),
            size: Vec2::new(6.0, 12.0),
            owner: BulletOwner::Player,
        });
        state.boss_active = true;
        state.active_power = Some(ActivePower {
            kind: PowerKind::Shield,
            expires_at_ms: 99_999.0,
        });

        state.reset();

        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.kills, 0);
        assert_eq!(state.wave, 1);
        assert_eq!(state.player.weapon, Weapon::Single);
        assert_eq!(state.player.reload_max_ms, RELOAD_SINGLE_MS);
        assert!(!state.player.shield);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert!(state.power_ups.is_empty());
        assert!(state.particles.is_empty());
        assert!(state.boss.is_none());
        assert!(!state.boss_active);
        assert!(state.active_power.is_none());
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_same_seed_same_rng_stream() {
        use rand::Rng;

        let mut a = GameState::new(GameConfig::default(), 42);
        let mut b = GameState::new(GameConfig::default(), 42);
        for _ in 0..32 {
            let x: f32 = a.rng.random_range(0.0..1.0);
            let y: f32 = b.rng.random_range(0.0..1.0);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = GameState::new(GameConfig::new(20, 5), 99);
        state.phase = GamePhase::Running;
        state.kills = 7;
        state.push_event(GameEvent::LaserFired);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(back.phase, GamePhase::Running);
        assert_eq!(back.kills, 7);
        assert_eq!(back.config, state.config);
        // Transient event queue is not persisted
        assert!(back.events.is_empty());
    }
}
