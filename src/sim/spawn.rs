//! Entity factories
//!
//! All spawning goes through here so wave scaling and drop odds live in
//! one place. Factories draw from the state's own RNG; nothing samples a
//! global generator.

use glam::Vec2;
use rand::Rng;

use super::state::{
    Boss, Bullet, BulletOwner, Enemy, EnemyKind, GameEvent, GameState, Particle, PowerKind,
    PowerUp, Weapon,
};
use crate::consts::*;

/// Spawn one enemy above the visible area, with stats scaled by progress.
///
/// Variant selection: scout below 0.55, fighter below 0.90, kamikaze
/// otherwise. The difficulty factor multiplies both velocity components.
pub fn spawn_enemy(state: &mut GameState) {
    let roll: f32 = state.rng.random();
    let x = state.rng.random_range(40.0..PLAYFIELD_WIDTH - 80.0);
    let difficulty = 1.0 + (state.wave - 1) as f32 * 0.09 + state.kills as f32 * 0.005;

    let enemy = if roll < 0.55 {
        Enemy {
            pos: Vec2::new(x, -40.0),
            vel: Vec2::new(
                state.rng.random_range(-24.0..24.0) * difficulty,
                state.rng.random_range(60.0..110.0) * difficulty,
            ),
            size: Vec2::splat(34.0),
            hp: 1,
            kind: EnemyKind::Scout,
            color: EnemyKind::Scout.color(),
        }
    } else if roll < 0.90 {
        Enemy {
            pos: Vec2::new(x, -60.0),
            vel: Vec2::new(
                state.rng.random_range(-36.0..36.0) * difficulty,
                state.rng.random_range(45.0..85.0) * difficulty,
            ),
            size: Vec2::splat(46.0),
            hp: 2 + (state.wave / 6) as i32,
            kind: EnemyKind::Fighter,
            color: EnemyKind::Fighter.color(),
        }
    } else {
        // Kamikaze: no drift, dives straight down, fast
        Enemy {
            pos: Vec2::new(x, -80.0),
            vel: Vec2::new(0.0, state.rng.random_range(90.0..150.0) * difficulty),
            size: Vec2::splat(56.0),
            hp: 3 + (state.wave / 4) as i32,
            kind: EnemyKind::Kamikaze,
            color: EnemyKind::Kamikaze.color(),
        }
    };
    state.enemies.push(enemy);
}

/// Spawn the boss, centered above the playfield.
///
/// The wave counter advances on appearance; a regular boss's defeat
/// advances it a second time.
pub fn spawn_boss(state: &mut GameState, mega: bool) {
    let size = if mega {
        Vec2::new(210.0, 140.0)
    } else {
        Vec2::new(160.0, 110.0)
    };
    let hp = if mega {
        120 + state.wave as i32 * 10
    } else {
        40 + state.wave as i32 * 5
    };
    let x = PLAYFIELD_WIDTH / 2.0 - size.x / 2.0;
    let y = if mega { -220.0 } else { -180.0 };

    state.boss = Some(Boss {
        pos: Vec2::new(x, y),
        target_x: x,
        size,
        hp,
        max_hp: hp,
        mega,
    });
    state.boss_active = true;
    state.wave += 1;
    state.push_event(GameEvent::BossSpawned { mega });
    log::info!(
        "boss spawned: mega={mega} hp={hp}, wave now {}",
        state.wave
    );
}

/// Spawn a power-up at the given point, kind picked uniformly
pub fn spawn_power_up(state: &mut GameState, x: f32, y: f32) {
    let kind = match state.rng.random_range(0..3u32) {
        0 => PowerKind::Rapid,
        1 => PowerKind::Shield,
        _ => PowerKind::Double,
    };
    state.power_ups.push(PowerUp {
        pos: Vec2::new(x, y),
        fall_speed: POWER_UP_FALL_SPEED,
        size: Vec2::splat(POWER_UP_SIZE),
        kind,
    });
}

/// Emit `count` particles from a point in a randomized cone
///
/// `upward` biases the burst toward the top of the screen (explosions);
/// otherwise the scatter is omnidirectional (absorbs, boss bursts).
pub fn spawn_particles(
    state: &mut GameState,
    origin: Vec2,
    count: u32,
    color: u32,
    spread: f32,
    upward: bool,
) {
    for _ in 0..count {
        let vx = state.rng.random_range(-spread..spread) * 0.01;
        let vy = if upward {
            state.rng.random_range(-spread * 1.4..-40.0)
        } else {
            state.rng.random_range(-80.0..80.0)
        } * 0.01;
        let particle = Particle {
            pos: origin,
            vel: Vec2::new(vx, vy),
            color,
            radius: state.rng.random_range(1.2..3.6),
            age_ms: 0.0,
            life_ms: state.rng.random_range(300.0..1200.0),
            glow: state.rng.random_bool(0.65),
        };
        state.particles.push(particle);
    }
}

/// Fire from the player's nose per the current weapon
pub fn fire_player_shot(state: &mut GameState) {
    let cx = state.player.x + state.player.size.x / 2.0;
    let muzzle_y = state.player.top() - 6.0;

    match state.player.weapon {
        Weapon::Single => {
            state.bullets.push(player_bullet(cx, muzzle_y, -720.0, 6.0, 12.0));
        }
        Weapon::Double => {
            state
                .bullets
                .push(player_bullet(cx - 10.0, muzzle_y, -720.0, 5.0, 12.0));
            state
                .bullets
                .push(player_bullet(cx + 10.0, muzzle_y, -720.0, 5.0, 12.0));
        }
        Weapon::Rapid => {
            state
                .bullets
                .push(player_bullet(cx, muzzle_y, -1100.0, 4.0, 10.0));
        }
    }
    state.push_event(GameEvent::LaserFired);
}

fn player_bullet(center_x: f32, y: f32, vy: f32, w: f32, h: f32) -> Bullet {
    Bullet {
        pos: Vec2::new(center_x - w / 2.0, y),
        vel: Vec2::new(0.0, vy),
        size: Vec2::new(w, h),
        owner: BulletOwner::Player,
    }
}

/// Fire a boss bullet downward with random horizontal drift
pub fn spawn_boss_bullet(state: &mut GameState, muzzle: Vec2) {
    let vx = state.rng.random_range(-160.0..160.0);
    state.bullets.push(Bullet {
        pos: Vec2::new(muzzle.x - 4.0, muzzle.y),
        vel: Vec2::new(vx, 260.0),
        size: Vec2::new(8.0, 12.0),
        owner: BulletOwner::Enemy,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 12345)
    }

    #[test]
    fn test_spawn_enemy_adds_one_valid_enemy() {
        let mut state = state();
        for i in 0..100 {
            spawn_enemy(&mut state);
            assert_eq!(state.enemies.len(), i + 1);
            let e = state.enemies.last().unwrap();
            assert!(matches!(
                e.kind,
                EnemyKind::Scout | EnemyKind::Fighter | EnemyKind::Kamikaze
            ));
            assert!(e.hp >= 1);
            assert!(e.pos.x >= 40.0 && e.pos.x <= PLAYFIELD_WIDTH - 80.0);
            assert!(e.pos.y < 0.0);
            assert!(e.vel.y > 0.0);
        }
    }

    #[test]
    fn test_spawn_enemy_velocity_scales_with_progress() {
        let mut state = state();
        state.wave = 11;
        state.kills = 100;
        // difficulty = 1 + 10*0.09 + 100*0.005 = 2.4; slowest variant floor
        // is 45 px/s before scaling
        let floor = 45.0 * 2.4;
        for _ in 0..50 {
            spawn_enemy(&mut state);
        }
        assert!(state.enemies.iter().all(|e| e.vel.y >= floor - 1e-3));
    }

    #[test]
    fn test_spawn_regular_boss() {
        let mut state = state();
        state.wave = 3;
        spawn_boss(&mut state, false);

        let boss = state.boss.as_ref().unwrap();
        assert_eq!(boss.hp, 40 + 3 * 5);
        assert_eq!(boss.max_hp, boss.hp);
        assert!(!boss.mega);
        assert_eq!(boss.size, Vec2::new(160.0, 110.0));
        assert!(state.boss_active);
        // Wave advances on appearance
        assert_eq!(state.wave, 4);
        assert!(state.events.contains(&GameEvent::BossSpawned { mega: false }));
    }

    #[test]
    fn test_spawn_mega_boss() {
        let mut state = state();
        spawn_boss(&mut state, true);

        let boss = state.boss.as_ref().unwrap();
        assert_eq!(boss.hp, 120 + 10);
        assert!(boss.mega);
        assert_eq!(boss.size, Vec2::new(210.0, 140.0));
        assert_eq!(state.wave, 2);
    }

    #[test]
    fn test_spawn_power_up_kind_uniform_pick() {
        let mut state = state();
        for _ in 0..60 {
            spawn_power_up(&mut state, 100.0, -20.0);
        }
        assert_eq!(state.power_ups.len(), 60);
        for kind in [PowerKind::Rapid, PowerKind::Shield, PowerKind::Double] {
            assert!(state.power_ups.iter().any(|p| p.kind == kind));
        }
        assert!(state
            .power_ups
            .iter()
            .all(|p| p.fall_speed == POWER_UP_FALL_SPEED));
    }

    #[test]
    fn test_spawn_particles_bounds() {
        let mut state = state();
        spawn_particles(&mut state, Vec2::new(50.0, 50.0), 40, 1, 220.0, true);
        assert_eq!(state.particles.len(), 40);
        for p in &state.particles {
            assert!(p.life_ms >= 300.0 && p.life_ms <= 1200.0);
            assert!(p.radius >= 1.2 && p.radius <= 3.6);
            // Upward bias: vertical velocity points up
            assert!(p.vel.y < 0.0);
        }
    }

    #[test]
    fn test_fire_single_shot() {
        let mut state = state();
        fire_player_shot(&mut state);
        assert_eq!(state.bullets.len(), 1);
        let b = &state.bullets[0];
        assert_eq!(b.vel, Vec2::new(0.0, -720.0));
        assert_eq!(b.owner, BulletOwner::Player);
        assert!(state.events.contains(&GameEvent::LaserFired));
    }

    #[test]
    fn test_fire_double_shot_offsets() {
        let mut state = state();
        state.player.weapon = Weapon::Double;
        fire_player_shot(&mut state);
        assert_eq!(state.bullets.len(), 2);
        let centers: Vec<f32> = state
            .bullets
            .iter()
            .map(|b| b.pos.x + b.size.x / 2.0)
            .collect();
        let cx = state.player.x + state.player.size.x / 2.0;
        assert!((centers[0] - (cx - 10.0)).abs() < 1e-3);
        assert!((centers[1] - (cx + 10.0)).abs() < 1e-3);
    }

    #[test]
    fn test_fire_rapid_shot_is_faster_and_narrower() {
        let mut state = state();
        state.player.weapon = Weapon::Rapid;
        fire_player_shot(&mut state);
        let b = &state.bullets[0];
        assert_eq!(b.vel.y, -1100.0);
        assert_eq!(b.size, Vec2::new(4.0, 10.0));
    }

    #[test]
    fn test_boss_bullet_descends_with_drift() {
        let mut state = state();
        for _ in 0..20 {
            spawn_boss_bullet(&mut state, Vec2::new(480.0, 100.0));
        }
        for b in &state.bullets {
            assert_eq!(b.owner, BulletOwner::Enemy);
            assert_eq!(b.vel.y, 260.0);
            assert!(b.vel.x > -160.0 && b.vel.x < 160.0);
        }
    }
}
