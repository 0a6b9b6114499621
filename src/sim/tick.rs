//! Fixed timestep simulation tick
//!
//! One call advances the whole playfield by `dt` seconds. The pass order
//! below is normative: spawn cadence, player, bullets, spawner, enemies,
//! power-ups, buff expiry, boss triggers, boss, enemy fire, particles.
//! Kill accounting depends on enemies resolving before the boss checks
//! run.

use glam::Vec2;
use rand::Rng;

use super::collision::overlaps;
use super::spawn::{
    fire_player_shot, spawn_boss, spawn_boss_bullet, spawn_enemy, spawn_particles, spawn_power_up,
};
use super::state::{
    ActivePower, BulletOwner, GameEvent, GamePhase, GameState, PowerKind, Weapon,
};
use crate::consts::*;
use crate::palette;

/// Input sample for a single tick
///
/// The pointer coordinate is already in simulation space; converting from
/// client/screen coordinates is the input collaborator's job.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    pub pointer_x: f32,
    pub fire_held: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            pointer_x: PLAYFIELD_WIDTH / 2.0,
            fire_held: false,
        }
    }
}

/// Advance the simulation by one frame
///
/// No-op outside the `Running` phase. Events queued by the previous tick
/// are dropped here, so collaborators must read them between ticks.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.events.clear();
    state.clock_ms += f64::from(dt) * 1000.0;

    update_spawn_interval(state);
    move_player(state, input, dt);
    update_reload(state, input, dt);
    advance_bullets(state, dt);
    run_spawner(state, dt);
    update_enemies(state, dt);
    update_power_ups(state, dt);
    expire_active_power(state);
    check_boss_triggers(state);
    update_boss(state, dt);
    resolve_enemy_fire(state);
    update_particles(state, dt);
}

/// Spawn cadence shrinks with kills and waves, clamped to sane bounds
fn update_spawn_interval(state: &mut GameState) {
    let decayed = SPAWN_INTERVAL_BASE_MS
        - state.kills as f32 * SPAWN_DECAY_PER_KILL_MS
        - state.wave.saturating_sub(1) as f32 * SPAWN_DECAY_PER_WAVE_MS;
    state.spawn_interval_ms = decayed.clamp(SPAWN_INTERVAL_MIN_MS, SPAWN_INTERVAL_MAX_MS);
}

/// Ease the ship toward the pointer; never teleports
fn move_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let player = &mut state.player;
    let target = (input.pointer_x - player.size.x / 2.0).clamp(
        PLAYER_MARGIN,
        PLAYFIELD_WIDTH - player.size.x - PLAYER_MARGIN,
    );
    player.x += (target - player.x) * (PLAYER_EASE_RATE * dt).clamp(0.0, 1.0);
}

fn update_reload(state: &mut GameState, input: &TickInput, dt: f32) {
    state.player.reload_ms -= dt * 1000.0;
    if input.fire_held && state.player.reload_ms <= 0.0 {
        state.player.reload_ms = state.player.reload_max_ms;
        fire_player_shot(state);
    }
}

fn advance_bullets(state: &mut GameState, dt: f32) {
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel * dt;
    }
    state
        .bullets
        .retain(|b| b.pos.y > BULLET_CULL_TOP && b.pos.y < PLAYFIELD_HEIGHT + BULLET_CULL_MARGIN);
}

/// Timed enemy spawner, suspended while a boss holds the field
fn run_spawner(state: &mut GameState, dt: f32) {
    state.spawn_timer_ms += dt * 1000.0;
    if !state.boss_active && state.spawn_timer_ms > state.spawn_interval_ms {
        state.spawn_timer_ms = 0.0;
        spawn_enemy(state);
        if state.rng.random_bool(POWER_UP_AMBIENT_CHANCE) {
            let x = state.rng.random_range(60.0..PLAYFIELD_WIDTH - 60.0);
            spawn_power_up(state, x, -20.0);
        }
    }
}

fn update_enemies(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.enemies.len() {
        {
            let enemy = &mut state.enemies[i];
            enemy.pos += enemy.vel * dt;
            if enemy.pos.x < WALL_MARGIN
                || enemy.pos.x + enemy.size.x > PLAYFIELD_WIDTH - WALL_MARGIN
            {
                enemy.vel.x = -enemy.vel.x;
            }
        }
        let (enemy_rect, enemy_center, enemy_color) = {
            let enemy = &state.enemies[i];
            (
                enemy.bounds(),
                enemy.pos + enemy.size / 2.0,
                enemy.color,
            )
        };

        // Ramming the player always costs a life; the shield only stops
        // bullets.
        if overlaps(&enemy_rect, &state.player.bounds()) {
            state.enemies.remove(i);
            let center = state.player.center();
            spawn_particles(state, center, 22, palette::SCOUT_RED, 220.0, true);
            lose_life(state);
            continue;
        }

        // First overlapping player bullet lands this frame's damage
        let mut killed = false;
        let mut hit = false;
        let mut j = 0;
        while j < state.bullets.len() {
            let bullet = &state.bullets[j];
            if bullet.owner == BulletOwner::Player && overlaps(&bullet.bounds(), &enemy_rect) {
                state.bullets.remove(j);
                state.enemies[i].hp -= 1;
                spawn_particles(state, enemy_center, 10, enemy_color, 220.0, true);
                if state.enemies[i].hp <= 0 {
                    let enemy = state.enemies.remove(i);
                    state.score += enemy.kind.reward();
                    state.kills += 1;
                    state.push_event(GameEvent::Explosion {
                        x: enemy_center.x,
                        y: enemy_center.y,
                    });
                    if state.rng.random_bool(POWER_UP_DROP_CHANCE) {
                        spawn_power_up(state, enemy_center.x, enemy_center.y);
                    }
                    killed = true;
                }
                hit = true;
                break;
            }
            j += 1;
        }
        if killed {
            continue;
        }
        if hit {
            i += 1;
            continue;
        }

        // Escaped out the bottom: silent removal, no score or life change
        if state.enemies[i].pos.y > PLAYFIELD_HEIGHT + ENEMY_DESPAWN_MARGIN {
            state.enemies.remove(i);
            continue;
        }
        i += 1;
    }
}

fn update_power_ups(state: &mut GameState, dt: f32) {
    let mut i = 0;
    while i < state.power_ups.len() {
        state.power_ups[i].pos.y += state.power_ups[i].fall_speed * dt;

        if overlaps(&state.power_ups[i].bounds(), &state.player.bounds()) {
            let kind = state.power_ups[i].kind;
            state.power_ups.remove(i);
            apply_power_up(state, kind);
            continue;
        }
        if state.power_ups[i].pos.y > PLAYFIELD_HEIGHT + POWER_UP_DESPAWN_MARGIN {
            state.power_ups.remove(i);
            continue;
        }
        i += 1;
    }
}

/// Install a picked-up buff; a new pickup overwrites the previous record
/// and timer without reverting its effect first
fn apply_power_up(state: &mut GameState, kind: PowerKind) {
    state.active_power = Some(ActivePower {
        kind,
        expires_at_ms: state.clock_ms + POWER_UP_DURATION_MS,
    });
    match kind {
        PowerKind::Rapid => state.player.arm(Weapon::Rapid),
        PowerKind::Double => state.player.arm(Weapon::Double),
        PowerKind::Shield => state.player.shield = true,
    }
    let center = state.player.center();
    spawn_particles(state, center, 18, palette::PICKUP_AQUA, 220.0, true);
    state.push_event(GameEvent::PowerUpCollected { kind });
}

/// Revert the expiring buff according to its own kind
fn expire_active_power(state: &mut GameState) {
    let Some(active) = state.active_power else {
        return;
    };
    if state.clock_ms > active.expires_at_ms {
        match active.kind {
            PowerKind::Rapid | PowerKind::Double => state.player.arm(Weapon::Single),
            PowerKind::Shield => state.player.shield = false,
        }
        state.active_power = None;
    }
}

/// Boss pacing: a regular boss at every interval multiple (at most once
/// per count), the final boss once the kill goal is reached. When both
/// conditions land on the same count the regular boss wins the frame.
fn check_boss_triggers(state: &mut GameState) {
    let interval = state.config.boss_interval;
    if interval > 0
        && state.kills > 0
        && state.kills % interval == 0
        && state.kills != state.last_boss_kills
        && !state.boss_active
    {
        spawn_boss(state, false);
        state.last_boss_kills = state.kills;
    }
    if state.kills >= state.config.kill_goal && !state.boss_active && state.boss.is_none() {
        spawn_boss(state, true);
        state.last_boss_kills = state.kills;
    }
}

fn update_boss(state: &mut GameState, dt: f32) {
    let Some(mut boss) = state.boss.take() else {
        return;
    };

    // Descend into view, then drift between random horizontal targets
    if boss.pos.y < BOSS_HOVER_Y {
        boss.pos.y += BOSS_DESCEND_SPEED * dt;
    }
    boss.pos.x += (boss.target_x - boss.pos.x) * (BOSS_TRACK_RATE * dt).clamp(0.0, 1.0);
    if state.rng.random_bool(BOSS_RETARGET_CHANCE) {
        boss.target_x = state
            .rng
            .random_range(BOSS_MARGIN..PLAYFIELD_WIDTH - boss.size.x - BOSS_MARGIN);
    }
    if state.rng.random_bool(BOSS_FIRE_CHANCE) {
        let muzzle = Vec2::new(
            boss.pos.x + boss.size.x / 2.0,
            boss.pos.y + boss.size.y - 6.0,
        );
        spawn_boss_bullet(state, muzzle);
    }

    let boss_rect = boss.bounds();
    let mut j = 0;
    while j < state.bullets.len() && boss.hp > 0 {
        let bullet = &state.bullets[j];
        if bullet.owner == BulletOwner::Player && overlaps(&bullet.bounds(), &boss_rect) {
            let hit_at = bullet.pos;
            state.bullets.remove(j);
            boss.hp -= 1;
            spawn_particles(state, hit_at, 8, palette::SPARK_GOLD, 220.0, true);
        } else {
            j += 1;
        }
    }

    if boss.hp <= 0 {
        let center = boss.pos + boss.size / 2.0;
        let burst = if boss.mega { 160 } else { 80 };
        spawn_particles(state, center, burst, palette::BOSS_VIOLET, 420.0, false);
        state.score += if boss.mega { SCORE_MEGA_BOSS } else { SCORE_BOSS };
        state.boss_active = false;
        state.push_event(GameEvent::BossDefeated { mega: boss.mega });
        if state.kills >= state.config.kill_goal {
            win_game(state);
        } else {
            state.wave += 1;
        }
    } else {
        state.boss = Some(boss);
    }
}

/// Enemy-owned bullets vs the player; the shield absorbs silently
fn resolve_enemy_fire(state: &mut GameState) {
    let mut i = 0;
    while i < state.bullets.len() {
        let bullet = &state.bullets[i];
        if bullet.owner == BulletOwner::Enemy && overlaps(&bullet.bounds(), &state.player.bounds())
        {
            state.bullets.remove(i);
            let center = state.player.center();
            if !state.player.shield {
                spawn_particles(state, center, 18, palette::KAMIKAZE_ROSE, 220.0, true);
                lose_life(state);
            } else {
                spawn_particles(state, center, 8, palette::PICKUP_AQUA, 120.0, false);
            }
            continue;
        }
        i += 1;
    }
}

fn update_particles(state: &mut GameState, dt: f32) {
    for particle in &mut state.particles {
        particle.age_ms += dt * 1000.0;
        particle.pos += particle.vel * dt;
        particle.vel.y += PARTICLE_GRAVITY * dt;
    }
    state.particles.retain(|p| p.age_ms <= p.life_ms);
}

fn lose_life(state: &mut GameState) {
    state.lives -= 1;
    let center = state.player.center();
    state.push_event(GameEvent::Explosion {
        x: center.x,
        y: center.y,
    });
    state.push_event(GameEvent::LifeLost);
    if state.lives <= 0 {
        lose_game(state);
    }
}

/// Terminal defeat; repeated triggers after game over are no-ops
fn lose_game(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }
    state.phase = GamePhase::Defeat;
    state.push_event(GameEvent::Defeat);
    log::info!("defeat at {} kills, score {}", state.kills, state.score.floor());
}

/// Terminal victory; idempotent like defeat
fn win_game(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }
    state.phase = GamePhase::Victory;
    state.push_event(GameEvent::Victory);
    log::info!("victory, score {}", state.score.floor());
}
