//! Galaxy Defender headless driver
//!
//! Runs the simulation at a fixed 60 Hz step with a simple autopilot
//! standing in for the pointer/fire collaborators, and logs HUD lines and
//! event notifications in place of the renderer and audio layers.

use galaxy_defender::consts::PLAYFIELD_WIDTH;
use galaxy_defender::sim::{GameEvent, GameState, TickInput};
use galaxy_defender::{Game, GameConfig};

const SIM_DT: f32 = 1.0 / 60.0;
/// Safety cap: ten minutes of simulated time
const MAX_FRAMES: u32 = 60 * 600;

/// Track the most pressing threat: the boss if one is up, otherwise the
/// lowest (closest) enemy, otherwise drift back to center.
fn autopilot(state: &GameState) -> TickInput {
    let pointer_x = if let Some(boss) = &state.boss {
        boss.pos.x + boss.size.x / 2.0
    } else if let Some(enemy) = state
        .enemies
        .iter()
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    {
        enemy.pos.x + enemy.size.x / 2.0
    } else {
        PLAYFIELD_WIDTH / 2.0
    };

    TickInput {
        pointer_x,
        fire_held: true,
    }
}

fn log_events(game: &Game) {
    for event in game.events() {
        match event {
            GameEvent::LaserFired => log::trace!("laser fired"),
            GameEvent::Explosion { x, y } => log::debug!("explosion at ({x:.0}, {y:.0})"),
            GameEvent::PowerUpCollected { kind } => log::info!("picked up {}", kind.label()),
            GameEvent::LifeLost => log::info!("life lost, {} remaining", game.hud().lives),
            GameEvent::BossSpawned { mega } => log::info!("boss incoming (mega={mega})"),
            GameEvent::BossDefeated { mega } => log::info!("boss down (mega={mega})"),
            GameEvent::Victory => log::info!("victory!"),
            GameEvent::Defeat => log::info!("defeat"),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1337);

    let mut game = Game::new(GameConfig::default(), seed);
    game.start();

    let mut frames = 0u32;
    while game.is_running() && frames < MAX_FRAMES {
        let input = autopilot(game.state());
        game.frame(&input, SIM_DT);
        log_events(&game);

        if frames % (60 * 5) == 0 {
            let hud = game.hud();
            log::info!(
                "t={:>4.0}s score={} lives={} kills={}/{} wave={} weapon={} power={}",
                game.state().clock_ms / 1000.0,
                hud.score,
                hud.lives,
                hud.kills,
                hud.goal,
                hud.wave,
                hud.weapon,
                hud.power,
            );
        }
        frames += 1;
    }

    let hud = game.hud();
    log::info!(
        "run ended in {:?} after {:.0}s: score={} kills={}/{} wave={}",
        game.phase(),
        game.state().clock_ms / 1000.0,
        hud.score,
        hud.kills,
        hud.goal,
        hud.wave,
    );
}
