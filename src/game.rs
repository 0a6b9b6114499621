//! Game lifecycle controller
//!
//! Owns a [`GameState`] and gates the update step behind the phase
//! machine: Idle -> Running -> {Paused <-> Running} -> {Victory | Defeat}
//! -> Idle. While paused or idle no tick runs, so no timer advances.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::MAX_FRAME_DT;
use crate::hud::{self, HudSnapshot};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// A complete game instance: simulation state plus lifecycle commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    state: GameState,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(config, seed),
        }
    }

    /// Begin a run from Idle; ignored in any other phase
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Idle {
            self.state.phase = GamePhase::Running;
            log::info!("run started (seed {})", self.state.seed);
        }
    }

    /// Suspend the running simulation
    pub fn pause(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.phase = GamePhase::Paused;
        }
    }

    /// Resume from pause
    pub fn resume(&mut self) {
        if self.state.phase == GamePhase::Paused {
            self.state.phase = GamePhase::Running;
        }
    }

    /// Back to Idle with run defaults restored
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Reset and immediately start a fresh run
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Advance one frame with the given input sample and elapsed seconds
    ///
    /// The elapsed time is capped so a stalled frame cannot tunnel
    /// entities through each other. Does nothing unless Running.
    pub fn frame(&mut self, input: &TickInput, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        tick(&mut self.state, input, dt);
    }

    /// Read-only snapshot for the renderer
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Display-ready HUD values
    pub fn hud(&self) -> HudSnapshot {
        hud::project(&self.state)
    }

    /// Events queued by the most recent frame
    pub fn events(&self) -> &[GameEvent] {
        &self.state.events
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn game() -> Game {
        Game::new(GameConfig::default(), 12345)
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut game = game();
        assert_eq!(game.phase(), GamePhase::Idle);

        game.start();
        assert_eq!(game.phase(), GamePhase::Running);

        game.pause();
        assert_eq!(game.phase(), GamePhase::Paused);
        // Pause is not a toggle
        game.pause();
        assert_eq!(game.phase(), GamePhase::Paused);

        game.resume();
        assert_eq!(game.phase(), GamePhase::Running);

        game.reset();
        assert_eq!(game.phase(), GamePhase::Idle);
    }

    #[test]
    fn test_start_only_from_idle() {
        let mut game = game();
        game.start();
        game.pause();
        // start() must not bypass pause
        game.start();
        assert_eq!(game.phase(), GamePhase::Paused);
    }

    #[test]
    fn test_frame_gated_by_phase() {
        let mut game = game();
        let input = TickInput::default();

        game.frame(&input, DT);
        assert_eq!(game.state().clock_ms, 0.0);

        game.start();
        game.frame(&input, DT);
        assert!(game.state().clock_ms > 0.0);

        let clock = game.state().clock_ms;
        game.pause();
        game.frame(&input, DT);
        assert_eq!(game.state().clock_ms, clock);
    }

    #[test]
    fn test_frame_clamps_elapsed_time() {
        let mut game = game();
        game.start();
        game.frame(&TickInput::default(), 10.0);
        assert_eq!(game.state().clock_ms, f64::from(MAX_FRAME_DT) * 1000.0);
    }

    #[test]
    fn test_restart_clears_previous_run() {
        let mut game = game();
        game.start();
        game.frame(
            &TickInput {
                fire_held: true,
                ..TickInput::default()
            },
            DT,
        );
        assert!(!game.state().bullets.is_empty());

        game.restart();
        assert_eq!(game.phase(), GamePhase::Running);
        assert!(game.state().bullets.is_empty());
        assert_eq!(game.hud().score, 0);
        assert_eq!(game.hud().lives, 3);
    }
}
