//! HUD snapshot projection
//!
//! A pure read of simulation state into display-ready primitives. The HUD
//! collaborator renders these values verbatim; nothing here mutates the
//! simulation.

use serde::Serialize;

use crate::sim::GameState;

/// Display-ready counters and labels for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    /// Floored score
    pub score: u64,
    pub lives: i32,
    pub kills: u32,
    /// Kill quota for victory
    pub goal: u32,
    pub wave: u32,
    pub weapon: &'static str,
    /// Label for the in-effect buff ("None" when idle)
    pub power: &'static str,
    /// Icon for the in-effect buff (empty when idle)
    pub power_icon: &'static str,
    /// Whole seconds until the active buff expires (0 when none)
    pub power_seconds: u32,
}

/// Project the simulation state into HUD primitives
pub fn project(state: &GameState) -> HudSnapshot {
    // The shield flag wins the label even if another buff holds the record
    let power_icon = state
        .active_power
        .map(|active| active.kind.icon())
        .unwrap_or("");
    let power = if state.player.shield {
        "Shield"
    } else {
        state
            .active_power
            .map(|active| active.kind.label())
            .unwrap_or("None")
    };
    let power_seconds = state
        .active_power
        .map(|active| {
            let remaining_ms = active.expires_at_ms - state.clock_ms;
            (remaining_ms / 1000.0).ceil().max(0.0) as u32
        })
        .unwrap_or(0);

    HudSnapshot {
        score: state.score.floor() as u64,
        lives: state.lives,
        kills: state.kills,
        goal: state.config.kill_goal,
        wave: state.wave,
        weapon: state.player.weapon.label(),
        power,
        power_icon,
        power_seconds,
    }
}
