//! Fixed-step runner used when no renderer is attached.

use super::session::{FinishReason, Session, SessionState};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    pub player_id: u32,
    pub score: u32,
}

/// Summary of a headless run, printed by the binary.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessReport {
    pub seed: u64,
    pub ticks: u64,
    pub elapsed_secs: f64,
    /// `None` when the tick budget ran out first.
    pub finish: Option<String>,
    pub remaining_food: usize,
    pub standings: Vec<Standing>,
}

/// Runs `session` at its configured frame rate until it finishes or
/// `max_frames` frames have been fed to it.
pub fn run_headless(session: &mut Session, max_frames: u64) -> HeadlessReport {
    let dt = 1.0 / session.config().target_fps as f64;
    session.start();

    let mut finish = None;
    for _ in 0..max_frames {
        if let SessionState::Finished(reason) = session.frame(dt) {
            finish = Some(reason);
            break;
        }
    }

    let world = session.world();
    HeadlessReport {
        seed: session.seed(),
        ticks: world.tick(),
        elapsed_secs: session.elapsed(),
        finish: finish.map(|reason| match reason {
            FinishReason::AllFoodConsumed => "all_food_consumed".to_string(),
            FinishReason::TimeLimit => "time_limit".to_string(),
        }),
        remaining_food: world.remaining_food(),
        standings: session
            .standings()
            .into_iter()
            .map(|p| Standing {
                player_id: p.id,
                score: p.score,
            })
            .collect(),
    }
}
