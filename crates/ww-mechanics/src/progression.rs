//! Levels and the final challenge.

use serde::{Deserialize, Serialize};
use tracing::info;
use ww_core::{Character, FinalChallenge};

use crate::rules::Rules;

/// What [`update_level`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReport {
    /// The new level, if the cat leveled up.
    pub leveled_up: Option<u32>,
    /// Whether the final challenge was unlocked just now.
    pub unlocked: bool,
    /// Whether the final challenge is done, i.e. the game is won.
    pub won: bool,
}

/// Level up once the progress counter has run out, and unlock the final
/// challenge on reaching the configured level.
///
/// Calling it again without helping another animal changes nothing.
pub fn update_level(character: &mut Character, rules: &Rules) -> LevelReport {
    let mut report = LevelReport::default();

    if character.progress_to_next_level == 0 {
        character.level = character.level.saturating_add(1);
        character.progress_to_next_level = rules.progress_for_level(character.level);
        info!(
            level = character.level,
            next = character.progress_to_next_level,
            "leveled up"
        );
        report.leveled_up = Some(character.level);
    }

    if character.level >= rules.final_challenge_level && character.unlock_final_challenge() {
        info!(level = character.level, "final challenge unlocked");
        report.unlocked = true;
    }

    report.won = character.final_challenge() == FinalChallenge::Completed;
    report
}
