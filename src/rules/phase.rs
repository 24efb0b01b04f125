//! Round phases.

use serde::{Deserialize, Serialize};

/// Where the game is in its round cycle.
///
/// `RoundStart -> PlayerAction -> RoundEnd -> RoundStart ...`, with
/// `GameOver` reachable from any check of the terminal condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for `start_round`.
    RoundStart,
    /// The player may play cards until they end the turn or quit.
    PlayerAction,
    /// Enemy hook and terminal check.
    RoundEnd,
    /// Terminal. No further mutation.
    GameOver,
}

impl Phase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::GameOver
    }

    /// Whether `start_round` may be called from this phase.
    ///
    /// Starting a round from the action phase counts as passing.
    #[must_use]
    pub fn can_start_round(self) -> bool {
        matches!(self, Phase::RoundStart | Phase::PlayerAction)
    }
}
