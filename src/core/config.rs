//! Engine configuration.
//!
//! Hosts configure the engine before `GameState::initialize` by providing an
//! `EngineConfig`. Capacities, starting health and draw behaviour all live
//! here; none of them are compiled-in constants.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Slot capacity of each zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneCapacities {
    pub deck: usize,
    pub draw: usize,
    pub hand: usize,
    pub discard: usize,
    pub in_play: usize,
}

impl Default for ZoneCapacities {
    fn default() -> Self {
        Self {
            deck: 100,
            draw: 100,
            hand: 10,
            discard: 100,
            in_play: 100,
        }
    }
}

/// How the deck is moved into the draw pile on the first round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum ShuffleMode {
    /// Keep deck order. The last deck card ends up on top of the pile.
    #[default]
    Preserve,
    /// Permute with a ChaCha8 stream seeded from `seed`.
    Seeded { seed: u64 },
}

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use conduit_ccg::core::{EngineConfig, ShuffleMode};
///
/// let config = EngineConfig::default()
///     .with_starting_health(20)
///     .with_hand_capacity(7)
///     .with_shuffle(ShuffleMode::Seeded { seed: 7 });
///
/// assert_eq!(config.starting_health, 20);
/// assert_eq!(config.capacities.hand, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Health at the start of the game.
    pub starting_health: i64,

    /// Cards drawn at each round start. Effects may raise it at runtime.
    pub draw_rate: u32,

    /// Health lost per draw attempted from an empty pile.
    pub draw_damage: u32,

    /// Zone slot capacities.
    pub capacities: ZoneCapacities,

    /// Number of board columns a card may be placed in.
    pub board_columns: u16,

    /// Deck to draw pile transfer mode.
    pub shuffle: ShuffleMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_health: 40,
            draw_rate: 1,
            draw_damage: 1,
            capacities: ZoneCapacities::default(),
            board_columns: 8,
            shuffle: ShuffleMode::Preserve,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(EngineError::Config)
    }

    #[must_use]
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_draw_rate(mut self, rate: u32) -> Self {
        self.draw_rate = rate;
        self
    }

    #[must_use]
    pub fn with_draw_damage(mut self, damage: u32) -> Self {
        self.draw_damage = damage;
        self
    }

    #[must_use]
    pub fn with_capacities(mut self, capacities: ZoneCapacities) -> Self {
        self.capacities = capacities;
        self
    }

    #[must_use]
    pub fn with_hand_capacity(mut self, hand: usize) -> Self {
        self.capacities.hand = hand;
        self
    }

    #[must_use]
    pub fn with_in_play_capacity(mut self, in_play: usize) -> Self {
        self.capacities.in_play = in_play;
        self
    }

    #[must_use]
    pub fn with_board_columns(mut self, columns: u16) -> Self {
        self.board_columns = columns;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }
}
