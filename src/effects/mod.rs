//! Effect system for card hooks.
//!
//! - `Effect`: Tagged variants for everything a card hook can do
//! - `EffectResolver`: Executes effects on game state
//!
//! Each card binds two effects: one resolved when it is played, one
//! resolved at every round start while it stays in play. Both hooks share
//! the same failure policy: a failed effect is rolled back and reported,
//! never fatal.

mod effect;
mod resolver;

pub use effect::Effect;
pub use resolver::EffectResolver;
