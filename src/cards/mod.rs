//! Card system: definitions, in-play state, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardKind`: Card type, which fixes the board row
//! - `Lifetime`: Round count before expiry, or endless
//! - `CardDefinition`: Immutable card data with effect bindings
//! - `CardState`: Per-placement state (remaining lifetime, board position)
//! - `CardCatalog`: Definition lookup

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardKind, Lifetime};
pub use instance::CardState;
pub use registry::CardCatalog;
