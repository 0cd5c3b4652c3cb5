//! Domain models for the encounter search

pub mod area;
pub mod lead;
pub mod pokemon;
pub mod state;

// Re-exports
pub use area::{AreaError, Encounter, EncounterArea};
pub use lead::{Lead, NATURE_COUNT};
pub use pokemon::{is_gendered, ElementType, Gender, Slot};
pub use state::{is_shiny, tsv, WildState, WildStateBuilder};
