//! Wild Finder Core - Rust Engine
//!
//! Deterministic search over Generation 4 wild encounters.
//!
//! # Architecture
//!
//! - **rng**: Bit-exact game generators (LCRNG family, SFMT)
//! - **core**: Static rarity tables
//! - **models**: Domain types (EncounterArea, Slot, Lead, WildState)
//! - **filter**: Slot/nature/state predicates
//! - **generator**: Method J, Method K and Poké Radar search
//!
//! # Critical Invariants
//!
//! 1. Every draw reproduces the games' own consumption exactly
//! 2. Advance indices increase by one per iteration, whatever was rejected
//! 3. Same inputs → same outcomes

// Module declarations
pub mod core;
pub mod filter;
pub mod generator;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use filter::{AcceptAll, StateFilter, WildStateFilter};
pub use generator::{fingerprint, GeneratorConfig, GeneratorError, Method, WildGenerator};
pub use models::{
    area::{AreaError, Encounter, EncounterArea},
    lead::Lead,
    pokemon::{ElementType, Gender, Slot},
    state::WildState,
};
pub use rng::{Bound, PokeRng, Sfmt};
