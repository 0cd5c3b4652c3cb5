//! Deterministic random number generation
//!
//! Bit-exact reproductions of the generators the games use.
//! CRITICAL: Every draw the search engine makes MUST go through this module.

mod lcrng;
mod sfmt;

pub use lcrng::{Bound, BwRng, Lcrng, Lcrng64, PokeRng};
pub use sfmt::Sfmt;
