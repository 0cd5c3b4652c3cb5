//! Wild encounter search engine
//!
//! See `engine.rs` for the search loop and the per-method routines.

pub mod config;
pub mod context;
pub mod engine;
pub mod fingerprint;

// Re-export main types for convenience
pub use config::{GeneratorConfig, GeneratorError, Method};
pub use context::DrawContext;
pub use engine::WildGenerator;
pub use fingerprint::fingerprint;
