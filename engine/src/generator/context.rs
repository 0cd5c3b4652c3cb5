//! Per-advance draw context
//!
//! Wraps the generator cloned for one advance together with the running
//! draw counter. Every draw of an encounter goes through here so the counter
//! stays in step with the generator.

use crate::rng::{Bound, PokeRng};

#[derive(Debug, Clone)]
pub struct DrawContext {
    rng: PokeRng,
    count: u32,
}

impl DrawContext {
    /// Start drawing from `rng` with the counter at `count`
    pub fn new(rng: PokeRng, count: u32) -> Self {
        Self { rng, count }
    }

    pub fn next_u16(&mut self) -> u16 {
        self.count = self.count.wrapping_add(1);
        self.rng.next_u16()
    }

    pub fn next_u16_bounded(&mut self, range: u16, bound: Bound) -> u16 {
        self.count = self.count.wrapping_add(1);
        self.rng.next_u16_bounded(range, bound)
    }

    /// Two raw draws combined as `(second << 16) | first`
    pub fn next_pid(&mut self) -> u32 {
        let low = u32::from(self.next_u16());
        let high = u32::from(self.next_u16());
        (high << 16) | low
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
