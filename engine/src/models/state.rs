//! Wild encounter outcome
//!
//! One record per advance that survives every gate and filter. Records are
//! immutable once built; every derived view (IVs, gender, shininess, hidden
//! power) is computed from the stored draws.

use serde::{Deserialize, Serialize};

use super::pokemon::Gender;

/// Trainer shiny value from a trainer/secret id pair
pub fn tsv(tid: u16, sid: u16) -> u16 {
    tid ^ sid
}

/// Whether `pid` is shiny for the given trainer shiny value
pub fn is_shiny(pid: u32, tsv: u16) -> bool {
    let psv = ((pid >> 16) as u16) ^ (pid as u16);
    (psv ^ tsv) < 8
}

/// Wild encounter produced at one advance
///
/// # Example
/// ```
/// use wild_finder_core::models::WildState;
///
/// let state = WildState::builder()
///     .advance(7)
///     .pid(0x0000_0019)
///     .nature(0)
///     .ivs(0x7FFF, 0x0000)
///     .build();
/// assert_eq!(state.ivs(), [31, 31, 31, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WildState {
    /// Advance this encounter was generated on
    advance: u32,

    /// Base generator state at this advance
    seed: u32,

    /// Next raw 16-bit value of the base generator
    prng: u16,

    /// Draw counter when the encounter finished
    draws: u32,

    pid: u32,
    nature: u8,

    /// HP/Atk/Def packed in 5-bit fields
    iv1: u16,
    /// Spe/SpA/SpD packed in 5-bit fields
    iv2: u16,

    shiny: bool,
    level: u8,
    encounter_slot: u8,
    item: u16,
    species: u16,
    gender_ratio: u8,
}

impl WildState {
    pub fn builder() -> WildStateBuilder {
        WildStateBuilder::default()
    }

    pub fn advance(&self) -> u32 {
        self.advance
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn prng(&self) -> u16 {
        self.prng
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn nature(&self) -> u8 {
        self.nature
    }

    pub fn iv_words(&self) -> (u16, u16) {
        (self.iv1, self.iv2)
    }

    /// IVs in HP, Atk, Def, SpA, SpD, Spe order
    pub fn ivs(&self) -> [u8; 6] {
        let field = |word: u16, index: u16| ((word >> (5 * index)) & 31) as u8;
        [
            field(self.iv1, 0),
            field(self.iv1, 1),
            field(self.iv1, 2),
            field(self.iv2, 1),
            field(self.iv2, 2),
            field(self.iv2, 0),
        ]
    }

    pub fn ability(&self) -> u8 {
        (self.pid & 1) as u8
    }

    pub fn gender(&self) -> Gender {
        Gender::from_pid(self.pid, self.gender_ratio)
    }

    pub fn shiny(&self) -> bool {
        self.shiny
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn encounter_slot(&self) -> u8 {
        self.encounter_slot
    }

    pub fn item(&self) -> u16 {
        self.item
    }

    pub fn species(&self) -> u16 {
        self.species
    }

    /// Hidden Power type index (0 Fighting .. 15 Dark)
    pub fn hidden_power(&self) -> u8 {
        let sum = self
            .hidden_power_order()
            .iter()
            .enumerate()
            .map(|(i, iv)| u32::from(iv & 1) << i)
            .sum::<u32>();
        (sum * 15 / 63) as u8
    }

    /// Hidden Power base power (30-70)
    pub fn hidden_power_strength(&self) -> u8 {
        let sum = self
            .hidden_power_order()
            .iter()
            .enumerate()
            .map(|(i, iv)| u32::from((iv >> 1) & 1) << i)
            .sum::<u32>();
        (sum * 40 / 63 + 30) as u8
    }

    fn hidden_power_order(&self) -> [u8; 6] {
        let [hp, atk, def, spa, spd, spe] = self.ivs();
        [hp, atk, def, spe, spa, spd]
    }
}

/// Builder for [`WildState`]; unset fields are zero
#[derive(Debug, Clone, Default)]
pub struct WildStateBuilder {
    advance: u32,
    seed: u32,
    prng: u16,
    draws: u32,
    pid: u32,
    nature: u8,
    iv1: u16,
    iv2: u16,
    tsv: u16,
    level: u8,
    encounter_slot: u8,
    item: u16,
    species: u16,
    gender_ratio: u8,
}

impl WildStateBuilder {
    pub fn advance(mut self, advance: u32) -> Self {
        self.advance = advance;
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn prng(mut self, prng: u16) -> Self {
        self.prng = prng;
        self
    }

    pub fn draws(mut self, draws: u32) -> Self {
        self.draws = draws;
        self
    }

    pub fn pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }

    pub fn nature(mut self, nature: u8) -> Self {
        self.nature = nature;
        self
    }

    pub fn ivs(mut self, iv1: u16, iv2: u16) -> Self {
        self.iv1 = iv1;
        self.iv2 = iv2;
        self
    }

    pub fn tsv(mut self, tsv: u16) -> Self {
        self.tsv = tsv;
        self
    }

    pub fn level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn encounter_slot(mut self, encounter_slot: u8) -> Self {
        self.encounter_slot = encounter_slot;
        self
    }

    pub fn item(mut self, item: u16) -> Self {
        self.item = item;
        self
    }

    pub fn species(mut self, species: u16, gender_ratio: u8) -> Self {
        self.species = species;
        self.gender_ratio = gender_ratio;
        self
    }

    pub fn build(self) -> WildState {
        WildState {
            advance: self.advance,
            seed: self.seed,
            prng: self.prng,
            draws: self.draws,
            pid: self.pid,
            nature: self.nature,
            iv1: self.iv1,
            iv2: self.iv2,
            shiny: is_shiny(self.pid, self.tsv),
            level: self.level,
            encounter_slot: self.encounter_slot,
            item: self.item,
            species: self.species,
            gender_ratio: self.gender_ratio,
        }
    }
}
