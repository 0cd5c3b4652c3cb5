//! Species-level data carried by an encounter slot

use serde::{Deserialize, Serialize};

/// Gender ratio byte for species that are always male
pub const RATIO_MALE_ONLY: u8 = 0;
/// Gender ratio byte for species that are always female
pub const RATIO_FEMALE_ONLY: u8 = 254;
/// Gender ratio byte for genderless species
pub const RATIO_GENDERLESS: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

impl Gender {
    /// Resolve gender from the low byte of a PID against a species' ratio
    pub fn from_pid(pid: u32, ratio: u8) -> Self {
        match ratio {
            RATIO_MALE_ONLY => Gender::Male,
            RATIO_FEMALE_ONLY => Gender::Female,
            RATIO_GENDERLESS => Gender::Genderless,
            _ if (pid & 0xFF) < u32::from(ratio) => Gender::Female,
            _ => Gender::Male,
        }
    }
}

/// True when a species' gender depends on its PID
pub fn is_gendered(ratio: u8) -> bool {
    !matches!(ratio, RATIO_MALE_ONLY | RATIO_FEMALE_ONLY | RATIO_GENDERLESS)
}

/// Elemental type, in the games' internal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
}

/// One entry of an encounter table
///
/// # Example
/// ```
/// use wild_finder_core::models::{ElementType, Slot};
///
/// let slot = Slot::new(81, 15, 17, 255, [ElementType::Electric, ElementType::Steel])
///     .with_items(0, 233);
/// assert!(slot.has_type(ElementType::Steel));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// National dex number
    species: u16,

    min_level: u8,
    max_level: u8,

    /// 0 male only, 254 female only, 255 genderless, otherwise female threshold
    gender_ratio: u8,

    /// Wild held items; common item first
    items: [u16; 2],

    types: [ElementType; 2],
}

impl Slot {
    /// # Panics
    /// Panics if `min_level > max_level`
    pub fn new(
        species: u16,
        min_level: u8,
        max_level: u8,
        gender_ratio: u8,
        types: [ElementType; 2],
    ) -> Self {
        assert!(min_level <= max_level, "min_level must not exceed max_level");
        Self {
            species,
            min_level,
            max_level,
            gender_ratio,
            items: [0, 0],
            types,
        }
    }

    pub fn with_items(mut self, common: u16, rare: u16) -> Self {
        self.items = [common, rare];
        self
    }

    pub fn species(&self) -> u16 {
        self.species
    }

    pub fn min_level(&self) -> u8 {
        self.min_level
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    pub fn gender_ratio(&self) -> u8 {
        self.gender_ratio
    }

    pub fn item(&self, index: usize) -> u16 {
        self.items[index]
    }

    pub fn has_type(&self, element: ElementType) -> bool {
        self.types.contains(&element)
    }
}
