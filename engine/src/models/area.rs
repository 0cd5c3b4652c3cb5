//! Encounter area model
//!
//! An area is one encounter method at one location: an ordered slot table,
//! the base rate threshold, and the slot subsets that Magnet Pull and Static
//! narrow to. Areas are built once from static game data and never change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::lead::Lead;
use super::pokemon::{ElementType, Slot};
use crate::generator::DrawContext;
use crate::rng::Bound;

/// How an encounter is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encounter {
    Grass,
    Surfing,
    OldRod,
    GoodRod,
    SuperRod,
    RockSmash,
    BugCatchingContest,
}

impl Encounter {
    pub fn is_fishing(self) -> bool {
        matches!(
            self,
            Encounter::OldRod | Encounter::GoodRod | Encounter::SuperRod
        )
    }

    /// Whether slot levels are drawn from a range rather than fixed
    pub fn has_level_range(self) -> bool {
        self != Encounter::Grass
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AreaError {
    #[error("Encounter area {location} has no slots")]
    Empty { location: u16 },

    #[error("Encounter area {location} has {len} slots, more than an index can address")]
    TooManySlots { location: u16, len: usize },

    #[error("Encounter area {location} slot {index} has min_level above max_level")]
    InvertedLevels { location: u16, index: usize },
}

/// Raw serialized form; validated into [`EncounterArea`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EncounterAreaData {
    location: u16,
    rate: u8,
    encounter: Encounter,
    slots: Vec<Slot>,
}

/// Encounter table for one location and method
///
/// # Example
/// ```
/// use wild_finder_core::models::{ElementType, Encounter, EncounterArea, Lead, Slot};
///
/// let area = EncounterArea::new(
///     201,
///     30,
///     Encounter::Grass,
///     vec![
///         Slot::new(396, 2, 2, 127, [ElementType::Normal, ElementType::Flying]),
///         Slot::new(403, 3, 3, 127, [ElementType::Electric, ElementType::Electric]),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(area.slots_for(Lead::Static), vec![1]);
/// assert_eq!(area.slots_for(Lead::MagnetPull), vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EncounterAreaData", into = "EncounterAreaData")]
pub struct EncounterArea {
    location: u16,

    /// Percentage threshold for encounters gated by a rate roll
    rate: u8,

    encounter: Encounter,

    slots: Vec<Slot>,

    /// Indices of Steel-type slots (Magnet Pull)
    steel_slots: Vec<u8>,

    /// Indices of Electric-type slots (Static)
    electric_slots: Vec<u8>,
}

impl EncounterArea {
    pub fn new(
        location: u16,
        rate: u8,
        encounter: Encounter,
        slots: Vec<Slot>,
    ) -> Result<Self, AreaError> {
        if slots.is_empty() {
            return Err(AreaError::Empty { location });
        }
        if slots.len() > usize::from(u8::MAX) + 1 {
            return Err(AreaError::TooManySlots {
                location,
                len: slots.len(),
            });
        }
        if let Some(index) = slots
            .iter()
            .position(|slot| slot.min_level() > slot.max_level())
        {
            return Err(AreaError::InvertedLevels { location, index });
        }

        let indices_of = |element: ElementType| -> Vec<u8> {
            slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.has_type(element))
                .map(|(i, _)| i as u8)
                .collect()
        };
        let steel_slots = indices_of(ElementType::Steel);
        let electric_slots = indices_of(ElementType::Electric);

        Ok(Self {
            location,
            rate,
            encounter,
            slots,
            steel_slots,
            electric_slots,
        })
    }

    pub fn location(&self) -> u16 {
        self.location
    }

    pub fn rate(&self) -> u8 {
        self.rate
    }

    pub fn encounter(&self) -> Encounter {
        self.encounter
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot at `index`, clamped to the last slot for short tables
    pub fn slot(&self, index: u8) -> &Slot {
        &self.slots[self.clamp_index(index)]
    }

    /// Clamp a rarity-table index to this area's table
    pub fn clamp_index(&self, index: u8) -> usize {
        usize::from(index).min(self.slots.len() - 1)
    }

    /// Narrowed subset for a slot-narrowing lead; empty when none apply
    pub fn narrowed_slots(&self, lead: Lead) -> &[u8] {
        match lead.narrowing_type() {
            Some(ElementType::Steel) => &self.steel_slots,
            Some(ElementType::Electric) => &self.electric_slots,
            _ => &[],
        }
    }

    /// Slots reachable under `lead`
    ///
    /// The narrowed subset when the lead narrows and the subset is non-empty,
    /// every slot otherwise.
    pub fn slots_for(&self, lead: Lead) -> Vec<u8> {
        let narrowed = self.narrowed_slots(lead);
        if narrowed.is_empty() {
            (0..self.slots.len()).map(|i| i as u8).collect()
        } else {
            narrowed.to_vec()
        }
    }

    /// Resolve the level for a slot
    ///
    /// Fixed-level encounters consume no draw and yield the slot maximum.
    /// Ranged encounters draw once over the level span; under Pressure the
    /// span is doubled and any draw past the real span yields the maximum.
    pub fn calculate_level(
        &self,
        index: u8,
        ctx: &mut DrawContext,
        bound: Bound,
        ranged: bool,
        pressure: bool,
    ) -> u8 {
        let slot = self.slot(index);
        if !ranged {
            return slot.max_level();
        }

        let span = u16::from(slot.max_level() - slot.min_level()) + 1;
        let draw_span = if pressure { span * 2 } else { span };
        let rand = ctx.next_u16_bounded(draw_span, bound);
        if rand >= span {
            slot.max_level()
        } else {
            slot.min_level() + rand as u8
        }
    }
}

impl TryFrom<EncounterAreaData> for EncounterArea {
    type Error = AreaError;

    fn try_from(data: EncounterAreaData) -> Result<Self, Self::Error> {
        EncounterArea::new(data.location, data.rate, data.encounter, data.slots)
    }
}

impl From<EncounterArea> for EncounterAreaData {
    fn from(area: EncounterArea) -> Self {
        EncounterAreaData {
            location: area.location,
            rate: area.rate,
            encounter: area.encounter,
            slots: area.slots,
        }
    }
}
