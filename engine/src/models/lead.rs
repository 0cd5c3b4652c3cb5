//! Lead ability model
//!
//! The ability of the party's first Pokémon perturbs the draw sequence of a
//! wild encounter. Every influence the generator reproduces is a variant of
//! one closed enum.

use serde::{Deserialize, Serialize};

use super::area::Encounter;
use super::pokemon::{ElementType, Gender};

/// Number of natures
pub const NATURE_COUNT: u8 = 25;

/// Lead ability in effect for a search
///
/// # Example
/// ```
/// use wild_finder_core::models::{Encounter, Lead};
///
/// let lead = Lead::Synchronize(3);
/// assert_eq!(lead.synchronize_nature(), Some(3));
/// assert!(Lead::SuctionCups.doubles_rate(Encounter::GoodRod));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lead {
    #[default]
    None,

    /// 50% chance to force the carried nature (0-24)
    Synchronize(u8),

    /// 2/3 chance to force the given gender on gendered species
    CuteCharm(Gender),

    /// Narrows slots to Steel types half of the time
    MagnetPull,

    /// Narrows slots to Electric types half of the time
    Static,

    /// Biases variable-level encounters toward the slot maximum
    Pressure,

    /// Doubles the fishing bite rate
    SuctionCups,

    /// Doubles the Rock Smash encounter rate
    ArenaTrap,

    /// Raises the chance of a held item
    CompoundEyes,
}

impl Lead {
    pub fn synchronize_nature(self) -> Option<u8> {
        match self {
            Lead::Synchronize(nature) => Some(nature),
            _ => None,
        }
    }

    pub fn cute_charm_target(self) -> Option<Gender> {
        match self {
            Lead::CuteCharm(target) => Some(target),
            _ => None,
        }
    }

    /// Type the lead narrows encounter slots to, if any
    pub fn narrowing_type(self) -> Option<ElementType> {
        match self {
            Lead::MagnetPull => Some(ElementType::Steel),
            Lead::Static => Some(ElementType::Electric),
            _ => None,
        }
    }

    pub fn is_pressure(self) -> bool {
        self == Lead::Pressure
    }

    pub fn attracts_items(self) -> bool {
        self == Lead::CompoundEyes
    }

    /// Whether this lead doubles the encounter rate threshold for `encounter`
    pub fn doubles_rate(self, encounter: Encounter) -> bool {
        match self {
            Lead::SuctionCups => encounter.is_fishing(),
            Lead::ArenaTrap => encounter == Encounter::RockSmash,
            _ => false,
        }
    }
}
