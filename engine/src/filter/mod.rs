//! Encounter filters
//!
//! The generator consults a filter at three points, each as early as the
//! information exists:
//! 1. **Slot**: right after the encounter slot is resolved
//! 2. **Nature**: right after the nature is resolved
//! 3. **State**: on the finished [`WildState`]
//!
//! Filters only prune work. A rejection abandons the current advance; it
//! never changes which advance is attempted next.
//!
//! # Filter Interface
//!
//! Every method defaults to accepting, so a filter only overrides the checks
//! it cares about:
//! ```rust
//! use wild_finder_core::filter::StateFilter;
//!
//! struct MaleOnly;
//!
//! impl StateFilter for MaleOnly {
//!     fn accepts_state(&self, state: &wild_finder_core::WildState) -> bool {
//!         state.gender() == wild_finder_core::models::Gender::Male
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Gender, WildState, NATURE_COUNT};

/// Capability interface the generator filters through
pub trait StateFilter {
    fn accepts_slot(&self, _slot: u8) -> bool {
        true
    }

    fn accepts_nature(&self, _nature: u8) -> bool {
        true
    }

    fn accepts_state(&self, _state: &WildState) -> bool {
        true
    }
}

/// Filter that accepts everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl StateFilter for AcceptAll {}

impl<F: StateFilter + ?Sized> StateFilter for &F {
    fn accepts_slot(&self, slot: u8) -> bool {
        (**self).accepts_slot(slot)
    }

    fn accepts_nature(&self, nature: u8) -> bool {
        (**self).accepts_nature(nature)
    }

    fn accepts_state(&self, state: &WildState) -> bool {
        (**self).accepts_state(state)
    }
}

/// Criteria-based filter over wild encounters
///
/// Every criterion left as `None` (or a full IV range) is unconstrained.
///
/// # Example
/// ```
/// use wild_finder_core::filter::{StateFilter, WildStateFilter};
///
/// let filter = WildStateFilter::new()
///     .with_natures(&[3, 10])
///     .with_ivs(0, 31, 31);
///
/// assert!(filter.accepts_nature(10));
/// assert!(!filter.accepts_nature(4));
/// assert!(filter.accepts_slot(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WildStateFilter {
    /// Allowed encounter slots
    pub slots: Option<Vec<u8>>,

    /// Allowed natures
    pub natures: Option<Vec<u8>>,

    /// Allowed hidden power types
    pub hidden_powers: Option<Vec<u8>>,

    /// Required ability bit (0 or 1)
    pub ability: Option<u8>,

    pub gender: Option<Gender>,

    /// Required shininess
    pub shiny: Option<bool>,

    /// Inclusive per-stat minimums, HP/Atk/Def/SpA/SpD/Spe
    pub iv_min: [u8; 6],

    /// Inclusive per-stat maximums, HP/Atk/Def/SpA/SpD/Spe
    pub iv_max: [u8; 6],
}

impl Default for WildStateFilter {
    fn default() -> Self {
        Self {
            slots: None,
            natures: None,
            hidden_powers: None,
            ability: None,
            gender: None,
            shiny: None,
            iv_min: [0; 6],
            iv_max: [31; 6],
        }
    }
}

impl WildStateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(mut self, slots: &[u8]) -> Self {
        self.slots = Some(slots.to_vec());
        self
    }

    /// # Panics
    /// Panics if a nature is not below 25
    pub fn with_natures(mut self, natures: &[u8]) -> Self {
        assert!(
            natures.iter().all(|&nature| nature < NATURE_COUNT),
            "natures must be below 25"
        );
        self.natures = Some(natures.to_vec());
        self
    }

    pub fn with_hidden_powers(mut self, hidden_powers: &[u8]) -> Self {
        self.hidden_powers = Some(hidden_powers.to_vec());
        self
    }

    pub fn with_ability(mut self, ability: u8) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_shiny(mut self, shiny: bool) -> Self {
        self.shiny = Some(shiny);
        self
    }

    /// Constrain one stat (index in HP/Atk/Def/SpA/SpD/Spe order)
    ///
    /// # Panics
    /// Panics if `stat` is not below 6
    pub fn with_ivs(mut self, stat: usize, min: u8, max: u8) -> Self {
        assert!(stat < 6, "stat index must be below 6");
        self.iv_min[stat] = min;
        self.iv_max[stat] = max;
        self
    }

    fn allows(set: &Option<Vec<u8>>, value: u8) -> bool {
        set.as_ref().map_or(true, |allowed| allowed.contains(&value))
    }
}

impl StateFilter for WildStateFilter {
    fn accepts_slot(&self, slot: u8) -> bool {
        Self::allows(&self.slots, slot)
    }

    fn accepts_nature(&self, nature: u8) -> bool {
        Self::allows(&self.natures, nature)
    }

    fn accepts_state(&self, state: &WildState) -> bool {
        if self.ability.is_some_and(|ability| ability != state.ability()) {
            return false;
        }
        if self.gender.is_some_and(|gender| gender != state.gender()) {
            return false;
        }
        if self.shiny.is_some_and(|shiny| shiny != state.shiny()) {
            return false;
        }

        let ivs = state.ivs();
        let in_range = ivs
            .iter()
            .zip(self.iv_min.iter().zip(self.iv_max.iter()))
            .all(|(&iv, (&min, &max))| (min..=max).contains(&iv));
        if !in_range {
            return false;
        }

        Self::allows(&self.hidden_powers, state.hidden_power())
            && Self::allows(&self.natures, state.nature())
            && Self::allows(&self.slots, state.encounter_slot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pid: u32, iv1: u16, iv2: u16) -> WildState {
        WildState::builder()
            .pid(pid)
            .nature((pid % 25) as u8)
            .ivs(iv1, iv2)
            .species(25, 127)
            .build()
    }

    #[test]
    fn test_default_accepts_everything() {
        let filter = WildStateFilter::default();
        assert!(filter.accepts_slot(11));
        assert!(filter.accepts_nature(24));
        assert!(filter.accepts_state(&state(0xFFFF_FFFF, 0x7FFF, 0)));
        assert!(AcceptAll.accepts_state(&state(0, 0, 0)));
    }

    #[test]
    fn test_iv_ranges_are_inclusive() {
        let filter = WildStateFilter::new().with_ivs(0, 31, 31);
        assert!(filter.accepts_state(&state(0, 31, 0)));
        assert!(!filter.accepts_state(&state(0, 30, 0)));
    }

    #[test]
    fn test_ability_and_gender() {
        let filter = WildStateFilter::new()
            .with_ability(1)
            .with_gender(Gender::Male);
        // low byte 0xFF >= 127 → male, bit 0 set → ability 1
        assert!(filter.accepts_state(&state(0x0000_00FF, 0, 0)));
        assert!(!filter.accepts_state(&state(0x0000_00FE, 0, 0)));
        assert!(!filter.accepts_state(&state(0x0000_0001, 0, 0)));
    }

    #[test]
    fn test_shiny_requirement() {
        let shiny = WildState::builder().pid(0x1234_1234).tsv(0).build();
        let plain = WildState::builder().pid(0x1234_4321).tsv(0).build();
        let filter = WildStateFilter::new().with_shiny(true);
        assert!(filter.accepts_state(&shiny));
        assert!(!filter.accepts_state(&plain));
    }

    #[test]
    fn test_hidden_power_types() {
        let filter = WildStateFilter::new().with_hidden_powers(&[15]);
        assert!(filter.accepts_state(&state(0, 0x7FFF, 0x7FFF)));
        assert!(!filter.accepts_state(&state(0, 0, 0)));
    }

    #[test]
    #[should_panic(expected = "stat index must be below 6")]
    fn test_out_of_range_stat_rejected() {
        WildStateFilter::new().with_ivs(6, 0, 31);
    }

    #[test]
    fn test_speed_is_last_stat() {
        // iv2 low field is Spe
        let filter = WildStateFilter::new().with_ivs(5, 31, 31);
        assert!(filter.accepts_state(&state(0, 0, 31)));
        assert!(!filter.accepts_state(&state(0, 0, 31 << 5)));
    }

    #[test]
    #[should_panic(expected = "natures must be below 25")]
    fn test_out_of_range_nature_rejected() {
        WildStateFilter::new().with_natures(&[25]);
    }

    #[test]
    fn test_filter_by_reference() {
        let filter = WildStateFilter::new().with_slots(&[2]);
        let by_ref = &filter;
        assert!(by_ref.accepts_slot(2));
        assert!(!by_ref.accepts_slot(3));
    }

    #[test]
    fn test_json_partial_criteria() {
        let filter: WildStateFilter = serde_json::from_str(r#"{"natures": [0, 1]}"#).unwrap();
        assert_eq!(filter.natures, Some(vec![0, 1]));
        assert_eq!(filter.iv_max, [31; 6]);
    }
}
