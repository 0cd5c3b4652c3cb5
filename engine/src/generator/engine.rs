//! Wild encounter search
//!
//! Walks every advance in `[initial_advances, initial_advances + max_advances]`
//! and replays the game's wild generation routine from each one.
//!
//! # Search Loop
//!
//! For each advance:
//! 1. Clone the base generator into a [`DrawContext`]
//! 2. Run the method-specific routine over the context, which returns `None`
//!    as soon as a rate gate or filter rejects the advance
//! 3. Step the base generator once; its high 16 bits become the outcome's
//!    `prng` value
//! 4. Keep the finished outcome if the state filter accepts it
//!
//! The base generator steps exactly once per advance whatever the routine
//! decided, so advance indices always increase by one.
//!
//! # Critical Invariants
//!
//! - **Determinism**: same seed + area + config → identical outcomes
//! - **Nature**: `pid % 25 == nature` for every outcome
//! - **Fidelity**: each draw uses the bound mode of the routine it reproduces
//!
//! The PID loops have no iteration cap, matching the games.

use tracing::debug;

use super::config::{GeneratorConfig, GeneratorError, Method};
use super::context::DrawContext;
use crate::core::encounter_slot::{j_slot, k_slot};
use crate::filter::StateFilter;
use crate::models::{
    is_gendered, tsv, Encounter, EncounterArea, Gender, Lead, Slot, WildState, WildStateBuilder,
    NATURE_COUNT,
};
use crate::rng::{Bound, PokeRng};

/// Held item breakpoints `[no item, common item]` without and with Compound Eyes
const ITEM_BREAKPOINTS: [[u16; 2]; 2] = [[45, 95], [20, 80]];

/// Bug Catching Contest rerolls at most this many times looking for a 31 IV
const CONTEST_ROLLS: usize = 4;

/// Wild encounter generator
///
/// # Example
/// ```
/// use wild_finder_core::filter::AcceptAll;
/// use wild_finder_core::generator::{GeneratorConfig, WildGenerator};
/// use wild_finder_core::models::{ElementType, Encounter, EncounterArea, Slot};
///
/// let area = EncounterArea::new(
///     1,
///     20,
///     Encounter::Grass,
///     vec![Slot::new(396, 5, 5, 127, [ElementType::Normal, ElementType::Flying])],
/// )
/// .unwrap();
/// let generator = WildGenerator::new(GeneratorConfig {
///     max_advances: 99,
///     ..GeneratorConfig::default()
/// })
/// .unwrap();
///
/// let states = generator.generate(0x1234_5678, &area, &AcceptAll).unwrap();
/// assert_eq!(states.len(), 100);
/// assert!(states.iter().all(|s| s.pid() % 25 == u32::from(s.nature())));
/// ```
#[derive(Debug, Clone)]
pub struct WildGenerator {
    config: GeneratorConfig,
    tsv: u16,
}

impl WildGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        let tsv = tsv(config.tid, config.sid);
        Ok(Self { config, tsv })
    }

    /// Search every advance from `seed` in `area`
    ///
    /// # Returns
    /// Outcomes in ascending advance order
    ///
    /// # Errors
    /// `SlotOutOfRange` when the Poké Radar slot is not in `area`
    pub fn generate<F: StateFilter>(
        &self,
        seed: u32,
        area: &EncounterArea,
        filter: &F,
    ) -> Result<Vec<WildState>, GeneratorError> {
        debug!(
            method = ?self.config.method,
            seed = format_args!("{:08X}", seed),
            initial_advances = self.config.initial_advances,
            max_advances = self.config.max_advances,
            location = area.location(),
            encounter = ?area.encounter(),
            "generating wild encounters"
        );

        let states = match self.config.method {
            Method::MethodJ => self.search(seed, filter, |ctx| self.method_j(ctx, area, filter)),
            Method::MethodK => self.search(seed, filter, |ctx| self.method_k(ctx, area, filter)),
            Method::PokeRadar => {
                let index = self.config.radar_slot;
                if usize::from(index) >= area.slots().len() {
                    return Err(GeneratorError::SlotOutOfRange {
                        index,
                        len: area.slots().len(),
                    });
                }
                let slot = area.slot(index);
                self.search(seed, filter, |ctx| self.poke_radar(ctx, slot, index, filter))
            }
        };

        debug!(results = states.len(), "wild search finished");
        Ok(states)
    }

    /// Shared advance loop
    fn search<F, R>(&self, initial_seed: u32, filter: &F, mut routine: R) -> Vec<WildState>
    where
        F: StateFilter,
        R: FnMut(&mut DrawContext) -> Option<WildStateBuilder>,
    {
        let config = &self.config;
        let mut rng = PokeRng::new_with_advances(
            initial_seed,
            config.initial_advances.wrapping_add(config.offset),
        );
        let mut states = Vec::new();

        for cnt in 0..=config.max_advances {
            let advance = config.initial_advances.wrapping_add(cnt);
            let seed = rng.seed();
            let mut ctx = DrawContext::new(rng, advance);
            let outcome = routine(&mut ctx);
            let prng = rng.next_u16();

            let Some(builder) = outcome else {
                continue;
            };
            let state = builder
                .advance(advance)
                .seed(seed)
                .prng(prng)
                .draws(ctx.count())
                .tsv(self.tsv)
                .build();
            if filter.accepts_state(&state) {
                states.push(state);
            }
        }

        states
    }

    /// Diamond/Pearl/Platinum
    fn method_j<F: StateFilter>(
        &self,
        ctx: &mut DrawContext,
        area: &EncounterArea,
        filter: &F,
    ) -> Option<WildStateBuilder> {
        let lead = self.config.lead;
        let encounter = area.encounter();

        if encounter.is_fishing()
            && ctx.next_u16_bounded(100, Bound::Divide) >= u16::from(area.rate())
        {
            return None;
        }

        let index = self.resolve_slot(ctx, area, Bound::Divide, j_slot);
        if !filter.accepts_slot(index) {
            return None;
        }

        let level = area.calculate_level(
            index,
            ctx,
            Bound::Divide,
            encounter.has_level_range(),
            lead.is_pressure(),
        );
        let slot = area.slot(index);
        let cute_charm = self.cute_charm(ctx, slot, Bound::Divide);

        let nature = self.nature(ctx, Bound::Divide);
        if !filter.accepts_nature(nature) {
            return None;
        }

        let pid = match cute_charm {
            Some(offset) => offset + u32::from(nature),
            None => pid_for_nature(ctx, nature),
        };
        let (iv1, iv2) = (ctx.next_u16(), ctx.next_u16());
        let item = held_item(ctx.next_u16_bounded(100, Bound::Modulo), lead, slot);

        Some(
            WildState::builder()
                .pid(pid)
                .nature(nature)
                .ivs(iv1, iv2)
                .level(level)
                .encounter_slot(index)
                .item(item)
                .species(slot.species(), slot.gender_ratio()),
        )
    }

    /// HeartGold/SoulSilver
    fn method_k<F: StateFilter>(
        &self,
        ctx: &mut DrawContext,
        area: &EncounterArea,
        filter: &F,
    ) -> Option<WildStateBuilder> {
        let lead = self.config.lead;
        let encounter = area.encounter();

        if encounter.is_fishing() || encounter == Encounter::RockSmash {
            let mut rate = u16::from(area.rate());
            if lead.doubles_rate(encounter) {
                rate *= 2;
            }
            if ctx.next_u16_bounded(100, Bound::Modulo) >= rate {
                return None;
            }
        }

        let index = self.resolve_slot(ctx, area, Bound::Modulo, k_slot);
        if !filter.accepts_slot(index) {
            return None;
        }

        let level = area.calculate_level(
            index,
            ctx,
            Bound::Modulo,
            encounter.has_level_range(),
            lead.is_pressure(),
        );
        let slot = area.slot(index);

        let (nature, pid, iv1, iv2) = match self.cute_charm(ctx, slot, Bound::Modulo) {
            Some(offset) => {
                let nature = ctx.next_u16_bounded(u16::from(NATURE_COUNT), Bound::Modulo) as u8;
                if !filter.accepts_nature(nature) {
                    return None;
                }
                let pid = offset + u32::from(nature);
                (nature, pid, ctx.next_u16(), ctx.next_u16())
            }
            None if encounter == Encounter::BugCatchingContest => {
                let rolled = self.contest_roll(ctx);
                if !filter.accepts_nature(rolled.0) {
                    return None;
                }
                rolled
            }
            None => {
                let nature = self.nature(ctx, Bound::Modulo);
                if !filter.accepts_nature(nature) {
                    return None;
                }
                let pid = pid_for_nature(ctx, nature);
                (nature, pid, ctx.next_u16(), ctx.next_u16())
            }
        };

        let item = held_item(ctx.next_u16_bounded(100, Bound::Modulo), lead, slot);

        Some(
            WildState::builder()
                .pid(pid)
                .nature(nature)
                .ivs(iv1, iv2)
                .level(level)
                .encounter_slot(index)
                .item(item)
                .species(slot.species(), slot.gender_ratio()),
        )
    }

    /// Diamond/Pearl/Platinum Poké Radar on a fixed slot
    fn poke_radar<F: StateFilter>(
        &self,
        ctx: &mut DrawContext,
        slot: &Slot,
        index: u8,
        filter: &F,
    ) -> Option<WildStateBuilder> {
        if !filter.accepts_slot(index) {
            return None;
        }

        let lead = self.config.lead;
        let ratio = slot.gender_ratio();
        let attractable = lead.cute_charm_target().filter(|_| is_gendered(ratio));

        let (nature, pid) = if self.config.shiny {
            let mut pid = shiny_pid(ctx, self.tsv);
            if let Some(target) =
                attractable.filter(|_| ctx.next_u16_bounded(3, Bound::Divide) != 0)
            {
                while Gender::from_pid(pid, ratio) != target {
                    pid = shiny_pid(ctx, self.tsv);
                }
            } else if let Some(forced) = lead.synchronize_nature() {
                if ctx.next_u16_bounded(2, Bound::Divide) == 0 {
                    while pid % 25 != u32::from(forced) {
                        pid = shiny_pid(ctx, self.tsv);
                    }
                }
            }

            let nature = (pid % 25) as u8;
            if !filter.accepts_nature(nature) {
                return None;
            }
            (nature, pid)
        } else {
            let offset = attractable
                .filter(|_| ctx.next_u16_bounded(3, Bound::Divide) != 0)
                .map(|target| cute_charm_offset(target, ratio));

            let nature = self.nature(ctx, Bound::Divide);
            if !filter.accepts_nature(nature) {
                return None;
            }
            let pid = match offset {
                Some(offset) => offset + u32::from(nature),
                None => pid_for_nature(ctx, nature),
            };
            (nature, pid)
        };

        let (iv1, iv2) = (ctx.next_u16(), ctx.next_u16());
        let item = held_item(ctx.next_u16_bounded(100, Bound::Modulo), lead, slot);

        Some(
            WildState::builder()
                .pid(pid)
                .nature(nature)
                .ivs(iv1, iv2)
                .level(slot.max_level())
                .encounter_slot(index)
                .item(item)
                .species(slot.species(), ratio),
        )
    }

    /// Pick the encounter slot, honouring slot-narrowing leads
    fn resolve_slot(
        &self,
        ctx: &mut DrawContext,
        area: &EncounterArea,
        bound: Bound,
        lookup: fn(u8, Encounter) -> u8,
    ) -> u8 {
        let lead = self.config.lead;
        let narrowed = area.narrowed_slots(lead);

        if lead.narrowing_type().is_some()
            && ctx.next_u16_bounded(2, bound) != 0
            && !narrowed.is_empty()
        {
            let pick = ctx.next_u16_bounded(narrowed.len() as u16, Bound::Modulo);
            return narrowed[usize::from(pick)];
        }

        let roll = ctx.next_u16_bounded(100, bound) as u8;
        area.clamp_index(lookup(roll, area.encounter())) as u8
    }

    /// Cute Charm roll; on success the PID offset that forces the target
    /// gender
    fn cute_charm(&self, ctx: &mut DrawContext, slot: &Slot, bound: Bound) -> Option<u32> {
        let target = self.config.lead.cute_charm_target()?;
        let ratio = slot.gender_ratio();
        if !is_gendered(ratio) || ctx.next_u16_bounded(3, bound) == 0 {
            return None;
        }
        Some(cute_charm_offset(target, ratio))
    }

    fn nature(&self, ctx: &mut DrawContext, bound: Bound) -> u8 {
        if let Some(forced) = self.config.lead.synchronize_nature() {
            if ctx.next_u16_bounded(2, bound) == 0 {
                return forced;
            }
        }
        ctx.next_u16_bounded(u16::from(NATURE_COUNT), bound) as u8
    }

    /// Bug Catching Contest: reroll nature, PID and IVs until an IV is 31
    fn contest_roll(&self, ctx: &mut DrawContext) -> (u8, u32, u16, u16) {
        let mut rolled = (0, 0, 0, 0);
        for _ in 0..CONTEST_ROLLS {
            let nature = self.nature(ctx, Bound::Modulo);
            let pid = pid_for_nature(ctx, nature);
            let (iv1, iv2) = (ctx.next_u16(), ctx.next_u16());
            rolled = (nature, pid, iv1, iv2);
            if has_perfect_iv(iv1, iv2) {
                break;
            }
        }
        rolled
    }
}

/// PID offset that lands the low byte on the target gender
fn cute_charm_offset(target: Gender, ratio: u8) -> u32 {
    match target {
        Gender::Male => 25 * (u32::from(ratio) / 25 + 1),
        Gender::Female | Gender::Genderless => 0,
    }
}

/// Draw PIDs until one carries `nature`
fn pid_for_nature(ctx: &mut DrawContext, nature: u8) -> u32 {
    loop {
        let pid = ctx.next_pid();
        if pid % 25 == u32::from(nature) {
            return pid;
        }
    }
}

/// Build a PID that is shiny for `tsv` bit by bit
fn shiny_pid(ctx: &mut DrawContext, tsv: u16) -> u32 {
    let mut low = ctx.next_u16_bounded(8, Bound::Modulo);
    let mut high = ctx.next_u16_bounded(8, Bound::Modulo);
    for bit in 3..16 {
        low |= (ctx.next_u16() & 1) << bit;
    }
    high |= (tsv ^ low) & 0xFFF8;
    (u32::from(high) << 16) | u32::from(low)
}

fn has_perfect_iv(iv1: u16, iv2: u16) -> bool {
    (0..3).any(|i| (iv1 >> (5 * i)) & 31 == 31 || (iv2 >> (5 * i)) & 31 == 31)
}

fn held_item(roll: u16, lead: Lead, slot: &Slot) -> u16 {
    if slot.item(0) == slot.item(1) && slot.item(0) != 0 {
        return slot.item(0);
    }
    let [none, common] = ITEM_BREAKPOINTS[usize::from(lead.attracts_items())];
    if roll < none {
        0
    } else if roll < common {
        slot.item(0)
    } else {
        slot.item(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{is_shiny, ElementType};

    fn slot(common: u16, rare: u16) -> Slot {
        Slot::new(1, 5, 5, 127, [ElementType::Normal, ElementType::Normal]).with_items(common, rare)
    }

    #[test]
    fn test_item_breakpoints() {
        let slot = slot(10, 20);
        assert_eq!(held_item(44, Lead::None, &slot), 0);
        assert_eq!(held_item(45, Lead::None, &slot), 10);
        assert_eq!(held_item(95, Lead::None, &slot), 20);
        assert_eq!(held_item(19, Lead::CompoundEyes, &slot), 0);
        assert_eq!(held_item(20, Lead::CompoundEyes, &slot), 10);
        assert_eq!(held_item(80, Lead::CompoundEyes, &slot), 20);
    }

    #[test]
    fn test_identical_items_always_held() {
        let slot = slot(42, 42);
        for roll in 0..100 {
            assert_eq!(held_item(roll, Lead::None, &slot), 42);
        }
    }

    #[test]
    fn test_cute_charm_offsets_force_gender() {
        for ratio in [31u8, 63, 127, 191] {
            for nature in 0..25u32 {
                let male = cute_charm_offset(Gender::Male, ratio) + nature;
                let female = cute_charm_offset(Gender::Female, ratio) + nature;
                assert_eq!(Gender::from_pid(male, ratio), Gender::Male);
                assert_eq!(Gender::from_pid(female, ratio), Gender::Female);
                assert_eq!(male % 25, nature);
            }
        }
    }

    #[test]
    fn test_shiny_pid_is_always_shiny() {
        for seed in 0..500u32 {
            let mut ctx = DrawContext::new(PokeRng::new(seed), 0);
            let pid = shiny_pid(&mut ctx, 0xBEEF);
            assert!(is_shiny(pid, 0xBEEF), "pid {:08X}", pid);
            assert_eq!(ctx.count(), 15);
        }
    }

    #[test]
    fn test_perfect_iv_detection() {
        assert!(has_perfect_iv(31 << 10, 0));
        assert!(has_perfect_iv(0, 31 << 5));
        assert!(!has_perfect_iv(30 | (30 << 5) | (30 << 10), 0));
    }
}
