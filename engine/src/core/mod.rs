//! Static game tables shared by the generators

pub mod encounter_slot;
