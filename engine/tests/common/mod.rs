//! Encounter areas shared by the integration tests

#![allow(dead_code)]

use wild_finder_core::models::{ElementType, Encounter, EncounterArea, Slot};

/// Twelve grass slots: Starly line in most slots, Magnemite in slot 8 and
/// Shinx in slot 9
pub fn grass() -> EncounterArea {
    let slots = (0..12u16)
        .map(|i| match i {
            8 => Slot::new(81, 3, 3, 255, [ElementType::Electric, ElementType::Steel])
                .with_items(0, 233),
            9 => Slot::new(403, 4, 4, 127, [ElementType::Electric, ElementType::Electric]),
            _ => {
                let level = 2 + (i % 3) as u8;
                Slot::new(396 + i % 3, level, level, 127, [ElementType::Normal, ElementType::Flying])
            }
        })
        .collect();
    EncounterArea::new(201, 20, Encounter::Grass, slots).unwrap()
}

pub fn surf() -> EncounterArea {
    EncounterArea::new(
        202,
        10,
        Encounter::Surfing,
        vec![
            Slot::new(72, 20, 30, 127, [ElementType::Water, ElementType::Poison]),
            Slot::new(73, 20, 40, 127, [ElementType::Water, ElementType::Poison]),
            Slot::new(54, 20, 30, 127, [ElementType::Water, ElementType::Water]),
            Slot::new(55, 30, 40, 127, [ElementType::Water, ElementType::Water]),
            Slot::new(195, 25, 35, 127, [ElementType::Water, ElementType::Ground]),
        ],
    )
    .unwrap()
}

pub fn rod(encounter: Encounter, rate: u8) -> EncounterArea {
    EncounterArea::new(
        203,
        rate,
        encounter,
        vec![
            Slot::new(129, 10, 15, 127, [ElementType::Water, ElementType::Water]),
            Slot::new(118, 10, 20, 127, [ElementType::Water, ElementType::Water]),
            Slot::new(119, 20, 25, 127, [ElementType::Water, ElementType::Water]),
            Slot::new(130, 25, 30, 127, [ElementType::Water, ElementType::Flying]),
            Slot::new(223, 20, 25, 127, [ElementType::Water, ElementType::Water]),
        ],
    )
    .unwrap()
}

pub fn rock_smash() -> EncounterArea {
    EncounterArea::new(
        204,
        40,
        Encounter::RockSmash,
        vec![
            Slot::new(74, 5, 10, 127, [ElementType::Rock, ElementType::Ground]),
            Slot::new(213, 5, 10, 127, [ElementType::Bug, ElementType::Rock]),
        ],
    )
    .unwrap()
}

pub fn bug_contest() -> EncounterArea {
    let slots = (0..10u16)
        .map(|i| {
            let slot = Slot::new(
                10 + i,
                7 + i as u8,
                10 + i as u8,
                127,
                [ElementType::Bug, ElementType::Bug],
            );
            if i == 5 {
                slot.with_items(0, 222)
            } else {
                slot
            }
        })
        .collect();
    EncounterArea::new(205, 100, Encounter::BugCatchingContest, slots).unwrap()
}

/// One grass slot, species 1 at level 5
pub fn single_slot() -> EncounterArea {
    EncounterArea::new(
        1,
        20,
        Encounter::Grass,
        vec![Slot::new(1, 5, 5, 127, [ElementType::Normal, ElementType::Normal])],
    )
    .unwrap()
}
