//! Blackwood Manor, the built-in case
//!
//! Six rooms, five suspects, six clues. The Wine Cellar is only reachable
//! through the Kitchen, so a careful detective can sweep the house first.

use super::{Direction, Passage, Room, Suspect, WorldDef, MURDERER};
use super::Direction::{East, North, South, West};

pub const START_ROOM: &str = "Entrance Hall";

const PASSAGES: &[(&str, Direction, &str)] = &[
    ("Entrance Hall", East, "Library"),
    ("Entrance Hall", South, "Ballroom"),
    ("Library", West, "Entrance Hall"),
    ("Library", South, "Study"),
    ("Study", North, "Library"),
    ("Study", West, "Ballroom"),
    ("Ballroom", North, "Entrance Hall"),
    ("Ballroom", East, "Study"),
    ("Ballroom", South, "Kitchen"),
    ("Kitchen", North, "Ballroom"),
    ("Kitchen", East, "Wine Cellar"),
    ("Wine Cellar", West, "Kitchen"),
];

fn rooms() -> Vec<Room> {
    vec![
        Room::new(
            START_ROOM,
            "Rain drums on the tall windows. A grandfather clock has stopped at a quarter past midnight.",
        ),
        Room::new(
            "Library",
            "Leather spines line every wall. One shelf sits a finger's width proud of the others.",
        )
        .with_clue("Bloody Knife")
        .with_suspect(Suspect::new("The Butler").with_testimony("Library's secret door location")),
        Room::new(
            "Study",
            "Papers are strewn across the desk and the fire has burned down to embers.",
        )
        .with_clue("Burned Letter")
        .with_suspect(Suspect::new("The Gardener")),
        Room::new(
            "Ballroom",
            "Chairs are still pushed back from last night's dance. Glass crunches underfoot.",
        )
        .with_clue("Shattered Pocket Watch")
        .with_suspect(Suspect::new("The Maid")),
        Room::new(
            "Kitchen",
            "Copper pans hang over a scrubbed table. Something bitter lingers in the air.",
        )
        .with_clue("Vial of Poison")
        .with_suspect(
            Suspect::new("The Cook")
                .with_testimony("Footsteps heading to the Wine Cellar at midnight"),
        ),
        Room::new(
            "Wine Cellar",
            "Cold stone and racks of dusty bottles. A figure waits in the dark.",
        )
        .with_suspect(Suspect::new(MURDERER)),
    ]
}

/// Definition of the built-in manor
pub fn blackwood_manor() -> WorldDef {
    WorldDef {
        title: "Blackwood Manor".to_string(),
        start: START_ROOM.to_string(),
        rooms: rooms(),
        passages: PASSAGES
            .iter()
            .map(|&(from, direction, to)| Passage::new(from, direction, to))
            .collect(),
    }
}
