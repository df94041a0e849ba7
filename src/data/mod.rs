//! Data structures for the game world
//!
//! Defines rooms, suspects, compass directions, and the world graph.

pub mod manor;
pub mod room;
pub mod world;

pub use room::*;
pub use world::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Compass directions a passage can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N", alias = "North")]
    North,
    #[serde(rename = "E", alias = "East")]
    East,
    #[serde(rename = "S", alias = "South")]
    South,
    #[serde(rename = "W", alias = "West")]
    West,
}

impl Direction {
    /// Every direction, in the order exits are listed
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn symbol(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How a line of game output should read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Info,
    Location,
    Discovery,
    Warning,
    Victory,
    Defeat,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Info => write!(f, "INFO"),
            Tone::Location => write!(f, "LOCATION"),
            Tone::Discovery => write!(f, "DISCOVERY"),
            Tone::Warning => write!(f, "WARNING"),
            Tone::Victory => write!(f, "VICTORY"),
            Tone::Defeat => write!(f, "DEFEAT"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
