//! Manor Mystery
//!
//! A text-driven murder mystery. Walk the rooms of a manor, pick up clues,
//! question the household, and confront the murderer once the case file is
//! complete. Walk in too early and the case ends badly.
//!
//! # Game Mechanics
//!
//! - **Exploration**: rooms are joined by one-way compass passages
//! - **Clues**: every room clue and every testimony can be taken exactly once
//! - **Confrontation**: entering the murderer's room ends the game
//!
//! # Architecture
//!
//! - `data` - Rooms, suspects, and the world graph
//! - `game` - Game state, command parsing, action handlers
//! - `console` - Line-oriented terminal front end

pub mod console;
pub mod data;
pub mod game;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Errors raised while building or loading a world
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Room defined twice: {0}")]
    DuplicateRoom(String),

    #[error("Start room not found: {0}")]
    StartRoomNotFound(String),

    #[error("Passage starts in unknown room: {0}")]
    UnknownPassageSource(String),

    #[error("Passage from {from} leads to unknown room: {to}")]
    UnknownRoom { from: String, to: String },

    #[error("Room {room} has two exits to the {direction}")]
    DuplicateExit { room: String, direction: Direction },

    #[error("World must contain exactly one murderer, found {0}")]
    MurdererCount(usize),

    #[error("World has no clues to collect")]
    NoClues,

    #[error("Room cannot be reached from the start: {0}")]
    Unreachable(String),

    #[error("Clue in {0} cannot be collected before meeting the murderer")]
    UnobtainableClue(String),

    #[error("Could not read world file: {0}")]
    Io(#[from] std::io::Error),

    #[error("World file corrupted: {0}")]
    Parse(#[from] serde_json::Error),
}
