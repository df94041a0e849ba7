//! Investigation mechanics
//!
//! Searching rooms for clues and questioning suspects. Every clue can be
//! taken once: picking it up empties the room, and a suspect who has talked
//! has nothing more to say.

use super::{Game, GameMessage};
use crate::data::Tone;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a clue came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClueSource {
    /// Found lying in the named room
    Room(String),
    /// Given up by the named suspect
    Testimony(String),
}

impl std::fmt::Display for ClueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClueSource::Room(room) => write!(f, "found in the {}", room),
            ClueSource::Testimony(suspect) => write!(f, "from {}", suspect),
        }
    }
}

/// A clue in the case file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClueEntry {
    pub text: String,
    pub source: ClueSource,
    pub found_at: DateTime<Utc>,
}

/// Everything the detective has collected, in the order it was found
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaseFile {
    entries: Vec<ClueEntry>,
}

impl CaseFile {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, text: String, source: ClueSource) {
        self.entries.push(ClueEntry {
            text,
            source,
            found_at: Utc::now(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClueEntry> {
        self.entries.iter()
    }
}

impl Game {
    /// Pick up the clue in the current room
    pub fn collect_clue(&mut self) -> Vec<GameMessage> {
        let room = self.world.room_mut(self.location);
        let Some(clue) = room.take_clue() else {
            return vec![GameMessage::info("There is no clue in this room!")];
        };

        tracing::info!(case = %self.id, room = %room.name, %clue, "clue collected");
        let message = GameMessage::alert(
            Tone::Discovery,
            &format!("You have collected the clue: {}", clue),
        );
        let source = ClueSource::Room(room.name.clone());
        self.case_file.record(clue, source);

        vec![message]
    }

    /// Question whoever is in the current room
    pub fn interrogate(&mut self) -> Vec<GameMessage> {
        let room = self.world.room_mut(self.location);
        let Some(suspect) = room.suspect.as_mut() else {
            return vec![GameMessage::info("There is no one to interrogate in this room!")];
        };

        self.stats.interrogations += 1;
        let mut results = vec![GameMessage::info(&format!(
            "You are interrogating {}.",
            suspect.name
        ))];

        match suspect.take_testimony() {
            Some(testimony) => {
                tracing::info!(case = %self.id, suspect = %suspect.name, %testimony, "testimony obtained");
                results.push(GameMessage::alert(
                    Tone::Discovery,
                    &format!("You obtained a clue from the interrogation: {}", testimony),
                ));
                let source = ClueSource::Testimony(suspect.name.clone());
                self.case_file.record(testimony, source);
            }
            None => {
                results.push(GameMessage::info(&format!(
                    "{} didn't reveal any clues.",
                    suspect.name
                )));
            }
        }

        results
    }
}
