//! Rooms and the people found in them

use serde::{Deserialize, Serialize};

/// Name that marks a suspect as the killer
pub const MURDERER: &str = "The Murderer";

/// Someone the detective can question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    pub name: String,
    /// Clue given up under interrogation, taken at most once
    #[serde(default)]
    pub testimony: Option<String>,
}

impl Suspect {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            testimony: None,
        }
    }

    pub fn with_testimony(mut self, testimony: &str) -> Self {
        self.testimony = Some(testimony.to_string());
        self
    }

    pub fn is_murderer(&self) -> bool {
        self.name == MURDERER
    }

    /// Hand over the testimony, leaving nothing behind
    pub fn take_testimony(&mut self) -> Option<String> {
        self.testimony.take()
    }
}

/// A location in the world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Clue lying in the room, taken at most once
    #[serde(default)]
    pub clue: Option<String>,
    #[serde(default)]
    pub suspect: Option<Suspect>,
}

impl Room {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            clue: None,
            suspect: None,
        }
    }

    pub fn with_clue(mut self, clue: &str) -> Self {
        self.clue = Some(clue.to_string());
        self
    }

    pub fn with_suspect(mut self, suspect: Suspect) -> Self {
        self.suspect = Some(suspect);
        self
    }

    /// Pick up the clue, leaving the room empty
    pub fn take_clue(&mut self) -> Option<String> {
        self.clue.take()
    }

    pub fn has_murderer(&self) -> bool {
        self.suspect.as_ref().is_some_and(Suspect::is_murderer)
    }

    /// Clues still obtainable here, from the floor and from the suspect
    pub fn clues_remaining(&self) -> usize {
        let testimony = self
            .suspect
            .as_ref()
            .map_or(0, |s| usize::from(s.testimony.is_some()));
        usize::from(self.clue.is_some()) + testimony
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clue_is_taken_once() {
        let mut room = Room::new("Library", "Shelves to the ceiling.").with_clue("Bloody Knife");

        assert_eq!(room.take_clue().as_deref(), Some("Bloody Knife"));
        assert_eq!(room.take_clue(), None);
        assert_eq!(room.clues_remaining(), 0);
    }

    #[test]
    fn test_testimony_is_taken_once() {
        let mut butler = Suspect::new("The Butler").with_testimony("Library's secret door location");

        assert_eq!(
            butler.take_testimony().as_deref(),
            Some("Library's secret door location")
        );
        assert_eq!(butler.take_testimony(), None);
    }

    #[test]
    fn test_clues_remaining_counts_floor_and_testimony() {
        let room = Room::new("Kitchen", "")
            .with_clue("Vial of Poison")
            .with_suspect(Suspect::new("The Cook").with_testimony("Footsteps"));
        assert_eq!(room.clues_remaining(), 2);

        let quiet = Room::new("Study", "").with_suspect(Suspect::new("The Gardener"));
        assert_eq!(quiet.clues_remaining(), 0);
    }

    #[test]
    fn test_murderer_is_recognised_by_name() {
        let cellar = Room::new("Wine Cellar", "").with_suspect(Suspect::new(MURDERER));
        let hall = Room::new("Entrance Hall", "");

        assert!(cellar.has_murderer());
        assert!(!hall.has_murderer());
    }
}
