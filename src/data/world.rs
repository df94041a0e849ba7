//! The world graph
//!
//! Rooms are joined by one-way passages, each leaving a room in one compass
//! direction. A world is authored as a [`WorldDef`] (rooms plus a table of
//! passages) and checked once by [`World::build`]. After that the layout never
//! changes; only the clues and testimonies inside rooms get used up.

use super::{manor, Direction, Room};
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::path::Path;

/// One directed connection between two rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub from: String,
    pub direction: Direction,
    pub to: String,
}

impl Passage {
    pub fn new(from: &str, direction: Direction, to: &str) -> Self {
        Self {
            from: from.to_string(),
            direction,
            to: to.to_string(),
        }
    }
}

/// Authored description of a world, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldDef {
    pub title: String,
    /// Name of the room the detective starts in
    pub start: String,
    pub rooms: Vec<Room>,
    pub passages: Vec<Passage>,
}

/// Index of a room inside its world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(usize);

/// A validated world, ready to play
#[derive(Debug, Clone)]
pub struct World {
    title: String,
    rooms: Vec<Room>,
    by_name: HashMap<String, RoomId>,
    exits: Vec<BTreeMap<Direction, RoomId>>,
    start: RoomId,
    total_clues: usize,
}

impl World {
    /// Validate a definition and index it for play
    pub fn build(def: WorldDef) -> Result<Self, GameError> {
        let WorldDef {
            title,
            start,
            rooms,
            passages,
        } = def;

        let mut by_name = HashMap::with_capacity(rooms.len());
        for (i, room) in rooms.iter().enumerate() {
            if by_name.insert(room.name.clone(), RoomId(i)).is_some() {
                return Err(GameError::DuplicateRoom(room.name.clone()));
            }
        }

        let start = *by_name
            .get(&start)
            .ok_or_else(|| GameError::StartRoomNotFound(start.clone()))?;

        let mut exits = vec![BTreeMap::new(); rooms.len()];
        for passage in &passages {
            let from = *by_name
                .get(&passage.from)
                .ok_or_else(|| GameError::UnknownPassageSource(passage.from.clone()))?;
            let to = *by_name.get(&passage.to).ok_or_else(|| GameError::UnknownRoom {
                from: passage.from.clone(),
                to: passage.to.clone(),
            })?;
            if exits[from.0].insert(passage.direction, to).is_some() {
                return Err(GameError::DuplicateExit {
                    room: passage.from.clone(),
                    direction: passage.direction,
                });
            }
        }

        let murderers = rooms.iter().filter(|r| r.has_murderer()).count();
        if murderers != 1 {
            return Err(GameError::MurdererCount(murderers));
        }

        let total_clues = rooms.iter().map(Room::clues_remaining).sum();
        if total_clues == 0 {
            return Err(GameError::NoClues);
        }

        let world = Self {
            title,
            rooms,
            by_name,
            exits,
            start,
            total_clues,
        };

        if let Some((_, lost)) = world.rooms().find(|(id, _)| world.route(start, *id).is_none()) {
            return Err(GameError::Unreachable(lost.name.clone()));
        }

        // Walking in on the murderer ends the game, so nothing there or beyond
        // can count toward the case file
        let safe = world.safe_rooms();
        if let Some((_, lost)) = world
            .rooms()
            .find(|(id, room)| room.clues_remaining() > 0 && !safe[id.0])
        {
            return Err(GameError::UnobtainableClue(lost.name.clone()));
        }

        Ok(world)
    }

    /// The built-in manor
    pub fn standard() -> Result<Self, GameError> {
        Self::build(manor::blackwood_manor())
    }

    /// Read a JSON world definition from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let def: WorldDef = serde_json::from_str(&text)?;
        let world = Self::build(def)?;
        tracing::info!(
            path = %path.display(),
            title = %world.title,
            rooms = world.rooms.len(),
            clues = world.total_clues,
            "world loaded"
        );
        Ok(world)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub(crate) fn room_mut(&mut self, id: RoomId) -> &mut Room {
        &mut self.rooms[id.0]
    }

    pub fn room_id(&self, name: &str) -> Option<RoomId> {
        self.by_name.get(name).copied()
    }

    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.room_id(name).map(|id| self.room(id))
    }

    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Where the exit in `direction` leads, if there is one
    pub fn destination(&self, from: RoomId, direction: Direction) -> Option<RoomId> {
        self.exits[from.0].get(&direction).copied()
    }

    /// Exits out of a room, in compass order
    pub fn exits(&self, from: RoomId) -> Vec<Direction> {
        self.exits[from.0].keys().copied().collect()
    }

    /// Number of clues obtainable when the world was built; every one can be
    /// collected before meeting the murderer
    pub fn total_clues(&self) -> usize {
        self.total_clues
    }

    /// Shortest walk from one room to another, both ends included
    pub fn route(&self, from: RoomId, to: RoomId) -> Option<Vec<RoomId>> {
        let mut came_from: Vec<Option<RoomId>> = vec![None; self.rooms.len()];
        let mut seen = vec![false; self.rooms.len()];
        let mut queue = VecDeque::from([from]);
        seen[from.0] = true;

        while let Some(current) = queue.pop_front() {
            if current == to {
                let mut path = vec![to];
                let mut step = to;
                while let Some(prev) = came_from[step.0] {
                    path.push(prev);
                    step = prev;
                }
                path.reverse();
                return Some(path);
            }
            for &next in self.exits[current.0].values() {
                if !seen[next.0] {
                    seen[next.0] = true;
                    came_from[next.0] = Some(current);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    /// Rooms the detective can walk into before meeting the murderer
    fn safe_rooms(&self) -> Vec<bool> {
        let mut safe = vec![false; self.rooms.len()];
        let mut queue = VecDeque::from([self.start]);
        safe[self.start.0] = true;

        while let Some(current) = queue.pop_front() {
            for &next in self.exits[current.0].values() {
                if !safe[next.0] && !self.rooms[next.0].has_murderer() {
                    safe[next.0] = true;
                    queue.push_back(next);
                }
            }
        }
        safe
    }
}
