//! Core game logic and state management

pub mod command;
pub mod investigation;

pub use command::{parse_command, parse_direction, Command, CommandError};
pub use investigation::{CaseFile, ClueEntry, ClueSource};

use crate::data::*;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The main game state
#[derive(Debug, Clone)]
pub struct Game {
    /// Identifies this case in logs
    pub id: Id,

    /// Whether the case is still open
    pub phase: GamePhase,

    /// Rooms and passages; room contents are used up during play
    world: World,

    /// The world as it was before play, for restarting
    pristine: World,

    /// Where the detective is standing
    location: RoomId,

    /// Clues collected so far
    case_file: CaseFile,

    /// Game statistics
    pub stats: GameStats,
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Investigating,
    GameOver(GameOutcome),
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Solved,       // Confronted the murderer with every clue
    Murdered,     // Walked in too early
    Quit,
    InputClosed,  // Ran out of input; treated as quitting
}

impl GameOutcome {
    pub fn description(&self) -> &'static str {
        match self {
            GameOutcome::Solved => "Case solved",
            GameOutcome::Murdered => "Killed by the murderer",
            GameOutcome::Quit => "Investigation abandoned",
            GameOutcome::InputClosed => "Investigation abandoned",
        }
    }
}

/// Actions the player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    Move(Direction),
    CollectClue,
    Interrogate,
    Restart,
    Quit,
}

/// Game statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStats {
    pub started_at: DateTime<Utc>,
    pub moves: u32,
    pub blocked_moves: u32,
    pub interrogations: u32,
    pub rooms_visited: BTreeSet<RoomId>,
}

impl GameStats {
    fn new(start: RoomId) -> Self {
        Self {
            started_at: Utc::now(),
            moves: 0,
            blocked_moves: 0,
            interrogations: 0,
            rooms_visited: BTreeSet::from([start]),
        }
    }

    pub fn elapsed(&self) -> Duration {
        Utc::now() - self.started_at
    }
}

/// A line of output for the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMessage {
    pub tone: Tone,
    pub text: String,
}

impl GameMessage {
    pub fn info(text: &str) -> Self {
        Self {
            tone: Tone::Info,
            text: text.to_string(),
        }
    }

    pub fn alert(tone: Tone, text: &str) -> Self {
        Self {
            tone,
            text: text.to_string(),
        }
    }
}

pub const FAREWELL: &str = "Thanks for playing! See you next time.";
pub const VICTORY: &str = "Congratulations! You have confronted the murderer and solved the mystery!";
pub const DEFEAT: &str = "You have encountered the murderer before collecting all clues. Game Over!";
pub const BLOCKED: &str = "You cannot go that way!";
pub const REOPENED: &str = "The case has been reopened. Every clue is back where it was found.";

impl Game {
    /// Open a new case in the given world
    pub fn new(world: World) -> Self {
        let location = world.start();
        Self {
            id: Id::new(),
            phase: GamePhase::Investigating,
            pristine: world.clone(),
            world,
            location,
            case_file: CaseFile::new(),
            stats: GameStats::new(location),
        }
    }

    /// Open a case in Blackwood Manor
    pub fn standard() -> crate::Result<Self> {
        Ok(Self::new(World::standard()?))
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn location(&self) -> RoomId {
        self.location
    }

    pub fn current_room(&self) -> &Room {
        self.world.room(self.location)
    }

    pub fn case_file(&self) -> &CaseFile {
        &self.case_file
    }

    /// Clue texts in the order they were found
    pub fn inventory(&self) -> Vec<&str> {
        self.case_file.iter().map(|c| c.text.as_str()).collect()
    }

    /// How many clues the detective must hold to win
    pub fn clues_required(&self) -> usize {
        self.world.total_clues()
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    /// Check for game over conditions
    pub fn check_game_over(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::GameOver(outcome) => Some(outcome),
            GamePhase::Investigating => None,
        }
    }

    /// Execute a player action
    pub fn execute_action(&mut self, action: GameAction) -> Vec<GameMessage> {
        if action == GameAction::Restart {
            return self.restart();
        }
        if self.is_over() {
            return vec![GameMessage::alert(Tone::Warning, "The case is closed.")];
        }

        match action {
            GameAction::Move(direction) => self.travel(direction),
            GameAction::CollectClue => self.collect_clue(),
            GameAction::Interrogate => self.interrogate(),
            GameAction::Restart => self.restart(),
            GameAction::Quit => self.quit(),
        }
    }

    /// Walk through the exit in `direction`, if there is one
    pub fn travel(&mut self, direction: Direction) -> Vec<GameMessage> {
        let Some(next) = self.world.destination(self.location, direction) else {
            self.stats.blocked_moves += 1;
            let open: Vec<&str> = self.world.exits(self.location).iter().map(|d| d.name()).collect();
            tracing::debug!(case = %self.id, direction = direction.name(), room = %self.current_room().name, ?open, "no exit");
            return vec![GameMessage::alert(Tone::Warning, BLOCKED)];
        };

        self.location = next;
        self.stats.moves += 1;
        self.stats.rooms_visited.insert(next);

        let room = self.world.room(next);
        tracing::info!(case = %self.id, %direction, room = %room.name, "entered room");

        let mut results = vec![GameMessage::alert(
            Tone::Location,
            &format!("You are now in the {}", room.name),
        )];
        if !room.description.is_empty() {
            results.push(GameMessage::info(&room.description));
        }

        if room.has_murderer() {
            results.push(self.confront());
        }

        results
    }

    /// The murderer is in the room; the case file decides who walks out
    fn confront(&mut self) -> GameMessage {
        let held = self.case_file.len();
        let required = self.clues_required();
        let outcome = if held == required {
            GameOutcome::Solved
        } else {
            GameOutcome::Murdered
        };
        self.phase = GamePhase::GameOver(outcome);
        tracing::info!(case = %self.id, held, required, ?outcome, "confronted the murderer");

        match outcome {
            GameOutcome::Solved => GameMessage::alert(Tone::Victory, VICTORY),
            _ => GameMessage::alert(Tone::Defeat, DEFEAT),
        }
    }

    /// Start the case over: rooms restocked, case file emptied, back at the
    /// start. Works after the game is over too. The case id is kept.
    pub fn restart(&mut self) -> Vec<GameMessage> {
        self.world = self.pristine.clone();
        self.location = self.world.start();
        self.case_file = CaseFile::new();
        self.stats = GameStats::new(self.location);
        self.phase = GamePhase::Investigating;
        tracing::info!(case = %self.id, "case reopened");

        vec![
            GameMessage::info(REOPENED),
            GameMessage::alert(
                Tone::Location,
                &format!("You are back in the {}", self.current_room().name),
            ),
        ]
    }

    /// Stop playing
    pub fn quit(&mut self) -> Vec<GameMessage> {
        self.close(GameOutcome::Quit)
    }

    /// Input ran out; close the case as if the player quit
    pub fn abandon(&mut self) -> Vec<GameMessage> {
        self.close(GameOutcome::InputClosed)
    }

    fn close(&mut self, outcome: GameOutcome) -> Vec<GameMessage> {
        if self.is_over() {
            return Vec::new();
        }
        self.phase = GamePhase::GameOver(outcome);
        tracing::info!(case = %self.id, ?outcome, "case closed");
        vec![GameMessage::info(FAREWELL)]
    }

    /// Check current game status
    pub fn check_status(&self) -> String {
        let elapsed = self.stats.elapsed();
        format!(
            "Clues: {}/{} | Rooms visited: {}/{} | Moves: {} | Interrogations: {} | Time: {}m {:02}s",
            self.case_file.len(),
            self.clues_required(),
            self.stats.rooms_visited.len(),
            self.world.room_count(),
            self.stats.moves,
            self.stats.interrogations,
            elapsed.num_minutes(),
            elapsed.num_seconds() % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::standard().unwrap()
    }

    fn walk(game: &mut Game, route: &str) {
        for symbol in route.chars() {
            let direction = symbol.to_string().parse().unwrap();
            game.execute_action(GameAction::Move(direction));
        }
    }

    fn texts(messages: &[GameMessage]) -> Vec<&str> {
        messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn test_starts_in_entrance_hall() {
        let game = game();

        assert_eq!(game.current_room().name, "Entrance Hall");
        assert!(game.inventory().is_empty());
        assert_eq!(game.phase, GamePhase::Investigating);
        assert_eq!(game.clues_required(), 6);
    }

    #[test]
    fn test_move_east_reaches_library() {
        let mut game = game();

        let results = game.execute_action(GameAction::Move(Direction::East));

        assert_eq!(game.current_room().name, "Library");
        assert_eq!(results[0].text, "You are now in the Library");
        assert_eq!(results[0].tone, Tone::Location);
        assert_eq!(game.stats.moves, 1);
    }

    #[test]
    fn test_blocked_move_keeps_location() {
        let mut game = game();
        let before = game.location();

        let results = game.execute_action(GameAction::Move(Direction::North));

        assert_eq!(game.location(), before);
        assert_eq!(texts(&results), [BLOCKED]);
        assert_eq!(game.stats.moves, 0);
        assert_eq!(game.stats.blocked_moves, 1);
    }

    #[test]
    fn test_entering_cellar_early_is_fatal() {
        let mut game = game();
        walk(&mut game, "SSE");

        assert_eq!(game.current_room().name, "Wine Cellar");
        assert_eq!(game.check_game_over(), Some(GameOutcome::Murdered));
        let last = game.execute_action(GameAction::Move(Direction::West));
        assert_eq!(texts(&last), ["The case is closed."]);
        assert_eq!(game.current_room().name, "Wine Cellar");
    }

    #[test]
    fn test_full_case_file_solves_the_case() {
        let mut game = game();

        walk(&mut game, "E");
        game.execute_action(GameAction::CollectClue);
        game.execute_action(GameAction::Interrogate);
        walk(&mut game, "S");
        game.execute_action(GameAction::CollectClue);
        walk(&mut game, "W");
        game.execute_action(GameAction::CollectClue);
        walk(&mut game, "S");
        game.execute_action(GameAction::CollectClue);
        game.execute_action(GameAction::Interrogate);
        assert_eq!(game.inventory().len(), 6);

        let results = game.execute_action(GameAction::Move(Direction::East));

        assert_eq!(game.check_game_over(), Some(GameOutcome::Solved));
        assert_eq!(results.last().unwrap().text, VICTORY);
        assert_eq!(results.last().unwrap().tone, Tone::Victory);
    }

    #[test]
    fn test_five_clues_is_not_enough() {
        let mut game = game();

        walk(&mut game, "E");
        game.execute_action(GameAction::CollectClue);
        game.execute_action(GameAction::Interrogate);
        walk(&mut game, "SW");
        game.execute_action(GameAction::CollectClue);
        walk(&mut game, "S");
        game.execute_action(GameAction::CollectClue);
        game.execute_action(GameAction::Interrogate);
        assert_eq!(game.inventory().len(), 5);

        let results = game.execute_action(GameAction::Move(Direction::East));

        assert_eq!(game.check_game_over(), Some(GameOutcome::Murdered));
        assert_eq!(results.last().unwrap().text, DEFEAT);
    }

    #[test]
    fn test_quit_ends_the_game() {
        let mut game = game();

        let results = game.execute_action(GameAction::Quit);

        assert_eq!(texts(&results), [FAREWELL]);
        assert_eq!(game.check_game_over(), Some(GameOutcome::Quit));
        assert!(game.abandon().is_empty());
        assert_eq!(game.check_game_over(), Some(GameOutcome::Quit));
    }

    #[test]
    fn test_abandon_counts_as_quitting() {
        let mut game = game();

        let results = game.abandon();

        assert_eq!(texts(&results), [FAREWELL]);
        assert_eq!(game.check_game_over(), Some(GameOutcome::InputClosed));
    }

    #[test]
    fn test_restart_restocks_the_manor() {
        let mut game = game();
        let id = game.id;
        walk(&mut game, "E");
        game.execute_action(GameAction::CollectClue);
        game.execute_action(GameAction::Interrogate);
        assert_eq!(game.inventory().len(), 2);

        let results = game.execute_action(GameAction::Restart);

        assert_eq!(results[0].text, REOPENED);
        assert_eq!(game.current_room().name, "Entrance Hall");
        assert!(game.inventory().is_empty());
        assert_eq!(game.stats.moves, 0);
        assert_eq!(game.stats.interrogations, 0);
        assert_eq!(game.id, id);

        walk(&mut game, "E");
        let again = game.execute_action(GameAction::CollectClue);
        assert_eq!(again[0].text, "You have collected the clue: Bloody Knife");
    }

    #[test]
    fn test_restart_reopens_a_closed_case() {
        let mut game = game();
        walk(&mut game, "SSE");
        assert_eq!(game.check_game_over(), Some(GameOutcome::Murdered));

        game.execute_action(GameAction::Restart);

        assert_eq!(game.phase, GamePhase::Investigating);
        assert_eq!(game.current_room().name, "Entrance Hall");
        assert_eq!(game.clues_required(), 6);
    }

    #[test]
    fn test_status_line_reports_progress() {
        let mut game = game();
        walk(&mut game, "E");
        game.execute_action(GameAction::CollectClue);

        let status = game.check_status();
        assert!(status.starts_with("Clues: 1/6 | Rooms visited: 2/6 | Moves: 1"), "{status}");
    }
}
