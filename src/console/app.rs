//! Interaction loop
//!
//! Show where the detective stands, ask for a command, act on it, report,
//! and repeat until the case is solved, lost, quit, or the input runs dry.

use crate::console::{welcome, Theme, COMMAND_PROMPT, DIRECTION_PROMPT, LOGO};
use crate::data::Tone;
use crate::game::{
    parse_command, parse_direction, Command, Game, GameAction, GameMessage, GameOutcome,
};
use crate::Result;
use anyhow::Context;
use std::io::{BufRead, Write};

/// Whether the loop should keep asking for input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Application state
pub struct App<R, W> {
    pub game: Game,
    pub theme: Theme,
    pub state: LoopState,
    /// Print the logo and welcome lines before the first prompt
    pub show_intro: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            theme: Theme::default(),
            state: LoopState::Running,
            show_intro: true,
            input,
            output,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn without_intro(mut self) -> Self {
        self.show_intro = false;
        self
    }

    /// Give back the output sink, e.g. to inspect a transcript
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until a terminal condition and report how the game ended
    pub fn run(&mut self) -> Result<GameOutcome> {
        tracing::info!(case = %self.game.id, world = %self.game.world().title(), "investigation started");

        if self.show_intro {
            self.print_intro()?;
        }

        while self.state == LoopState::Running {
            self.step()?;
        }

        self.print_summary()?;
        self.output.flush()?;

        // The loop only stops once the game has an outcome
        Ok(self.game.check_game_over().unwrap_or(GameOutcome::InputClosed))
    }

    /// One turn: location, prompt, read, dispatch, report
    pub fn step(&mut self) -> Result<()> {
        let here = format!("You are currently in the {}.", self.game.current_room().name);
        writeln!(self.output, "{}", self.theme.paint(&here, Tone::Location))?;

        let Some(line) = self.prompt(COMMAND_PROMPT)? else {
            return self.input_closed();
        };

        let command = parse_command(&line);
        if let Ok(command) = &command {
            tracing::debug!(case = %self.game.id, command = command.keyword(), "command");
        }

        match command {
            Ok(Command::Move) => {
                let Some(token) = self.prompt(DIRECTION_PROMPT)? else {
                    return self.input_closed();
                };
                match parse_direction(&token) {
                    Ok(direction) => self.act(GameAction::Move(direction))?,
                    Err(e) => self.say(&GameMessage::alert(Tone::Warning, &e.to_string()))?,
                }
            }
            Ok(Command::GetClue) => self.act(GameAction::CollectClue)?,
            Ok(Command::Interrogate) => self.act(GameAction::Interrogate)?,
            Ok(Command::Restart) => self.act(GameAction::Restart)?,
            Ok(Command::Quit) => self.act(GameAction::Quit)?,
            Err(e) => {
                tracing::debug!(case = %self.game.id, input = %line.trim(), "unrecognised command");
                self.say(&GameMessage::alert(Tone::Warning, &e.to_string()))?;
            }
        }

        if self.game.is_over() {
            self.state = LoopState::Terminated;
        }
        Ok(())
    }

    fn act(&mut self, action: GameAction) -> Result<()> {
        for message in self.game.execute_action(action) {
            self.say(&message)?;
        }
        Ok(())
    }

    fn input_closed(&mut self) -> Result<()> {
        // Keep the farewell off the prompt line
        writeln!(self.output)?;
        for message in self.game.abandon() {
            self.say(&message)?;
        }
        self.state = LoopState::Terminated;
        Ok(())
    }

    fn say(&mut self, message: &GameMessage) -> Result<()> {
        tracing::trace!(case = %self.game.id, tone = %message.tone, text = %message.text, "output");
        writeln!(self.output, "{}", self.theme.paint(&message.text, message.tone))?;
        Ok(())
    }

    /// Print a prompt and read the answer; `None` once input is exhausted
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read a line of input")?;
        Ok((read > 0).then_some(line))
    }

    fn print_intro(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.theme.heading(LOGO))?;
        for line in welcome(self.game.world().title()) {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output)?;
        Ok(())
    }

    fn print_summary(&mut self) -> Result<()> {
        let outcome = match self.game.check_game_over() {
            Some(outcome) => outcome.description(),
            None => return Ok(()),
        };

        writeln!(self.output)?;
        writeln!(self.output, "{}", self.theme.heading(&format!("Case summary: {}", outcome)))?;
        writeln!(self.output, "{}", self.theme.dim(&self.game.check_status()))?;
        for entry in self.game.case_file().iter() {
            writeln!(
                self.output,
                "  - {} ({}, {})",
                entry.text,
                entry.source,
                entry.found_at.format("%H:%M:%S")
            )?;
        }
        Ok(())
    }
}
