//! Console front end
//!
//! A plain line-at-a-time terminal interface: prompts go to the output,
//! answers come from the input, and game messages are coloured by tone.

pub mod app;

pub use app::App;

use crate::data::Tone;
use crossterm::style::{Color, Stylize};

/// Color scheme for the game
#[derive(Debug, Clone)]
pub struct Theme {
    /// Emit ANSI colours at all
    pub styled: bool,
    pub accent: Color,
    pub location: Color,
    pub discovery: Color,
    pub warning: Color,
    pub victory: Color,
    pub defeat: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            styled: true,
            accent: Color::Cyan,
            location: Color::Blue,
            discovery: Color::Yellow,
            warning: Color::DarkYellow,
            victory: Color::Green,
            defeat: Color::Red,
            muted: Color::DarkGrey,
        }
    }
}

impl Theme {
    /// No escape codes; what tests and pipes want
    pub fn plain() -> Self {
        Self {
            styled: false,
            ..Self::default()
        }
    }

    /// Get color for a message tone
    pub fn tone_color(&self, tone: Tone) -> Option<Color> {
        match tone {
            Tone::Info => None,
            Tone::Location => Some(self.location),
            Tone::Discovery => Some(self.discovery),
            Tone::Warning => Some(self.warning),
            Tone::Victory => Some(self.victory),
            Tone::Defeat => Some(self.defeat),
        }
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        match self.tone_color(tone) {
            Some(color) if self.styled => match tone {
                Tone::Victory | Tone::Defeat => text.with(color).bold().to_string(),
                _ => text.with(color).to_string(),
            },
            _ => text.to_string(),
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.styled {
            text.with(self.accent).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.styled {
            text.with(self.muted).to_string()
        } else {
            text.to_string()
        }
    }
}

/// ASCII art logo
pub const LOGO: &str = r#"
+--------------------------------------------------+
|   __  __                          __  __         |
|  |  \/  | __ _ _ __   ___  _ __  |  \/  |_   _   |
|  | |\/| |/ _` | '_ \ / _ \| '__| | |\/| | | | |  |
|  | |  | | (_| | | | | (_) | |    | |  | | |_| |  |
|  |_|  |_|\__,_|_| |_|\___/|_|    |_|  |_|\__, |  |
|                                          |___/   |
|              A  M U R D E R  M Y S T E R Y       |
+--------------------------------------------------+
"#;

pub const COMMAND_PROMPT: &str = "What would you like to do? (Move/Get Clue/Interrogate/Restart/Quit) ";
pub const DIRECTION_PROMPT: &str = "Which direction? (N/E/S/W) ";

/// Opening lines shown before the first prompt
pub fn welcome(title: &str) -> Vec<String> {
    vec![
        format!("Welcome to {}!", title),
        "Your goal is to collect all clues and interrogate all suspects to find the murderer!"
            .to_string(),
        "Good luck! And stay safe!".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_leaves_text_alone() {
        let theme = Theme::plain();

        assert_eq!(theme.paint("Bloody Knife", Tone::Discovery), "Bloody Knife");
        assert_eq!(theme.heading("Case summary"), "Case summary");
    }

    #[test]
    fn test_styled_theme_adds_escape_codes() {
        let theme = Theme::default();

        let painted = theme.paint("Game Over!", Tone::Defeat);
        assert!(painted.contains("Game Over!"));
        assert!(painted.contains('\u{1b}'));
    }

    #[test]
    fn test_info_is_never_coloured() {
        let theme = Theme::default();

        assert_eq!(theme.paint("Nothing here.", Tone::Info), "Nothing here.");
    }

    #[test]
    fn test_welcome_names_the_world() {
        assert_eq!(welcome("Blackwood Manor")[0], "Welcome to Blackwood Manor!");
    }
}
