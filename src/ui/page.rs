//! One rendered poll cycle.

use chrono::{DateTime, Local};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::Write;

use super::formatting::format_game_line;
use crate::constants::ui::SECTION_RULE_WIDTH;
use crate::error::AppError;
use crate::evaluator::GameEvaluation;
use crate::monitor::ScoreboardSnapshot;

pub const LIVE_HEADER: &str = "NBA Live Games (Halftime Scores):";
pub const COMPLETED_HEADER: &str = "Completed Games (Halftime Scores):";
pub const NO_GAMES_MESSAGE: &str = "No NBA games with halftime scores available";
pub const EXIT_HINT: &str = "Press Ctrl+C to exit";

#[derive(Debug, Clone, PartialEq)]
struct PageLine {
    text: String,
    emphasized: bool,
}

/// A console page: live section, completed section, error lines and footer.
#[derive(Debug, Clone)]
pub struct StatusPage {
    clear_screen: bool,
    live: Vec<PageLine>,
    completed: Vec<PageLine>,
    errors: Vec<String>,
    updated_at: DateTime<Local>,
}

fn to_line(game: &GameEvaluation) -> PageLine {
    PageLine {
        text: format_game_line(game),
        emphasized: game.is_emphasized(),
    }
}

impl StatusPage {
    /// Empty page. `clear_screen` is off in debug mode so log output
    /// printed between cycles stays visible.
    pub fn new(clear_screen: bool, updated_at: DateTime<Local>) -> Self {
        Self {
            clear_screen,
            live: Vec::new(),
            completed: Vec::new(),
            errors: Vec::new(),
            updated_at,
        }
    }

    pub fn from_snapshot(snapshot: &ScoreboardSnapshot, clear_screen: bool) -> Self {
        let mut page = Self::new(clear_screen, snapshot.updated_at);
        page.live = snapshot.live.iter().map(to_line).collect();
        page.completed = snapshot.completed.iter().map(to_line).collect();
        page
    }

    pub fn add_error_message(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    pub fn has_games(&self) -> bool {
        !self.live.is_empty() || !self.completed.is_empty()
    }

    fn write_section<W: Write>(
        out: &mut W,
        header: &str,
        lines: &[PageLine],
    ) -> Result<(), AppError> {
        queue!(
            out,
            Print(format!("\n{header}\n")),
            Print(format!("{}\n", "-".repeat(SECTION_RULE_WIDTH)))
        )?;

        for line in lines {
            if line.emphasized {
                queue!(
                    out,
                    SetAttribute(Attribute::Bold),
                    Print(&line.text),
                    SetAttribute(Attribute::Reset),
                    Print("\n")
                )?;
            } else {
                queue!(out, Print(&line.text), Print("\n"))?;
            }
        }

        Ok(())
    }

    /// Writes the whole page in one flush.
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        if self.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        // Scoreboard errors replace the game sections for the cycle
        if self.errors.is_empty() {
            if !self.live.is_empty() {
                Self::write_section(out, LIVE_HEADER, &self.live)?;
            }

            if !self.completed.is_empty() {
                if !self.live.is_empty() {
                    queue!(out, Print("\n"))?;
                }
                Self::write_section(out, COMPLETED_HEADER, &self.completed)?;
            }

            if !self.has_games() {
                queue!(out, Print(format!("\n{NO_GAMES_MESSAGE}\n")))?;
            }
        }

        for error in &self.errors {
            queue!(out, Print(format!("{error}\n")))?;
        }

        queue!(
            out,
            Print(format!("\n{EXIT_HINT}\n")),
            Print(format!(
                "\nLast updated: {}\n",
                self.updated_at.format("%I:%M:%S %p")
            ))
        )?;

        out.flush()?;
        Ok(())
    }
}
