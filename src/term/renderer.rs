//! TerminalRenderer: flushes the game view to a real terminal.
//!
//! Full-grid repaint every frame; the preview and scoreboard only repaint
//! on frames where the snapshot's `update_grid` hint is set, since that is
//! exactly when they can change.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameSnapshot;
use crate::term::game_view::{main_grid, preview_grid, status_line};
use crate::types::{Colour, GRID_HEIGHT, GRID_WIDTH, PREVIEW_SIZE};

/// Screen column where the preview/score sidebar starts (two terminal
/// columns per grid cell, plus the border and a gap).
const SIDEBAR_X: u16 = (GRID_WIDTH as u16) * 2 + 4;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    drawn_once: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            drawn_once: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        if !self.drawn_once {
            self.draw_frame()?;
        }

        self.draw_playfield(snapshot)?;

        if snapshot.update_grid || !self.drawn_once {
            self.draw_sidebar(snapshot)?;
        }
        self.draw_banner(snapshot)?;

        self.drawn_once = true;
        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Static border around the playfield, drawn once.
    fn draw_frame(&mut self) -> Result<()> {
        let inner = (GRID_WIDTH as usize) * 2;
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(ResetColor)?;

        self.stdout.queue(cursor::MoveTo(0, 0))?;
        self.stdout.queue(Print(format!("+{}+", "-".repeat(inner))))?;
        for y in 0..GRID_HEIGHT as u16 {
            self.stdout.queue(cursor::MoveTo(0, y + 1))?;
            self.stdout.queue(Print("|"))?;
            self.stdout.queue(cursor::MoveTo(inner as u16 + 1, y + 1))?;
            self.stdout.queue(Print("|"))?;
        }
        self.stdout.queue(cursor::MoveTo(0, GRID_HEIGHT as u16 + 1))?;
        self.stdout.queue(Print(format!("+{}+", "-".repeat(inner))))?;

        self.stdout.queue(cursor::MoveTo(SIDEBAR_X, 0))?;
        self.stdout.queue(Print("Next"))?;
        Ok(())
    }

    fn draw_playfield(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let grid = main_grid(snapshot);
        for (y, row) in grid.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(1, y as u16 + 1))?;
            for cell in row {
                match cell {
                    Some(colour) => {
                        self.stdout.queue(SetForegroundColor(term_colour(*colour)))?;
                        self.stdout.queue(Print("[]"))?;
                    }
                    None => {
                        self.stdout.queue(ResetColor)?;
                        self.stdout.queue(Print(" ."))?;
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_sidebar(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let preview = preview_grid(snapshot);
        for (y, row) in preview.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(SIDEBAR_X, y as u16 + 1))?;
            for cell in row {
                match cell {
                    Some(colour) => {
                        self.stdout.queue(SetForegroundColor(term_colour(*colour)))?;
                        self.stdout.queue(Print("[]"))?;
                    }
                    None => {
                        self.stdout.queue(ResetColor)?;
                        self.stdout.queue(Print("  "))?;
                    }
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout
            .queue(cursor::MoveTo(SIDEBAR_X, PREVIEW_SIZE as u16 + 2))?;
        self.stdout.queue(Print(status_line(snapshot)))?;
        Ok(())
    }

    fn draw_banner(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout
            .queue(cursor::MoveTo(SIDEBAR_X, PREVIEW_SIZE as u16 + 4))?;
        if snapshot.game_end {
            self.stdout.queue(Print("GAME OVER - press R to restart"))?;
        } else {
            self.stdout.queue(Print("                              "))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn term_colour(colour: Colour) -> Color {
    match colour {
        Colour::Yellow => Color::Yellow,
        Colour::Blue => Color::Blue,
        Colour::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
        Colour::Red => Color::Red,
        Colour::Green => Color::Green,
        Colour::Purple => Color::Magenta,
        Colour::Cyan => Color::Cyan,
    }
}
