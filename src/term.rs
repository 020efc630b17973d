use std::fs;
use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{cursor, execute, queue, style, terminal};
use log::warn;

use crate::config::GameConfig;
use crate::game::Frame;
use crate::point::Point;

const BODY_CHAR: char = '█';
const HEAD_CHAR: char = '▓';
const FOOD_FALLBACK_CHAR: char = 'O';
const SPRITE_FILE: &str = "assets/apple.txt";
const TITLE: &str = "Snake";

// Grid cells are drawn two columns wide so they come out roughly square.
// Row 0 holds the score, the border box starts on row 1.
const CELL_COLS: u16 = 2;
const BORDER_TOP: u16 = 1;

/// Crossterm rendering collaborator. Draws each frame from a read-only
/// [`Frame`] snapshot and owns the terminal mode switching around the game.
pub struct TermRenderer {
    stdout: Stdout,
    width: u16,
    height: u16,
    food_glyph: Option<char>,
}

impl TermRenderer {
    /// Fails when the terminal cannot fit the configured board.
    pub fn new(config: &GameConfig) -> crossterm::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let needed_cols = CELL_COLS * config.width + 2;
        let needed_rows = config.height + 3;
        if cols < needed_cols || rows < needed_rows {
            let message = format!(
                "terminal is too small: the board needs {}x{}, got {}x{}",
                needed_cols, needed_rows, cols, rows
            );
            return Err(crossterm::ErrorKind::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                message,
            )));
        }

        let food_glyph = if config.images { load_sprite(SPRITE_FILE) } else { None };

        Ok(TermRenderer {
            stdout: stdout(),
            width: config.width,
            height: config.height,
            food_glyph,
        })
    }

    pub fn setup(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide)?;

        // Cosmetic only, some terminals refuse title changes
        if execute!(self.stdout, SetTitle(TITLE)).is_err() {
            warn!("could not set the terminal title");
        }

        Ok(())
    }

    pub fn restore(&mut self) -> crossterm::Result<()> {
        execute!(self.stdout, cursor::Show)?;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Drains every pending key event without blocking.
    pub fn read_key_events_queue(&self) -> crossterm::Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    /// Draws one full frame and presents it.
    pub fn draw(&mut self, frame: &Frame) -> crossterm::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        self.draw_borders()?;

        for cell in frame.body {
            self.print_cell(*cell, BODY_CHAR)?;
        }
        self.print_cell(frame.head, HEAD_CHAR)?;

        let glyph = self.food_glyph.unwrap_or(FOOD_FALLBACK_CHAR);
        self.print_cell(frame.food, glyph)?;

        queue!(
            self.stdout,
            cursor::MoveTo(1, 0),
            style::Print(format!("Score: {}", frame.score))
        )?;

        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self) -> crossterm::Result<()> {
        let cols = CELL_COLS * self.width + 2;
        let bottom = BORDER_TOP + self.height + 1;

        for x in 0..cols {
            let ch = if x == 0 || x == cols - 1 { '+' } else { '-' };
            self.print_at((x, BORDER_TOP), ch)?;
            self.print_at((x, bottom), ch)?;
        }

        for y in BORDER_TOP + 1..bottom {
            self.print_at((0, y), '|')?;
            self.print_at((cols - 1, y), '|')?;
        }

        Ok(())
    }

    fn print_cell(&mut self, cell: Point, ch: char) -> crossterm::Result<()> {
        let x = 1 + CELL_COLS * cell.x as u16;
        let y = BORDER_TOP + 1 + cell.y as u16;
        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            style::Print(ch),
            style::Print(ch)
        )
    }

    fn print_at(&mut self, pos: (u16, u16), ch: char) -> crossterm::Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))
    }
}

fn load_sprite(path: &str) -> Option<char> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let glyph = contents.chars().find(|ch| !ch.is_whitespace());
            if glyph.is_none() {
                warn!("sprite file << {} >> is empty, using the fallback glyph", path);
            }
            glyph
        }
        Err(err) => {
            warn!("could not load sprite << {} >>: {}", path, err);
            None
        }
    }
}
