//! Terminal renderer: one text line per generation.

use std::io::{self, Write};

use eca_automaton::{Generation, Renderer};
use tracing::{trace, warn};

/// Characters used for live and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub live: char,
    pub dead: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            live: '█',
            dead: ' ',
        }
    }
}

impl Glyphs {
    pub const ASCII: Self = Self {
        live: '#',
        dead: '.',
    };
}

/// Writes each drawn row to `out` as soon as it arrives.
///
/// The terminal scrolls on its own, so `scroll_to` only records the
/// fraction. The first write error is kept and later rows are dropped.
pub struct TerminalRenderer<W: Write> {
    out: W,
    glyphs: Glyphs,
    rows: usize,
    last_scroll: f32,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self {
            out,
            glyphs,
            rows: 0,
            last_scroll: 0.0,
            error: None,
        }
    }

    /// Rows written since the last clear.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn last_scroll(&self) -> f32 {
        self.last_scroll
    }

    /// Take the first write error, if any occurred.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&self, generation: &Generation) -> String {
        generation
            .cells()
            .iter()
            .map(|&live| if live { self.glyphs.live } else { self.glyphs.dead })
            .collect()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_row(&mut self, generation: &Generation, row: usize, _cell_size: u32) {
        if self.error.is_some() {
            return;
        }
        let line = self.line(generation);
        let result = writeln!(self.out, "{line}").and_then(|_| self.out.flush());
        match result {
            Ok(()) => self.rows = row + 1,
            Err(e) => {
                warn!(error = %e, row, "terminal_write_failed");
                self.error = Some(e);
            }
        }
    }

    fn set_extent(&mut self, width: usize, height: usize) {
        trace!(width, height, "terminal_extent");
    }

    fn scroll_to(&mut self, fraction: f32) {
        self.last_scroll = fraction;
    }

    fn clear(&mut self) {
        self.rows = 0;
    }
}
