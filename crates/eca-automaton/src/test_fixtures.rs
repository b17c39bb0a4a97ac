//! Minimal test fixtures for playback testing.
//!
//! Provides a renderer that records every call it receives, so tests can
//! assert on the exact sequence the controller produced.

use eca_core::Generation;

use crate::render::Renderer;

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    DrawRow {
        row: usize,
        cells: String,
        cell_size: u32,
    },
    SetExtent {
        width: usize,
        height: usize,
    },
    ScrollTo(f32),
    Clear,
}

/// Renderer that keeps a log of calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Drain the log.
    pub fn take_calls(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }

    /// Rows drawn since the last clear, as `0`/`1` strings, in draw order.
    pub fn drawn_rows(&self) -> Vec<(usize, String)> {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == RenderCall::Clear)
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|call| match call {
                RenderCall::DrawRow { row, cells, .. } => Some((*row, cells.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn draw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RenderCall::DrawRow { .. }))
            .count()
    }

    pub fn clear_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == RenderCall::Clear).count()
    }

    /// Fraction passed to the most recent `scroll_to`.
    pub fn last_scroll(&self) -> Option<f32> {
        self.calls.iter().rev().find_map(|call| match call {
            RenderCall::ScrollTo(fraction) => Some(*fraction),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn draw_row(&mut self, generation: &Generation, row: usize, cell_size: u32) {
        self.calls.push(RenderCall::DrawRow {
            row,
            cells: generation.to_string(),
            cell_size,
        });
    }

    fn set_extent(&mut self, width: usize, height: usize) {
        self.calls.push(RenderCall::SetExtent { width, height });
    }

    fn scroll_to(&mut self, fraction: f32) {
        self.calls.push(RenderCall::ScrollTo(fraction));
    }

    fn clear(&mut self) {
        self.calls.push(RenderCall::Clear);
    }
}
