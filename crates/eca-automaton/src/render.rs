//! Rendering contract consumed by the controller, plus an in-memory raster.
//!
//! The controller only ever writes to a [`Renderer`]; it never reads drawn
//! content back. Concrete surfaces (an egui canvas, a terminal, a test
//! recorder) implement the trait and keep whatever they need to repaint.

use std::collections::BTreeMap;

use eca_core::Generation;

/// Drawing surface for a growing, append-only grid of generations.
pub trait Renderer {
    /// Paint the live cells of `generation` as filled squares at
    /// `(column * cell_size, row * cell_size)`. Dead cells are left alone.
    fn draw_row(&mut self, generation: &Generation, row: usize, cell_size: u32);

    /// Declare the full scrollable content size.
    fn set_extent(&mut self, width: usize, height: usize);

    /// Move the visible window to `fraction` (0 = top, 1 = bottom) of the content.
    fn scroll_to(&mut self, fraction: f32);

    /// Wipe everything drawn so far.
    fn clear(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_row(&mut self, generation: &Generation, row: usize, cell_size: u32) {
        (**self).draw_row(generation, row, cell_size)
    }

    fn set_extent(&mut self, width: usize, height: usize) {
        (**self).set_extent(width, height)
    }

    fn scroll_to(&mut self, fraction: f32) {
        (**self).scroll_to(fraction)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn draw_row(&mut self, generation: &Generation, row: usize, cell_size: u32) {
        (**self).draw_row(generation, row, cell_size)
    }

    fn set_extent(&mut self, width: usize, height: usize) {
        (**self).set_extent(width, height)
    }

    fn scroll_to(&mut self, fraction: f32) {
        (**self).scroll_to(fraction)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// Maps a scroll fraction onto a pixel offset for a window of fixed height
/// looking into taller content.
///
/// The offset grows linearly from 0 (top of content at the top of the window)
/// to `content - visible` (bottom of content at the bottom of the window), so
/// the row at `fraction * content` is always inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub content_height: f32,
    pub visible_height: f32,
    pub fraction: f32,
}

impl Viewport {
    pub fn new(content_height: f32, visible_height: f32) -> Self {
        Self {
            content_height,
            visible_height,
            fraction: 0.0,
        }
    }

    pub fn scroll_to(&mut self, fraction: f32) {
        self.fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
    }

    /// Largest meaningful offset; zero when the content fits.
    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.visible_height).max(0.0)
    }

    /// Offset of the top edge of the window into the content.
    pub fn offset(&self) -> f32 {
        self.max_offset() * self.fraction
    }

    /// Content-space range `[top, bottom)` currently visible.
    pub fn visible_range(&self) -> (f32, f32) {
        let top = self.offset();
        (top, (top + self.visible_height).min(self.content_height.max(top)))
    }
}

/// A filled square in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: usize,
    pub y: usize,
    pub size: u32,
}

/// Renderer that keeps the drawn grid in memory.
///
/// Used by the desktop app as its paint source and by tests to assert on
/// exactly what was drawn.
#[derive(Debug, Clone, Default)]
pub struct RasterRenderer {
    /// Live columns per drawn row.
    rows: BTreeMap<usize, Vec<usize>>,
    cell_size: u32,
    extent: (usize, usize),
    viewport: Viewport,
}

impl RasterRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full content size as last declared.
    pub fn extent(&self) -> (usize, usize) {
        self.extent
    }

    /// Cell size used by the most recent draw.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn scroll_fraction(&self) -> f32 {
        self.viewport.fraction
    }

    /// Viewport for a window of the given height over the current extent.
    pub fn viewport(&self, visible_height: f32) -> Viewport {
        Viewport {
            content_height: self.extent.1 as f32,
            visible_height,
            fraction: self.viewport.fraction,
        }
    }

    pub fn rows_drawn(&self) -> usize {
        self.rows.len()
    }

    /// Live columns of a drawn row.
    pub fn row(&self, row: usize) -> Option<&[usize]> {
        self.rows.get(&row).map(Vec::as_slice)
    }

    /// Every filled square, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = CellRect> + '_ {
        let size = self.cell_size;
        self.rows.iter().flat_map(move |(&row, columns)| {
            columns.iter().map(move |&column| CellRect {
                x: column * size as usize,
                y: row * size as usize,
                size,
            })
        })
    }

    /// Drawn rows as `#`/`.` text; undrawn rows are omitted.
    pub fn to_ascii(&self, width: usize) -> String {
        let mut out = String::new();
        for columns in self.rows.values() {
            let mut line = vec!['.'; width];
            for &column in columns {
                if let Some(cell) = line.get_mut(column) {
                    *cell = '#';
                }
            }
            out.extend(line);
            out.push('\n');
        }
        out
    }
}

impl Renderer for RasterRenderer {
    fn draw_row(&mut self, generation: &Generation, row: usize, cell_size: u32) {
        self.cell_size = cell_size;
        self.rows.insert(row, generation.live_columns().collect());
    }

    fn set_extent(&mut self, width: usize, height: usize) {
        self.extent = (width, height);
        self.viewport.content_height = height as f32;
    }

    fn scroll_to(&mut self, fraction: f32) {
        self.viewport.scroll_to(fraction);
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}
