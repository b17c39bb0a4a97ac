//! Scrollable canvas that paints the raster.

use egui::{Color32, Rect, ScrollArea, Sense, Ui, Vec2};

use eca_automaton::RasterRenderer;

/// Colors for the grid.
#[derive(Debug, Clone, Copy)]
pub struct CanvasStyle {
    pub background: Color32,
    pub cell: Color32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            cell: Color32::BLACK,
        }
    }
}

/// Row indices that intersect `[top, top + height)` for a given cell size.
pub fn rows_in_view(top: f32, height: f32, cell_size: u32) -> std::ops::Range<usize> {
    if cell_size == 0 || height <= 0.0 {
        return 0..0;
    }
    let cell = cell_size as f32;
    let first = (top.max(0.0) / cell).floor() as usize;
    let last = ((top.max(0.0) + height) / cell).ceil() as usize;
    first..last
}

/// Paint the raster inside a scroll area.
///
/// With `follow` set the vertical offset is forced to the raster's scroll
/// fraction, otherwise the user scrolls freely.
pub fn show(ui: &mut Ui, raster: &RasterRenderer, style: CanvasStyle, follow: bool) {
    let (content_w, content_h) = raster.extent();
    let content = Vec2::new(content_w as f32, content_h as f32);

    let mut area = ScrollArea::both()
        .id_salt("eca_canvas")
        .auto_shrink([false; 2]);
    if follow {
        let offset = raster.viewport(ui.available_height()).offset();
        area = area.vertical_scroll_offset(offset);
    }

    area.show_viewport(ui, |ui, viewport| {
        let (rect, _) = ui.allocate_exact_size(content, Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, style.background);

        let rows = rows_in_view(viewport.min.y, viewport.height(), raster.cell_size());
        for cell in raster.filled_cells() {
            let row = cell.y / cell.size.max(1) as usize;
            if !rows.contains(&row) {
                continue;
            }
            let min = rect.min + Vec2::new(cell.x as f32, cell.y as f32);
            let cell_rect = Rect::from_min_size(min, Vec2::splat(cell.size as f32));
            painter.rect_filled(cell_rect, 0.0, style.cell);
        }
    });
}
