//! Range slider widget: draws a `RenderPlan` onto terminal cells.
//!
//! The slider core works in pixels. Each terminal cell stands for a
//! `CELL_WIDTH_PX × CELL_HEIGHT_PX` block, so a two-row slider has a 32px
//! thumb diameter and mouse cells map to the pixel at the cell's centre.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use rangeslider_core::render::RenderPlan;
use rangeslider_core::{Point, Rect as PxRect};

use crate::theme::{self, Theme};

pub const CELL_WIDTH_PX: f64 = 8.0;
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Maps between terminal cells inside `area` and slider-local pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellGrid {
    pub area: Rect,
}

impl CellGrid {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    /// Slider bounds in pixels.
    pub fn size_px(&self) -> (f64, f64) {
        (
            f64::from(self.area.width) * CELL_WIDTH_PX,
            f64::from(self.area.height) * CELL_HEIGHT_PX,
        )
    }

    pub fn contains_cell(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }

    /// Centre of a terminal cell in slider pixels. Cells left of or above
    /// the area give negative coordinates, which drags need.
    pub fn point_for_cell(&self, column: u16, row: u16) -> Point {
        let dx = f64::from(column) - f64::from(self.area.x);
        let dy = f64::from(row) - f64::from(self.area.y);
        Point::new(
            (dx + 0.5) * CELL_WIDTH_PX,
            (dy + 0.5) * CELL_HEIGHT_PX,
        )
    }

    /// Absolute terminal columns covered by `[x0, x1)` pixels, clipped to the area.
    pub fn columns(&self, x0: f64, x1: f64) -> std::ops::Range<u16> {
        let first = (x0 / CELL_WIDTH_PX).floor().max(0.0);
        let last = (x1 / CELL_WIDTH_PX).ceil().min(f64::from(self.area.width));
        if !(first < last) {
            return self.area.x..self.area.x;
        }
        (self.area.x + first as u16)..(self.area.x + last as u16)
    }

    /// Absolute terminal row containing pixel row `y`, clipped to the area.
    pub fn row(&self, y: f64) -> u16 {
        let max = f64::from(self.area.height.saturating_sub(1));
        let r = (y / CELL_HEIGHT_PX).floor().max(0.0).min(max);
        self.area.y + r as u16
    }

    pub fn rows(&self, rect: &PxRect) -> std::ops::RangeInclusive<u16> {
        self.row(rect.min_y())..=self.row((rect.max_y() - 1.0).max(rect.min_y()))
    }
}

pub struct SliderWidget<'a> {
    plan: &'a RenderPlan,
    theme: Theme,
}

impl<'a> SliderWidget<'a> {
    pub fn new(plan: &'a RenderPlan) -> Self {
        Self {
            plan,
            theme: Theme::default(),
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

fn paint(buf: &mut Buffer, column: u16, row: u16, symbol: &str, fg: Color) {
    if let Some(cell) = buf.cell_mut((column, row)) {
        cell.set_symbol(symbol).set_fg(fg);
    }
}

impl Widget for SliderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let grid = CellGrid::new(area);
        let plan = self.plan;

        // Track: a thin line across the middle row.
        let track_row = grid.row(plan.track.rect.min_y() + plan.track.rect.height / 2.0);
        let track_color = theme::rgba(plan.track.fill);
        for column in grid.columns(plan.track.rect.min_x(), plan.track.rect.max_x()) {
            paint(buf, column, track_row, "─", track_color);
        }

        // Highlight: gradient between the thumb centres.
        let highlight = &plan.highlight;
        let span = highlight.rect.width.max(f64::EPSILON);
        for column in grid.columns(highlight.rect.min_x(), highlight.rect.max_x()) {
            let x = (f64::from(column - area.x) + 0.5) * CELL_WIDTH_PX;
            let t = (x - highlight.rect.min_x()) / span;
            let color = highlight.gradient_start.lerp(highlight.gradient_end, t);
            paint(buf, column, track_row, "━", theme::rgba(color));
        }

        // Thumbs last so they sit on top of the track.
        for thumb in [&plan.lower_thumb, &plan.upper_thumb] {
            let color = self.theme.thumb_color(thumb.highlighted);
            for row in grid.rows(&thumb.frame) {
                for column in grid.columns(thumb.frame.min_x(), thumb.frame.max_x()) {
                    paint(buf, column, row, "█", color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeslider_core::RangeSlider;

    fn grid() -> CellGrid {
        CellGrid::new(Rect::new(4, 2, 40, 2))
    }

    #[test]
    fn size_in_pixels() {
        assert_eq!(grid().size_px(), (320.0, 32.0));
    }

    #[test]
    fn cell_centres_map_to_pixels() {
        let g = grid();
        assert_eq!(g.point_for_cell(4, 2), Point::new(4.0, 8.0));
        assert_eq!(g.point_for_cell(5, 3), Point::new(12.0, 24.0));
        assert_eq!(g.point_for_cell(0, 2), Point::new(-28.0, 8.0));
        assert!(g.contains_cell(43, 3));
        assert!(!g.contains_cell(44, 3));
        assert!(!g.contains_cell(3, 2));
    }

    #[test]
    fn pixel_spans_map_to_columns() {
        let g = grid();
        assert_eq!(g.columns(0.0, 32.0), 4..8);
        assert_eq!(g.columns(-20.0, 4.0), 4..5);
        assert_eq!(g.columns(300.0, 400.0), 41..44);
        assert_eq!(g.columns(48.0, 48.0), 4..4);
    }

    #[test]
    fn rows_are_clipped() {
        let g = grid();
        assert_eq!(g.row(0.0), 2);
        assert_eq!(g.row(20.0), 3);
        assert_eq!(g.row(100.0), 3);
        assert_eq!(g.rows(&PxRect::new(0.0, 0.0, 32.0, 32.0)), 2..=3);
    }

    #[test]
    fn renders_thumbs_and_track() {
        let area = Rect::new(0, 0, 40, 2);
        let mut slider = RangeSlider::new();
        let (w, h) = CellGrid::new(area).size_px();
        slider.on_bounds_changed(w, h);
        let plan = slider.render();

        let mut buf = Buffer::empty(area);
        SliderWidget::new(&plan).render(area, &mut buf);

        let lower_col = (plan.lower_thumb.frame.center_x() / CELL_WIDTH_PX) as u16;
        assert_eq!(buf[(lower_col, 0)].symbol(), "█");
        assert_eq!(buf[(lower_col, 1)].symbol(), "█");
        // midway between thumbs, on the track row
        let mid_col = (plan.highlight.rect.center_x() / CELL_WIDTH_PX) as u16;
        assert_eq!(buf[(mid_col, 1)].symbol(), "━");
        assert_eq!(buf[(39, 1)].symbol(), "─");
        assert_eq!(buf[(39, 0)].symbol(), " ");
    }

    proptest::proptest! {
        #[test]
        fn cells_inside_the_area_map_back_to_themselves(
            col in 0u16..40,
            row in 0u16..2,
        ) {
            let g = grid();
            let (column, row) = (g.area.x + col, g.area.y + row);
            let p = g.point_for_cell(column, row);
            proptest::prop_assert!(g.contains_cell(column, row));
            proptest::prop_assert_eq!(g.columns(p.x, p.x + 1.0), column..column + 1);
            proptest::prop_assert_eq!(g.row(p.y), row);
        }
    }
}
