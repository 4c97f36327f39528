//! Drawing seam between the world and whatever paints pixels

use super::palette::{named, Palette, Rgb};
use super::status::{status_items, TextItem};
use crate::world::World;

/// Axis-aligned rectangle in screen units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Drawing primitives a front end provides
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, colour: Rgb);
    fn outline_rect(&mut self, rect: Rect, colour: Rgb);
    fn draw_text(&mut self, item: &TextItem);
}

/// Inset rectangle a live cell is filled with
pub fn cell_fill_rect(world: &World, index: usize) -> Rect {
    let size = world.cell_size();
    let (x, y) = world.layout().cell_origin(index);
    Rect {
        x: x + 2,
        y: y + 2,
        width: size.saturating_sub(2),
        height: size.saturating_sub(2),
    }
}

/// Draw one frame: outlines, live cells coloured by age, then the status bar
pub fn present<C: Canvas>(world: &World, palette: &Palette, canvas: &mut C) {
    let layout = world.layout();
    let outlines = layout.draws_outlines();

    for index in 0..world.cell_count() {
        if outlines {
            let (x, y) = layout.cell_origin(index);
            let rect = Rect {
                x,
                y,
                width: layout.cell_size,
                height: layout.cell_size,
            };
            canvas.outline_rect(rect, named::GRAY);
        }
        if world.cell_alive_at(index) {
            let colour = palette.colour_for_age(world.cell_age_at(index));
            canvas.fill_rect(cell_fill_rect(world, index), colour);
        }
    }

    for item in status_items(world) {
        canvas.draw_text(&item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{Layout, RuleFamily};

    #[derive(Default)]
    struct RecordingCanvas {
        fills: Vec<(Rect, Rgb)>,
        outlines: usize,
        texts: Vec<String>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, rect: Rect, colour: Rgb) {
            self.fills.push((rect, colour));
        }

        fn outline_rect(&mut self, _rect: Rect, _colour: Rgb) {
            self.outlines += 1;
        }

        fn draw_text(&mut self, item: &TextItem) {
            self.texts.push(item.text.clone());
        }
    }

    #[test]
    fn test_present_draws_live_cells() {
        let layout = Layout::new(60, 70, 10, 40).unwrap();
        let mut world = World::with_layout(layout, RuleFamily::Conway, 0.0, Some(5)).unwrap();
        world.clear();
        world.set_cell(7, true).unwrap();
        world.tick();

        let palette = Palette::hue_wheel();
        let mut canvas = RecordingCanvas::default();
        present(&world, &palette, &mut canvas);

        assert_eq!(canvas.fills.len(), 1);
        let (rect, colour) = canvas.fills[0];
        assert_eq!(rect, Rect { x: 12, y: 12, width: 8, height: 8 });
        assert_eq!(colour, palette.colour_for_age(1));
        assert_eq!(canvas.outlines, 0);
        assert_eq!(canvas.texts.last().map(String::as_str), Some("Press 'r' to run."));
    }

    #[test]
    fn test_large_cells_get_outlines() {
        let layout = Layout::exact(3, 2, 30).unwrap();
        let world = World::with_layout(layout, RuleFamily::Conway, 0.5, Some(5)).unwrap();
        let mut canvas = RecordingCanvas::default();
        present(&world, &Palette::hue_wheel(), &mut canvas);
        assert_eq!(canvas.outlines, 6);
    }
}
