//! Presentation: age colours, status text and the drawing seam

pub mod canvas;
pub mod palette;
pub mod status;

pub use canvas::{cell_fill_rect, present, Canvas, Rect};
pub use palette::{colour_index_for_age, hsv_to_rgb, Palette, Rgb, HUE_STEPS};
pub use status::{status_items, TextItem};
