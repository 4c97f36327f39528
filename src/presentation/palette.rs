//! Age to colour mapping over a full hue wheel

use serde::{Deserialize, Serialize};

/// Entries in the hue wheel, one per degree
pub const HUE_STEPS: usize = 360;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Named colours used by the status bar and grid outlines
pub mod named {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GRAY: Rgb = Rgb::new(100, 100, 100);
    pub const GREEN: Rgb = Rgb::new(15, 165, 10);
    pub const RED: Rgb = Rgb::new(255, 100, 10);
    pub const YELLOW: Rgb = Rgb::new(189, 200, 10);
}

/// Convert HSV (`h` in degrees, `s` in 0..=1, `v` in 0..=255) to rounded RGB
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let to_u8 = |c: f64| c.round().clamp(0.0, 255.0) as u8;
    if s < 0.00001 {
        return Rgb::new(to_u8(v), to_u8(v), to_u8(v));
    }

    let h = h.rem_euclid(360.0) / 60.0;
    let sector = h.floor();
    let fact = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * fact);
    let t = v * (1.0 - s * (1.0 - fact));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(to_u8(r), to_u8(g), to_u8(b))
}

/// Index into the hue wheel for a cell of the given age
pub fn colour_index_for_age(age: u32) -> usize {
    (age as usize).min(HUE_STEPS - 1)
}

/// Precomputed fully saturated hue wheel
#[derive(Debug, Clone)]
pub struct Palette {
    wheel: Vec<Rgb>,
}

impl Palette {
    pub fn hue_wheel() -> Self {
        let wheel = (0..HUE_STEPS)
            .map(|degree| hsv_to_rgb(degree as f64, 1.0, 255.0))
            .collect();
        Self { wheel }
    }

    pub fn len(&self) -> usize {
        self.wheel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wheel.is_empty()
    }

    pub fn colour_at(&self, index: usize) -> Rgb {
        self.wheel[index.min(self.wheel.len() - 1)]
    }

    /// Display colour of a live cell
    pub fn colour_for_age(&self, age: u32) -> Rgb {
        self.colour_at(colour_index_for_age(age))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::hue_wheel()
    }
}
