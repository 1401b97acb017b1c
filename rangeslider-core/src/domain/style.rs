//! Colour hints carried through to the render plan. The core never draws them.

use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Quantize to 8-bit channels, clamping out-of-range components.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        fn channel(c: f64) -> u8 {
            (c.max(0.0).min(1.0) * 255.0).round() as u8
        }
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Linear interpolation between two colours, `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        let t = t.max(0.0).min(1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Track and highlight colours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderStyle {
    pub track_tint: Rgba,
    pub highlight_start: Rgba,
    pub highlight_end: Rgba,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            // Slate track
            track_tint: Rgba::new(0.16, 0.20, 0.25, 1.0),
            // Cyan → azure highlight gradient
            highlight_start: Rgba::new(0.22, 0.96, 1.00, 1.0),
            highlight_end: Rgba::new(0.20, 0.59, 1.00, 1.0),
        }
    }
}
