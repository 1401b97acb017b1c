//! Value ↔ pixel mapping along the track.
//!
//! Thumb centres travel over `[d/2, width - d/2]` where `d` is the thumb
//! diameter (the control's height), so a thumb drawn at either extreme stays
//! inside the control's bounds.

use serde::{Deserialize, Serialize};

use crate::domain::{bound_value, RangeModel, Size};

/// Layout geometry supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    bounds: Size,
}

impl Geometry {
    /// Negative or NaN dimensions are stored as `0.0`.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bounds: Size::new(width.max(0.0), height.max(0.0)),
        }
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn track_width(&self) -> f64 {
        self.bounds.width
    }

    /// Thumbs are square and as tall as the control.
    pub fn thumb_diameter(&self) -> f64 {
        self.bounds.height
    }

    /// Pixel distance a thumb centre can travel; `0.0` once the thumb fills the track.
    pub fn travel(&self) -> f64 {
        (self.bounds.width - self.bounds.height).max(0.0)
    }

    /// Half a thumb's width expressed in value units.
    pub fn gap_between_thumbs(&self, model: &RangeModel) -> f64 {
        if self.bounds.width <= 0.0 {
            return 0.0;
        }
        0.5 * self.thumb_diameter() * model.span() / self.bounds.width
    }
}

/// Snapshot of the model bounds and geometry needed for coordinate conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMapper {
    minimum: f64,
    maximum: f64,
    thumb_diameter: f64,
    travel: f64,
}

impl PositionMapper {
    pub fn new(model: &RangeModel, geometry: &Geometry) -> Self {
        Self {
            minimum: model.minimum(),
            maximum: model.maximum(),
            thumb_diameter: geometry.thumb_diameter(),
            travel: geometry.travel(),
        }
    }

    /// Pixel offset of the thumb centre for `value`.
    ///
    /// With collapsed travel every value maps to `d/2`.
    pub fn position_for_value(&self, value: f64) -> f64 {
        self.travel * (value - self.minimum) / (self.maximum - self.minimum)
            + self.thumb_diameter / 2.0
    }

    /// Inverse of [`position_for_value`](Self::position_for_value), clamped to `[minimum, maximum]`.
    ///
    /// With collapsed travel every position maps to `minimum`.
    pub fn value_for_position(&self, position: f64) -> f64 {
        if self.travel <= 0.0 {
            return self.minimum;
        }
        let value = self.minimum
            + (position - self.thumb_diameter / 2.0) * (self.maximum - self.minimum) / self.travel;
        bound_value(value, self.minimum, self.maximum)
    }

    /// Value-space distance covered by a horizontal pointer delta.
    pub fn value_delta(&self, delta_pixels: f64) -> f64 {
        if self.travel <= 0.0 {
            return 0.0;
        }
        (self.maximum - self.minimum) * delta_pixels / self.travel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(width: f64, height: f64) -> PositionMapper {
        PositionMapper::new(&RangeModel::default(), &Geometry::new(width, height))
    }

    #[test]
    fn positions_are_centred_on_travel() {
        let m = mapper(300.0, 30.0);
        assert!((m.position_for_value(0.2) - 69.0).abs() < 1e-9);
        assert!((m.position_for_value(0.8) - 231.0).abs() < 1e-9);
        assert_eq!(m.position_for_value(0.0), 15.0);
        assert_eq!(m.position_for_value(1.0), 285.0);
    }

    #[test]
    fn value_for_position_clamps() {
        let m = mapper(300.0, 30.0);
        assert_eq!(m.value_for_position(0.0), 0.0);
        assert_eq!(m.value_for_position(1_000.0), 1.0);
        assert!((m.value_for_position(150.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn collapsed_travel_maps_everything_to_minimum() {
        let m = mapper(20.0, 30.0);
        assert_eq!(m.value_for_position(0.0), 0.0);
        assert_eq!(m.value_for_position(25.0), 0.0);
        assert_eq!(m.value_delta(100.0), 0.0);
        assert_eq!(m.position_for_value(0.7), 15.0);
    }

    #[test]
    fn value_delta_scales_by_travel() {
        let m = mapper(300.0, 30.0);
        assert!((m.value_delta(200.0) - 200.0 / 270.0).abs() < 1e-12);
        assert!((m.value_delta(-27.0) + 0.1).abs() < 1e-12);
    }

    #[test]
    fn gap_is_half_a_thumb_in_value_units() {
        let g = Geometry::new(300.0, 30.0);
        assert!((g.gap_between_thumbs(&RangeModel::default()) - 0.05).abs() < 1e-12);
        assert_eq!(Geometry::new(0.0, 30.0).gap_between_thumbs(&RangeModel::default()), 0.0);
    }

    #[test]
    fn negative_bounds_are_zeroed() {
        let g = Geometry::new(-5.0, f64::NAN);
        assert_eq!(g.bounds(), Size::new(0.0, 0.0));
        assert_eq!(g.travel(), 0.0);
    }
}
