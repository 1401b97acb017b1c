//! RangeModel: bounds and current selection of the slider.
//!
//! Invariants held at all times:
//! - `minimum < maximum`
//! - `minimum <= lower_value <= upper_value <= maximum`
//!
//! Range changes that would break the first invariant, or that use a
//! non-finite bound or span, are rejected with [`RangeError::InvalidRange`]
//! and leave the model untouched. Selection values are never rejected, only
//! clamped. Deserialized models go through the same checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from range configuration changes.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error(
        "invalid range: minimum {minimum} must be finite and strictly less than maximum {maximum}"
    )]
    InvalidRange { minimum: f64, maximum: f64 },
}

/// What a host must refresh after a setter call.
///
/// `Layout` means thumb positions moved and frames need recomputing;
/// `Display` means only the track's appearance changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Invalidation {
    Layout,
    Display,
}

/// The selected sub-interval, as delivered in `valueChanged` notifications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelection {
    pub lower: f64,
    pub upper: f64,
}

impl RangeSelection {
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }
}

/// `min(max(value, lo), hi)`.
///
/// Unlike `f64::clamp` this never panics: with `lo > hi` it returns `hi`,
/// and a NaN `value` collapses to a bound.
pub fn bound_value(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Checks `minimum < maximum` with both bounds and their span finite.
fn validate_range(minimum: f64, maximum: f64) -> Result<(), RangeError> {
    let finite = minimum.is_finite() && maximum.is_finite() && (maximum - minimum).is_finite();
    if finite && minimum < maximum {
        Ok(())
    } else {
        Err(RangeError::InvalidRange { minimum, maximum })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeModelFields")]
pub struct RangeModel {
    minimum: f64,
    maximum: f64,
    lower_value: f64,
    upper_value: f64,
    track_height: f64,
    highlight_height: f64,
}

impl Default for RangeModel {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 1.0,
            lower_value: 0.2,
            upper_value: 0.8,
            track_height: 2.0,
            highlight_height: 4.0,
        }
    }
}

/// Unchecked wire form of [`RangeModel`].
#[derive(Deserialize)]
struct RangeModelFields {
    minimum: f64,
    maximum: f64,
    lower_value: f64,
    upper_value: f64,
    track_height: f64,
    highlight_height: f64,
}

impl TryFrom<RangeModelFields> for RangeModel {
    type Error = RangeError;

    fn try_from(fields: RangeModelFields) -> Result<Self, RangeError> {
        let mut model = Self::with_range(
            fields.minimum,
            fields.maximum,
            fields.lower_value,
            fields.upper_value,
        )?;
        model.set_track_height(fields.track_height);
        model.set_highlight_height(fields.highlight_height);
        Ok(model)
    }
}

impl RangeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model with explicit bounds and selection.
    ///
    /// The range is validated first; the selection is then clamped into it
    /// the same way the individual setters clamp.
    pub fn with_range(
        minimum: f64,
        maximum: f64,
        lower_value: f64,
        upper_value: f64,
    ) -> Result<Self, RangeError> {
        validate_range(minimum, maximum)?;
        let mut model = Self {
            minimum,
            maximum,
            lower_value: minimum,
            upper_value: maximum,
            ..Self::default()
        };
        model.set_lower_value(lower_value);
        model.set_upper_value(upper_value);
        Ok(model)
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn lower_value(&self) -> f64 {
        self.lower_value
    }

    pub fn upper_value(&self) -> f64 {
        self.upper_value
    }

    pub fn track_height(&self) -> f64 {
        self.track_height
    }

    pub fn highlight_height(&self) -> f64 {
        self.highlight_height
    }

    /// `maximum - minimum`; always strictly positive.
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    pub fn selection(&self) -> RangeSelection {
        RangeSelection {
            lower: self.lower_value,
            upper: self.upper_value,
        }
    }

    pub fn set_minimum(&mut self, value: f64) -> Result<Invalidation, RangeError> {
        validate_range(value, self.maximum)?;
        self.minimum = value;
        self.clamp_selection();
        Ok(Invalidation::Layout)
    }

    pub fn set_maximum(&mut self, value: f64) -> Result<Invalidation, RangeError> {
        validate_range(self.minimum, value)?;
        self.maximum = value;
        self.clamp_selection();
        Ok(Invalidation::Layout)
    }

    /// Replace both bounds at once. Used when a new range does not overlap
    /// the current one, where setting the bounds one by one would be rejected.
    pub fn set_bounds(&mut self, minimum: f64, maximum: f64) -> Result<Invalidation, RangeError> {
        validate_range(minimum, maximum)?;
        self.minimum = minimum;
        self.maximum = maximum;
        self.clamp_selection();
        Ok(Invalidation::Layout)
    }

    /// Set the lower value, clamped into `[minimum, upper_value]`.
    ///
    /// The thumb gap is not enforced here; programmatic sets may leave
    /// `lower_value == upper_value`.
    pub fn set_lower_value(&mut self, value: f64) -> Invalidation {
        self.lower_value = bound_value(value, self.minimum, self.upper_value);
        Invalidation::Layout
    }

    /// Set the upper value, clamped into `[lower_value, maximum]`.
    pub fn set_upper_value(&mut self, value: f64) -> Invalidation {
        self.upper_value = bound_value(value, self.lower_value, self.maximum);
        Invalidation::Layout
    }

    /// Negative or NaN thickness is stored as `0.0`.
    pub fn set_track_height(&mut self, value: f64) -> Invalidation {
        self.track_height = value.max(0.0);
        Invalidation::Display
    }

    pub fn set_highlight_height(&mut self, value: f64) -> Invalidation {
        self.highlight_height = value.max(0.0);
        Invalidation::Display
    }

    /// Write a drag result for the lower thumb. Caller supplies the clamped value.
    pub(crate) fn drag_lower_to(&mut self, value: f64) {
        self.lower_value = value;
        debug_assert!(self.holds_invariants(), "drag broke ordering: {self:?}");
    }

    pub(crate) fn drag_upper_to(&mut self, value: f64) {
        self.upper_value = value;
        debug_assert!(self.holds_invariants(), "drag broke ordering: {self:?}");
    }

    /// `minimum <= lower <= upper <= maximum` and `minimum < maximum` with a finite span.
    pub fn holds_invariants(&self) -> bool {
        validate_range(self.minimum, self.maximum).is_ok()
            && self.minimum <= self.lower_value
            && self.lower_value <= self.upper_value
            && self.upper_value <= self.maximum
    }

    fn clamp_selection(&mut self) {
        self.lower_value = bound_value(self.lower_value, self.minimum, self.maximum);
        self.upper_value = bound_value(self.upper_value, self.lower_value, self.maximum);
    }
}
