//! Domain types for the range slider

pub mod geometry;
pub mod range;
pub mod style;
pub mod thumb;

pub use geometry::{Point, Rect, Size};
pub use range::{bound_value, Invalidation, RangeError, RangeModel, RangeSelection};
pub use style::{Rgba, SliderStyle};
pub use thumb::Thumb;
