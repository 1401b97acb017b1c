//! Range slider core: value model, position mapping, touch tracking, render planning.
//!
//! A dual-thumb control for picking a sub-interval of a numeric range by
//! dragging two handles along a track:
//! - `RangeModel` holds bounds and the selection, with `min < max` and
//!   `min <= lower <= upper <= max` maintained at all times
//! - `PositionMapper` converts between values and pixel offsets
//! - `TouchTracker` turns pointer events into drags that keep the thumbs a
//!   gap apart
//! - `render::plan` describes what to draw; the host does the drawing
//!
//! Everything is synchronous and single-owner. The host feeds events in
//! order and re-renders when a setter or event tells it to.

pub mod config;
pub mod control;
pub mod domain;
pub mod mapper;
pub mod render;
pub mod tracker;

pub use config::{ConfigError, SliderConfig};
pub use control::{ListenerId, RangeSlider};
pub use domain::{
    Invalidation, Point, RangeError, RangeModel, RangeSelection, Rect, Rgba, Size, SliderStyle,
    Thumb,
};
pub use mapper::{Geometry, PositionMapper};
pub use render::RenderPlan;
pub use tracker::{PointerEvent, PointerId, TouchTracker, TrackResponse, TrackerState};
