//! Touch tracking state machine.
//!
//! States: Idle → DraggingLower / DraggingUpper → Idle.
//!
//! - pointer-down in Idle hit-tests the thumb frames (lower wins overlaps)
//! - pointer-move while dragging converts the x delta to a value delta and
//!   clamps the dragged thumb so it stays at least one gap away from the
//!   other thumb and inside `[minimum, maximum]`
//! - pointer-up and pointer-cancel both return to Idle
//!
//! Only one pointer drives a drag. While a drag is in progress, events from
//! any other pointer are ignored and left unclaimed.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::domain::{bound_value, Point, RangeModel, RangeSelection, Thumb};
use crate::mapper::{Geometry, PositionMapper};
use crate::render::thumb_frames;

/// Identifies a pointer (mouse, finger) across down/move/up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Mouse, or the first touch on single-pointer hosts.
    pub const PRIMARY: PointerId = PointerId(0);
}

/// Pointer input as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        #[serde(default)]
        pointer: PointerId,
        x: f64,
        y: f64,
    },
    Move {
        #[serde(default)]
        pointer: PointerId,
        x: f64,
        y: f64,
    },
    Up {
        #[serde(default)]
        pointer: PointerId,
    },
    Cancel {
        #[serde(default)]
        pointer: PointerId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackerState {
    Idle,
    DraggingLower,
    DraggingUpper,
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TrackResponse {
    /// Not claimed; the host should treat it as pass-through.
    Ignored,
    /// A drag started on this thumb.
    Began(Thumb),
    /// The dragged thumb moved (possibly by zero). Carries the `valueChanged` payload.
    Moved(RangeSelection),
    /// The drag on this thumb ended.
    Ended(Thumb),
}

impl TrackResponse {
    pub fn is_claimed(&self) -> bool {
        !matches!(self, TrackResponse::Ignored)
    }

    pub fn value_changed(&self) -> Option<RangeSelection> {
        match self {
            TrackResponse::Moved(selection) => Some(*selection),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    thumb: Thumb,
    pointer: PointerId,
    previous_location: Point,
}

#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    drag: Option<Drag>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackerState {
        match self.drag.map(|d| d.thumb) {
            None => TrackerState::Idle,
            Some(Thumb::Lower) => TrackerState::DraggingLower,
            Some(Thumb::Upper) => TrackerState::DraggingUpper,
        }
    }

    /// The thumb being dragged, which is also the one drawn highlighted.
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.drag.map(|d| d.thumb)
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.drag.map(|d| d.pointer)
    }

    /// Last pointer location seen by the drag; `None` while idle.
    pub fn previous_location(&self) -> Option<Point> {
        self.drag.map(|d| d.previous_location)
    }

    /// Dispatch a host event to the matching handler.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        model: &mut RangeModel,
        geometry: &Geometry,
    ) -> TrackResponse {
        match event {
            PointerEvent::Down { pointer, x, y } => {
                self.pointer_down(pointer, Point::new(x, y), model, geometry)
            }
            PointerEvent::Move { pointer, x, y } => {
                self.pointer_move(pointer, Point::new(x, y), model, geometry)
            }
            PointerEvent::Up { pointer } => self.pointer_up(pointer),
            PointerEvent::Cancel { pointer } => self.pointer_cancel(pointer),
        }
    }

    pub fn pointer_down(
        &mut self,
        pointer: PointerId,
        location: Point,
        model: &RangeModel,
        geometry: &Geometry,
    ) -> TrackResponse {
        if let Some(drag) = self.drag {
            trace!(?pointer, active = ?drag.pointer, "second pointer ignored during drag");
            return TrackResponse::Ignored;
        }

        let (lower_frame, upper_frame) = thumb_frames(model, geometry);
        let thumb = if lower_frame.contains(location) {
            Thumb::Lower
        } else if upper_frame.contains(location) {
            Thumb::Upper
        } else {
            return TrackResponse::Ignored;
        };

        debug!(%thumb, ?pointer, x = location.x, y = location.y, "drag began");
        self.drag = Some(Drag {
            thumb,
            pointer,
            previous_location: location,
        });
        TrackResponse::Began(thumb)
    }

    pub fn pointer_move(
        &mut self,
        pointer: PointerId,
        location: Point,
        model: &mut RangeModel,
        geometry: &Geometry,
    ) -> TrackResponse {
        let Some(drag) = self.drag.as_mut() else {
            return TrackResponse::Ignored;
        };
        if drag.pointer != pointer {
            return TrackResponse::Ignored;
        }

        let delta_pixels = location.x - drag.previous_location.x;
        // A non-finite coordinate would otherwise snap the thumb to a bound.
        let delta_pixels = if delta_pixels.is_finite() {
            drag.previous_location = location;
            delta_pixels
        } else {
            0.0
        };
        let delta_value = PositionMapper::new(model, geometry).value_delta(delta_pixels);
        let gap = geometry.gap_between_thumbs(model);

        match drag.thumb {
            Thumb::Lower => {
                let hi = (model.upper_value() - gap).max(model.minimum());
                let value = bound_value(model.lower_value() + delta_value, model.minimum(), hi);
                model.drag_lower_to(value);
            }
            Thumb::Upper => {
                let lo = (model.lower_value() + gap).min(model.maximum());
                let value = bound_value(model.upper_value() + delta_value, lo, model.maximum());
                model.drag_upper_to(value);
            }
        }

        let selection = model.selection();
        trace!(
            thumb = %drag.thumb,
            delta_pixels,
            delta_value,
            lower = selection.lower,
            upper = selection.upper,
            "drag moved"
        );
        TrackResponse::Moved(selection)
    }

    pub fn pointer_up(&mut self, pointer: PointerId) -> TrackResponse {
        self.end(pointer, "drag ended")
    }

    /// Handled exactly like pointer-up.
    pub fn pointer_cancel(&mut self, pointer: PointerId) -> TrackResponse {
        self.end(pointer, "drag cancelled")
    }

    /// Drop any drag in progress without reporting it, e.g. when the host
    /// replaces the configuration mid-gesture.
    pub fn reset(&mut self) {
        self.drag = None;
    }

    fn end(&mut self, pointer: PointerId, message: &'static str) -> TrackResponse {
        match self.drag {
            Some(drag) if drag.pointer == pointer => {
                self.drag = None;
                debug!(thumb = %drag.thumb, ?pointer, "{message}");
                TrackResponse::Ended(drag.thumb)
            }
            _ => TrackResponse::Ignored,
        }
    }
}
