//! `RangeSlider`: the control a host embeds.
//!
//! Owns the model, geometry, style and tracker, routes host events to the
//! tracker, and fans `valueChanged` notifications out to registered
//! listeners. Every setter reports what it invalidated so the host decides
//! when to call [`RangeSlider::render`].

use std::fmt;

use tracing::{debug, warn};

use crate::domain::{
    Invalidation, Point, RangeError, RangeModel, RangeSelection, SliderStyle, Thumb,
};
use crate::mapper::{Geometry, PositionMapper};
use crate::render::{self, RenderPlan};
use crate::tracker::{PointerEvent, PointerId, TouchTracker, TrackResponse, TrackerState};

type ValueChangedListener = Box<dyn FnMut(RangeSelection)>;

/// Handle for removing a `valueChanged` listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct RangeSlider {
    model: RangeModel,
    geometry: Geometry,
    style: SliderStyle,
    tracker: TouchTracker,
    listeners: Vec<(ListenerId, ValueChangedListener)>,
    next_listener: u64,
}

impl fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeSlider")
            .field("model", &self.model)
            .field("geometry", &self.geometry)
            .field("style", &self.style)
            .field("tracker", &self.tracker)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RangeSlider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(model: RangeModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    // ── Host → control ────────────────────────────────────────────────

    /// Layout changed. Recomputes track width, thumb diameter and gap.
    pub fn on_bounds_changed(&mut self, width: f64, height: f64) -> Invalidation {
        self.geometry = Geometry::new(width, height);
        debug!(
            width = self.geometry.track_width(),
            thumb_diameter = self.geometry.thumb_diameter(),
            gap = self.gap_between_thumbs(),
            "bounds changed"
        );
        Invalidation::Layout
    }

    pub fn on_pointer_down(&mut self, pointer: PointerId, location: Point) -> bool {
        self.dispatch(PointerEvent::Down {
            pointer,
            x: location.x,
            y: location.y,
        })
        .is_claimed()
    }

    pub fn on_pointer_move(&mut self, pointer: PointerId, location: Point) -> bool {
        self.dispatch(PointerEvent::Move {
            pointer,
            x: location.x,
            y: location.y,
        })
        .is_claimed()
    }

    pub fn on_pointer_up(&mut self, pointer: PointerId) -> bool {
        self.dispatch(PointerEvent::Up { pointer }).is_claimed()
    }

    pub fn on_pointer_cancel(&mut self, pointer: PointerId) -> bool {
        self.dispatch(PointerEvent::Cancel { pointer }).is_claimed()
    }

    /// Route one event through the tracker and notify listeners on moves.
    pub fn dispatch(&mut self, event: PointerEvent) -> TrackResponse {
        let response = self.tracker.handle(event, &mut self.model, &self.geometry);
        if let Some(selection) = response.value_changed() {
            for (_, listener) in &mut self.listeners {
                listener(selection);
            }
        }
        response
    }

    /// Register a `valueChanged` listener. Listeners fire in registration order.
    pub fn on_value_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(RangeSelection) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if it was already removed.
    pub fn remove_value_changed(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    // ── Configuration ─────────────────────────────────────────────────

    pub fn set_minimum_value(&mut self, value: f64) -> Result<Invalidation, RangeError> {
        logged(self.model.set_minimum(value))
    }

    pub fn set_maximum_value(&mut self, value: f64) -> Result<Invalidation, RangeError> {
        logged(self.model.set_maximum(value))
    }

    pub fn set_bounds(&mut self, minimum: f64, maximum: f64) -> Result<Invalidation, RangeError> {
        logged(self.model.set_bounds(minimum, maximum))
    }

    pub fn set_lower_value(&mut self, value: f64) -> Invalidation {
        self.model.set_lower_value(value)
    }

    pub fn set_upper_value(&mut self, value: f64) -> Invalidation {
        self.model.set_upper_value(value)
    }

    /// Set both selection values, in whichever order lets each land unclamped.
    pub fn set_selection(&mut self, lower: f64, upper: f64) -> Invalidation {
        if lower > self.model.upper_value() {
            self.model.set_upper_value(upper);
            self.model.set_lower_value(lower);
        } else {
            self.model.set_lower_value(lower);
            self.model.set_upper_value(upper);
        }
        Invalidation::Layout
    }

    pub fn set_track_height(&mut self, value: f64) -> Invalidation {
        self.model.set_track_height(value)
    }

    pub fn set_highlight_height(&mut self, value: f64) -> Invalidation {
        self.model.set_highlight_height(value)
    }

    pub fn set_style(&mut self, style: SliderStyle) -> Invalidation {
        self.style = style;
        Invalidation::Display
    }

    /// Swap in a whole model. Any drag in progress is dropped.
    pub fn replace_model(&mut self, model: RangeModel) -> Invalidation {
        self.tracker.reset();
        self.model = model;
        Invalidation::Layout
    }

    // ── Control → host ────────────────────────────────────────────────

    pub fn render(&self) -> RenderPlan {
        render::plan(
            &self.model,
            &self.geometry,
            &self.style,
            self.tracker.active_thumb(),
        )
    }

    pub fn position_for_value(&self, value: f64) -> f64 {
        self.mapper().position_for_value(value)
    }

    pub fn value_for_position(&self, position: f64) -> f64 {
        self.mapper().value_for_position(position)
    }

    pub fn gap_between_thumbs(&self) -> f64 {
        self.geometry.gap_between_thumbs(&self.model)
    }

    pub fn selection(&self) -> RangeSelection {
        self.model.selection()
    }

    pub fn model(&self) -> &RangeModel {
        &self.model
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    pub fn tracker_state(&self) -> TrackerState {
        self.tracker.state()
    }

    pub fn active_thumb(&self) -> Option<Thumb> {
        self.tracker.active_thumb()
    }

    fn mapper(&self) -> PositionMapper {
        PositionMapper::new(&self.model, &self.geometry)
    }
}

fn logged(result: Result<Invalidation, RangeError>) -> Result<Invalidation, RangeError> {
    if let Err(err) = &result {
        warn!(%err, "range change rejected");
    }
    result
}
