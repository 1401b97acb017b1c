//! Render planning: the geometric description a host renderer draws.
//!
//! Everything here is a pure function of the model, geometry, style and the
//! currently active thumb. Calling [`plan`] repeatedly with unchanged input
//! yields identical plans, so hosts may call it every frame.
//!
//! All rects are in control-local coordinates:
//! - the track layer is the bounds inset vertically by a third of the height
//! - track and highlight bars are vertically centred in that layer
//! - thumbs are `d × d` squares at `y = 0`, nudged 5px apart so they do
//!   not overlap at minimum gap

use serde::{Deserialize, Serialize};

use crate::domain::{RangeModel, Rect, Rgba, SliderStyle, Thumb};
use crate::mapper::{Geometry, PositionMapper};

/// Horizontal nudge applied to each thumb frame, pushing the pair apart.
pub const THUMB_BIAS: f64 = 5.0;

/// Asset name hosts use to look up the thumb image.
pub const THUMB_IMAGE: &str = "slider_thumb";

/// Corner radius of the highlighted bar.
pub const HIGHLIGHT_CORNER_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPlan {
    pub rect: Rect,
    pub corner_radius: f64,
    pub fill: Rgba,
}

/// Highlighted sub-range, filled with a left-to-right gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightPlan {
    pub rect: Rect,
    pub corner_radius: f64,
    pub gradient_start: Rgba,
    pub gradient_end: Rgba,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbPlan {
    pub thumb: Thumb,
    /// Frame to draw, including the bias. This is also the hit rectangle.
    pub frame: Rect,
    /// Unbiased centre, `position_for_value` of the thumb's value.
    pub center_x: f64,
    pub highlighted: bool,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub bounds: Rect,
    pub track_layer: Rect,
    pub track: TrackPlan,
    pub highlight: HighlightPlan,
    pub lower_thumb: ThumbPlan,
    pub upper_thumb: ThumbPlan,
}

impl RenderPlan {
    pub fn thumb(&self, thumb: Thumb) -> &ThumbPlan {
        match thumb {
            Thumb::Lower => &self.lower_thumb,
            Thumb::Upper => &self.upper_thumb,
        }
    }
}

/// Thumb frames `(lower, upper)` for the current selection.
///
/// Shared by the planner and by pointer-down hit testing so both always
/// agree on where the thumbs are.
pub fn thumb_frames(model: &RangeModel, geometry: &Geometry) -> (Rect, Rect) {
    let mapper = PositionMapper::new(model, geometry);
    let d = geometry.thumb_diameter();
    let lower_center = mapper.position_for_value(model.lower_value());
    let upper_center = mapper.position_for_value(model.upper_value());
    (
        Rect::new(lower_center - d / 2.0 - THUMB_BIAS, 0.0, d, d),
        Rect::new(upper_center - d / 2.0 + THUMB_BIAS, 0.0, d, d),
    )
}

/// Build the render plan.
pub fn plan(
    model: &RangeModel,
    geometry: &Geometry,
    style: &SliderStyle,
    active: Option<Thumb>,
) -> RenderPlan {
    let size = geometry.bounds();
    let bounds = Rect::new(0.0, 0.0, size.width, size.height);
    let track_layer = bounds.inset_by(0.0, size.height / 3.0);
    let mid_y = track_layer.y + track_layer.height / 2.0;

    let track_height = model.track_height();
    let track = TrackPlan {
        rect: Rect::new(
            track_layer.x,
            mid_y - track_height / 2.0,
            track_layer.width,
            track_height,
        ),
        corner_radius: track_height,
        fill: style.track_tint,
    };

    let mapper = PositionMapper::new(model, geometry);
    let lower_center = mapper.position_for_value(model.lower_value());
    let upper_center = mapper.position_for_value(model.upper_value());

    let highlight_height = model.highlight_height();
    let highlight = HighlightPlan {
        rect: Rect::new(
            lower_center,
            mid_y - highlight_height / 2.0,
            upper_center - lower_center,
            highlight_height,
        ),
        corner_radius: HIGHLIGHT_CORNER_RADIUS,
        gradient_start: style.highlight_start,
        gradient_end: style.highlight_end,
    };

    let (lower_frame, upper_frame) = thumb_frames(model, geometry);
    let thumb_plan = |thumb: Thumb, frame: Rect, center_x: f64| ThumbPlan {
        thumb,
        frame,
        center_x,
        highlighted: active == Some(thumb),
        image: THUMB_IMAGE.to_string(),
    };

    RenderPlan {
        bounds,
        track_layer,
        track,
        highlight,
        lower_thumb: thumb_plan(Thumb::Lower, lower_frame, lower_center),
        upper_thumb: thumb_plan(Thumb::Upper, upper_frame, upper_center),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn default_plan(active: Option<Thumb>) -> RenderPlan {
        plan(
            &RangeModel::default(),
            &Geometry::new(300.0, 30.0),
            &SliderStyle::default(),
            active,
        )
    }

    #[test]
    fn track_is_centred_in_inset_layer() {
        let p = default_plan(None);
        assert_eq!(p.bounds, Rect::new(0.0, 0.0, 300.0, 30.0));
        assert_eq!(p.track_layer, Rect::new(0.0, 10.0, 300.0, 10.0));
        assert_eq!(p.track.rect, Rect::new(0.0, 14.0, 300.0, 2.0));
        assert_eq!(p.track.corner_radius, 2.0);
        assert_eq!(p.track.fill, SliderStyle::default().track_tint);
    }

    #[test]
    fn highlight_spans_thumb_centres() {
        let p = default_plan(None);
        assert!(approx(p.highlight.rect.x, 69.0));
        assert!(approx(p.highlight.rect.max_x(), 231.0));
        assert_eq!(p.highlight.rect.y, 13.0);
        assert_eq!(p.highlight.rect.height, 4.0);
        assert_eq!(p.highlight.corner_radius, HIGHLIGHT_CORNER_RADIUS);
    }

    #[test]
    fn thumbs_are_biased_apart() {
        let p = default_plan(None);
        assert!(approx(p.lower_thumb.frame.x, 69.0 - 15.0 - 5.0));
        assert!(approx(p.upper_thumb.frame.x, 231.0 - 15.0 + 5.0));
        assert_eq!(p.lower_thumb.frame.width, 30.0);
        assert_eq!(p.upper_thumb.frame.height, 30.0);
        assert_eq!(p.lower_thumb.frame.y, 0.0);
        assert!(approx(p.lower_thumb.center_x, 69.0));
        assert_eq!(p.lower_thumb.image, THUMB_IMAGE);
    }

    #[test]
    fn active_thumb_is_highlighted() {
        let p = default_plan(Some(Thumb::Upper));
        assert!(!p.lower_thumb.highlighted);
        assert!(p.upper_thumb.highlighted);
        assert_eq!(p.thumb(Thumb::Upper).thumb, Thumb::Upper);
    }

    #[test]
    fn planning_is_idempotent() {
        assert_eq!(default_plan(Some(Thumb::Lower)), default_plan(Some(Thumb::Lower)));
    }

    #[test]
    fn frames_match_plan() {
        let model = RangeModel::default();
        let geometry = Geometry::new(300.0, 30.0);
        let (lower, upper) = thumb_frames(&model, &geometry);
        let p = plan(&model, &geometry, &SliderStyle::default(), None);
        assert_eq!(lower, p.lower_thumb.frame);
        assert_eq!(upper, p.upper_thumb.frame);
    }
}
