//! End-to-end interaction scenarios against a 300×30 control.

use std::cell::RefCell;
use std::rc::Rc;

use rangeslider_core::{
    Point, PointerId, RangeError, RangeSelection, RangeSlider, SliderConfig, Thumb, TrackerState,
};

const P: PointerId = PointerId::PRIMARY;

fn slider() -> RangeSlider {
    let mut slider = RangeSlider::new();
    slider.on_bounds_changed(300.0, 30.0);
    slider
}

fn record(slider: &mut RangeSlider) -> Rc<RefCell<Vec<RangeSelection>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    slider.on_value_changed(move |selection| sink.borrow_mut().push(selection));
    seen
}

#[test]
fn thumb_positions_use_centring_formula() {
    let slider = slider();
    assert!((slider.position_for_value(0.2) - 69.0).abs() < 1e-9);
    assert!((slider.position_for_value(0.8) - 231.0).abs() < 1e-9);
}

#[test]
fn dragging_lower_past_upper_pins_at_gap() {
    let mut slider = slider();
    let seen = record(&mut slider);

    let start = Point::new(slider.position_for_value(0.2), 15.0);
    assert!(slider.on_pointer_down(P, start));
    assert_eq!(slider.tracker_state(), TrackerState::DraggingLower);

    slider.on_pointer_move(P, Point::new(start.x + 200.0, 15.0));

    // 200px over 270px of travel is ~0.74, well past upper - gap
    let gap = slider.gap_between_thumbs();
    assert!((gap - 0.05).abs() < 1e-12);
    assert_eq!(slider.selection().lower, 0.8 - gap);
    assert_eq!(slider.selection().upper, 0.8);
    assert_eq!(seen.borrow().as_slice(), &[slider.selection()]);
}

#[test]
fn dragging_lower_below_minimum_pins_at_minimum() {
    let mut slider = slider();
    let start = Point::new(slider.position_for_value(0.2), 15.0);
    slider.on_pointer_down(P, start);
    slider.on_pointer_move(P, Point::new(start.x - 1_000.0, 15.0));
    assert_eq!(slider.selection().lower, 0.0);
}

#[test]
fn set_minimum_above_maximum_fails_and_keeps_state() {
    let mut slider = slider();
    let err = slider.set_minimum_value(2.0).unwrap_err();
    assert!(matches!(err, RangeError::InvalidRange { .. }));
    assert_eq!(slider.model().minimum(), 0.0);
    assert_eq!(slider.model().maximum(), 1.0);
    assert_eq!(slider.selection(), RangeSelection { lower: 0.2, upper: 0.8 });
}

#[test]
fn overlapping_thumbs_prefer_lower() {
    let mut slider = slider();
    slider.set_selection(0.5, 0.5);
    let plan = slider.render();
    assert!(plan.lower_thumb.frame.max_x() > plan.upper_thumb.frame.min_x());

    // a point inside both frames
    let x = (plan.lower_thumb.frame.max_x() + plan.upper_thumb.frame.min_x()) / 2.0;
    assert!(plan.lower_thumb.frame.contains(Point::new(x, 15.0)));
    assert!(plan.upper_thumb.frame.contains(Point::new(x, 15.0)));

    assert!(slider.on_pointer_down(P, Point::new(x, 15.0)));
    assert_eq!(slider.active_thumb(), Some(Thumb::Lower));
}

#[test]
fn touching_thumbs_separate_on_first_move() {
    let mut slider = slider();
    slider.set_selection(0.5, 0.5);
    let x = slider.render().lower_thumb.frame.center_x();
    slider.on_pointer_down(P, Point::new(x, 15.0));
    slider.on_pointer_move(P, Point::new(x, 15.0));
    let selection = slider.selection();
    assert!((selection.span() - slider.gap_between_thumbs()).abs() < 1e-12);
}

#[test]
fn full_gesture_on_upper_thumb() {
    let mut slider = slider();
    let seen = record(&mut slider);
    let start = Point::new(slider.position_for_value(0.8), 15.0);

    assert!(slider.on_pointer_down(P, start));
    assert_eq!(slider.tracker_state(), TrackerState::DraggingUpper);
    assert!(slider.render().upper_thumb.highlighted);

    slider.on_pointer_move(P, Point::new(start.x - 27.0, 20.0));
    slider.on_pointer_move(P, Point::new(start.x - 54.0, 25.0));
    assert!(slider.on_pointer_up(P));

    assert_eq!(slider.tracker_state(), TrackerState::Idle);
    assert!(!slider.render().upper_thumb.highlighted);
    assert!((slider.selection().upper - 0.6).abs() < 1e-12);
    // no notification on release
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn cancel_behaves_like_release() {
    let mut slider = slider();
    let start = Point::new(slider.position_for_value(0.2), 15.0);
    slider.on_pointer_down(P, start);
    slider.on_pointer_move(P, Point::new(start.x + 27.0, 15.0));
    let before = slider.selection();
    assert!(slider.on_pointer_cancel(P));
    assert_eq!(slider.tracker_state(), TrackerState::Idle);
    assert_eq!(slider.selection(), before);
    assert!(!slider.on_pointer_move(P, Point::new(start.x + 100.0, 15.0)));
}

#[test]
fn narrow_control_does_not_divide_by_zero() {
    let mut slider = RangeSlider::new();
    slider.on_bounds_changed(20.0, 30.0);
    assert_eq!(slider.value_for_position(10.0), 0.0);

    let x = slider.render().lower_thumb.frame.center_x();
    if slider.on_pointer_down(P, Point::new(x, 15.0)) {
        slider.on_pointer_move(P, Point::new(x + 50.0, 15.0));
    }
    assert!(slider.model().holds_invariants());
    assert!(slider.selection().lower.is_finite());
}

#[test]
fn price_filter_from_config() {
    let config = SliderConfig::from_toml_str(
        "minimum_value = 0.0\nmaximum_value = 500.0\nlower_value = 100.0\nupper_value = 400.0\n",
    )
    .unwrap();
    let mut slider = config.build().unwrap();
    slider.on_bounds_changed(330.0, 30.0);

    // 300px of travel over a 500 range: 3px per 5 units
    let start = Point::new(slider.position_for_value(100.0), 15.0);
    slider.on_pointer_down(P, start);
    slider.on_pointer_move(P, Point::new(start.x + 30.0, 15.0));
    assert!((slider.selection().lower - 150.0).abs() < 1e-9);
}
