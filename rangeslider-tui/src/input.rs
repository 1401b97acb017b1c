//! Input dispatch: mouse events drive the slider, keys drive the app.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use rangeslider_core::PointerId;

use crate::app::AppState;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

/// Translate a mouse event into slider pointer events.
///
/// Presses only count inside the slider's cells; drags and releases are
/// forwarded wherever they happen so a drag can leave the slider area.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    let point = app.grid.point_for_cell(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if !app.grid.contains_cell(mouse.column, mouse.row) {
                return;
            }
            if !app.slider.on_pointer_down(PointerId::PRIMARY, point) {
                app.set_warning("Grab a thumb to adjust the range");
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.slider.on_pointer_move(PointerId::PRIMARY, point);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.slider.on_pointer_up(PointerId::PRIMARY) {
                let s = app.selection();
                app.set_status(format!("Price range {:.0} – {:.0}", s.lower, s.upper));
            }
        }
        _ => {}
    }
}

/// Focus loss ends any drag the way a cancelled touch would.
pub fn handle_focus_lost(app: &mut AppState) {
    app.slider.on_pointer_cancel(PointerId::PRIMARY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;
    use std::path::PathBuf;

    use rangeslider_core::{Thumb, TrackerState};

    use crate::app::{default_price_filter, StatusLevel};

    fn app() -> AppState {
        let mut app = AppState::new(default_price_filter(), PathBuf::from("unused.json")).unwrap();
        // 64 cols × 2 rows at (2, 3): 512×32 px, thumb diameter 32
        app.layout(Rect::new(2, 3, 64, 2));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Column whose centre lies on the thumb's centre, give or take a cell.
    fn thumb_column(app: &AppState, thumb: Thumb) -> u16 {
        let center = app.slider.render().thumb(thumb).frame.center_x();
        app.grid.area.x + (center / 8.0) as u16
    }

    #[test]
    fn drag_lower_thumb_with_mouse() {
        let mut app = app();
        let col = thumb_column(&app, Thumb::Lower);

        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), col, 3));
        assert_eq!(app.slider.tracker_state(), TrackerState::DraggingLower);

        // 6 cells = 48px = 50 units over 480px of travel
        handle_mouse(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), col + 6, 4));
        assert!((app.selection().lower - 100.0).abs() < 1e-9);

        handle_mouse(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), col + 6, 4));
        assert_eq!(app.slider.tracker_state(), TrackerState::Idle);
        assert_eq!(app.drain_changes(), Some(app.selection()));
    }

    #[test]
    fn press_outside_slider_is_ignored() {
        let mut app = app();
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(app.slider.tracker_state(), TrackerState::Idle);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn press_on_bare_track_warns() {
        let mut app = app();
        let mid = app.grid.area.x + 32;
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), mid, 3));
        assert_eq!(app.slider.tracker_state(), TrackerState::Idle);
        assert_eq!(app.status_message.as_ref().map(|(_, l)| *l), Some(StatusLevel::Warning));
    }

    #[test]
    fn focus_loss_cancels_drag() {
        let mut app = app();
        let col = thumb_column(&app, Thumb::Upper);
        handle_mouse(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), col, 3));
        assert_eq!(app.slider.active_thumb(), Some(Thumb::Upper));
        handle_focus_lost(&mut app);
        assert_eq!(app.slider.active_thumb(), None);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.running);
    }
}
