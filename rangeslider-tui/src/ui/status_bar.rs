//! Bottom status bar: key hints plus the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(" drag thumbs  r:reset  q:quit", theme::muted()));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("{} changes", app.value_changed_total),
        theme::muted(),
    ));

    if let Some(thumb) = app.slider.active_thumb() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(format!("dragging {thumb}"), theme::accent()));
    }

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
