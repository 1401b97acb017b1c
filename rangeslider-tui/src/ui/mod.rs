//! Top-level UI layout: the slider panel above a status bar.

pub mod status_bar;
pub mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::app::AppState;
use crate::theme;
use widgets::slider::SliderWidget;

/// Rows the slider occupies. Two rows give a 32px thumb.
const SLIDER_ROWS: u16 = 2;

/// Screen regions, computed identically for drawing and for mouse mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub panel: Rect,
    pub slider: Rect,
    pub readout: Rect,
    pub products: Rect,
    pub status: Rect,
}

pub fn areas(area: Rect) -> Areas {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let panel = outer[0];
    let inner = Block::default().borders(Borders::ALL).inner(panel);
    // One column of padding each side so the thumbs never touch the border.
    let inner = Rect {
        x: inner.x.saturating_add(1),
        width: inner.width.saturating_sub(2),
        ..inner
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(SLIDER_ROWS),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    Areas {
        panel,
        slider: rows[1],
        readout: rows[2],
        products: rows[4],
        status: outer[1],
    }
}

/// Where the slider is drawn for a terminal of size `area`.
pub fn slider_area(area: Rect) -> Rect {
    areas(area).slider
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let areas = areas(f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(" Price filter ")
        .title_style(theme::accent_bold());
    f.render_widget(block, areas.panel);

    let plan = app.slider.render();
    f.render_widget(SliderWidget::new(&plan).theme(app.theme), areas.slider);

    render_readout(f, areas.readout, app);
    render_products(f, areas.products, app);
    status_bar::render(f, areas.status, app);
}

fn render_readout(f: &mut Frame, area: Rect, app: &AppState) {
    let selection = app.selection();
    let model = app.slider.model();
    let line = Line::from(vec![
        Span::styled(format!("{:.0}", model.minimum()), theme::muted()),
        Span::raw("  "),
        Span::styled(format!("${:.2}", selection.lower), theme::accent_bold()),
        Span::styled(" – ", theme::muted()),
        Span::styled(format!("${:.2}", selection.upper), theme::accent_bold()),
        Span::raw("  "),
        Span::styled(format!("{:.0}", model.maximum()), theme::muted()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_products(f: &mut Frame, area: Rect, app: &AppState) {
    let matching = app.matching_products();
    let mut items: Vec<ListItem> = Vec::with_capacity(matching.len() + 1);
    items.push(ListItem::new(Line::from(Span::styled(
        format!("{} of {} products", matching.len(), crate::app::CATALOG.len()),
        theme::muted(),
    ))));
    items.extend(matching.iter().map(|p| {
        ListItem::new(Line::from(vec![
            Span::styled(format!("{:>8.2}  ", p.price), theme::accent()),
            Span::styled(p.name, theme::text()),
        ]))
    }));
    f.render_widget(List::new(items), area);
}
