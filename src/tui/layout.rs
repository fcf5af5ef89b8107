use ratatui::layout::{Constraint, Layout, Rect};

/// Split the full terminal area into (nav bar, body, footer).
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let [bar, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(area);
    (bar, body, footer)
}
