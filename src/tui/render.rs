use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::domain::Message;
use crate::view::{Background, Screen, Table, Widget};

use super::app::App;
use super::footer::Footer;
use super::layout::layout_regions;
use super::nav_bar::NavBar;
use super::theme::{ACTIVE_HIGHLIGHT, FIELD_ERROR, FIELD_NORMAL, TEXT};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (bar, body, footer) = layout_regions(area);

    let nav_bar = NavBar::new();
    frame.render_widget(nav_bar.widget(app.visible_frame(), app.depth(), bar), bar);

    frame.render_widget(Clear, body);
    if let Some(nav) = app.visible_frame() {
        let content = body.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        match &nav.screen {
            Screen::Table(table) => draw_table(frame, table, app.selection(), content),
            Screen::Plain(widget) => draw_widget(frame, widget, content),
        }
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(app.is_editing(), footer), footer);
}

fn draw_table(frame: &mut Frame<'_>, table: &Table<Message>, selection: usize, area: Rect) {
    let items: Vec<ListItem> = table
        .rows
        .iter()
        .map(|row| ListItem::new(row.text.clone()))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(TEXT))
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ");

    let mut list_state = ListState::default();
    if !table.rows.is_empty() {
        list_state.select(Some(selection.min(table.rows.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_widget(frame: &mut Frame<'_>, widget: &Widget<Message>, area: Rect) {
    match widget {
        Widget::Column(children) => {
            let constraints: Vec<Constraint> =
                children.iter().map(|_| Constraint::Length(1)).collect();
            let chunks = Layout::vertical(constraints).spacing(1).split(area);
            for (child, chunk) in children.iter().zip(chunks.iter()) {
                draw_widget(frame, child, *chunk);
            }
        }
        Widget::Label { text } => {
            frame.render_widget(
                Paragraph::new(text.clone()).style(Style::default().fg(TEXT)),
                area,
            );
        }
        Widget::TextField {
            text, background, ..
        } => {
            let bg = match background {
                Background::Normal => FIELD_NORMAL,
                Background::Error => FIELD_ERROR,
            };
            let field = Paragraph::new(format!(" {}", text))
                .style(Style::default().fg(TEXT).bg(bg));
            frame.render_widget(field, area);
        }
    }
}
