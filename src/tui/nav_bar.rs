use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::domain::Message;
use crate::view::{Glyph, NavFrame};

use super::theme::{ACCENT, GLOBAL_BORDER, TEXT, TEXT_DIM};

pub struct NavBar;

impl NavBar {
    pub fn new() -> Self {
        Self
    }

    /// Title line for the visible frame: back affordance when the user
    /// is below the root, the frame title, and its bar-button glyphs
    /// aligned to the right edge.
    pub fn widget(
        &self,
        frame: Option<&NavFrame<Message>>,
        depth: usize,
        area: Rect,
    ) -> Paragraph<'static> {
        let title = frame.map(|f| f.title.clone()).unwrap_or_default();
        let glyphs: String = frame
            .map(|f| {
                f.right_buttons
                    .iter()
                    .map(|button| glyph_symbol(button.glyph))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_default();

        let back = if depth > 0 { "‹ " } else { "" };
        let left_width = 2 + back.chars().count() + title.chars().count();
        let right = format!("{}  ", glyphs);
        let padding = (area.width as usize)
            .saturating_sub(left_width)
            .saturating_sub(right.chars().count());

        let line = Line::from(vec![
            Span::styled("  ", Style::default().fg(TEXT)),
            Span::styled(back, Style::default().fg(TEXT_DIM)),
            Span::styled(title, Style::default().fg(ACCENT)),
            Span::styled(" ".repeat(padding), Style::default().fg(TEXT)),
            Span::styled(right, Style::default().fg(TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn glyph_symbol(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Refresh => "↻",
    }
}
