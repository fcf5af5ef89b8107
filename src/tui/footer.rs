use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::theme::{GLOBAL_BORDER, TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str = " ↑/↓: Select │ Enter: Open │ Ctrl+R: Refresh │ Ctrl+Q: Quit";
const EDIT_HINTS: &str = " Type to edit │ Backspace: Delete │ Esc: Back │ Ctrl+Q: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for the visible screen plus the version, right-aligned.
    pub fn widget(&self, editing: bool, area: Rect) -> Paragraph<'static> {
        let hints = if editing { EDIT_HINTS } else { LIST_HINTS };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count (the separators are Unicode).
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
