use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::form::InputMode;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title plus the mode tabs, with the active mode highlighted.
    pub fn widget(&self, active: InputMode) -> Paragraph<'static> {
        let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![
            Span::styled("  Bionic Reader", title_style),
            Span::styled("  │  ", separator_style),
        ];
        for (idx, mode) in InputMode::ALL.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  ", separator_style));
            }
            let style = if *mode == active {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            spans.push(Span::styled(format!(" {} ", mode.label()), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
