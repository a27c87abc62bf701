use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::display::{sentence_items, text_runs};
use crate::ui::footer::Footer;
use crate::ui::form::{FormState, InputMode};
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let (input_area, output_area) = body_regions(body);
    let form = app.form();

    frame.render_widget(Header::new().widget(form.mode), header);
    draw_input(frame, input_area, form);
    draw_output(frame, output_area, form.bionic_text.as_deref());
    frame.render_widget(Footer::new().widget(footer), footer);

    if let Some(message) = form.alert.as_deref() {
        draw_alert(frame, body, message);
    }
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, form: &FormState) {
    let title = match form.mode {
        InputMode::Text => " Text ",
        InputMode::Url => " URL ",
        InputMode::Upload => " File path ",
    };

    let value = form.active_input();
    let inner_width = area.width.saturating_sub(2) as usize;
    // Keep the tail visible while typing past the edge
    let skip = value
        .chars()
        .count()
        .saturating_sub(inner_width.saturating_sub(1));
    let visible: String = value.chars().skip(skip).collect();
    let visible_width = visible.chars().count() as u16;

    let widget = Paragraph::new(Line::from(Span::styled(
        visible,
        Style::default().fg(HEADER_TEXT),
    )))
    .block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);

    if form.alert.is_none() && area.width > 2 && area.height > 2 {
        let max_x = area.x + area.width - 2;
        let cursor_x = (area.x + 1 + visible_width).min(max_x);
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_output(frame: &mut Frame<'_>, area: Rect, bionic: Option<&str>) {
    let block = Block::default()
        .title(Span::styled(" Bionic Text ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    // No result yet: render the empty shell
    let Some(text) = bionic else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = Vec::new();
    for sentence in sentence_items(text) {
        let mut spans = vec![Span::styled("• ", Style::default().fg(MUTED_TEXT))];
        for run in text_runs(&sentence) {
            let style = if run.bold {
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(HEADER_TEXT)
            };
            spans.push(Span::styled(run.text, style));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(widget, area);
}

fn draw_alert(frame: &mut Frame<'_>, body: Rect, message: &str) {
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled("Enter: OK", Style::default().fg(MUTED_TEXT))),
    ];

    let width = (message.chars().count() as u16).saturating_add(4).max(30);
    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Notice ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
