use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{Console, ConsoleKind, FormField, FormState};

pub fn render_header(title: &str, frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

pub fn render_footer(help_text: &str, frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Help"));
    frame.render_widget(footer, area);
}

/// One labelled input line; the focused field of an active form shows a cursor
pub fn field_line<'a>(
    label: &'a str,
    form: &'a FormState,
    field: FormField,
    active: bool,
) -> Line<'a> {
    let focused = active && form.focus == field;
    let value = form.value(field);
    let (value, style) = if focused {
        (
            format!("{}_", value),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (value.to_string(), Style::default().fg(Color::White))
    };

    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(Color::Gray)),
        Span::styled(value, style),
    ])
}

/// Most recent console entries, newest at the bottom
pub fn render_console(console: &Console, frame: &mut Frame, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = console.len().saturating_sub(visible);

    let items: Vec<ListItem> = console
        .lines()
        .skip(skip)
        .map(|line| {
            let style = match line.kind {
                ConsoleKind::Info => Style::default().fg(Color::DarkGray),
                ConsoleKind::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(line.text.as_str(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Console")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
