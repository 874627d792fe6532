use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, AppState, FormField};
use crate::ui::components;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let users = app.directory.users();

    if users.is_empty() {
        let empty_msg = Paragraph::new(vec![
            Line::from("No users yet."),
            Line::from(""),
            Line::from("Press 'n' to create one."),
        ])
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("All Users"));
        frame.render_widget(empty_msg, area);
        return;
    }

    let list_items: Vec<ListItem> = users
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = i == app.selected_index && app.state != AppState::CreateForm;
            let indicator = if is_selected { "> " } else { "  " };

            match (&app.edit_form, app.directory.is_editing(user.id)) {
                (Some(form), true) => {
                    let active = app.state == AppState::EditForm;
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::raw(indicator),
                            Span::styled(
                                format!("Editing: {}", user.username),
                                Style::default()
                                    .fg(Color::Yellow)
                                    .add_modifier(Modifier::BOLD),
                            ),
                        ]),
                        indent(components::field_line(
                            "Username:",
                            form,
                            FormField::Username,
                            active,
                        )),
                        indent(components::field_line(
                            "Email:",
                            form,
                            FormField::Email,
                            active,
                        )),
                    ])
                }
                _ => {
                    let style = if is_selected {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(indicator, style),
                        Span::styled(user.to_string(), style),
                        Span::styled(
                            format!("  #{}", user.id),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                }
            }
        })
        .collect();

    let title = format!("All Users ({})", users.len());
    let list = List::new(list_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default());

    // Keeps the selected row scrolled into view
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn indent(line: Line<'_>) -> Line<'_> {
    let mut spans = vec![Span::raw("    ")];
    spans.extend(line.spans);
    Line::from(spans)
}
