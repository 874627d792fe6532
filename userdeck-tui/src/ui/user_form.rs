use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, AppState, FormField};
use crate::ui::components;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let active = app.state == AppState::CreateForm;
    let form = &app.create_form;

    let lines = vec![
        components::field_line("Username:", form, FormField::Username, active),
        components::field_line("Email:", form, FormField::Email, active),
    ];

    let border = if active { Color::Cyan } else { Color::DarkGray };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Create New User")
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, area);
}
