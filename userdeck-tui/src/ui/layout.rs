use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen: header, create form, user list, console, footer
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Create form
            Constraint::Min(3),    // User list
            Constraint::Length(8), // Console
            Constraint::Length(3), // Footer
        ])
        .split(area)
        .to_vec()
}
