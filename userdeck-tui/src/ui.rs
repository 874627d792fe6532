pub mod components;
pub mod layout;
pub mod user_form;
pub mod user_list;

use ratatui::Frame;

use crate::app::{App, AppState};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());

    components::render_header("User Management", frame, chunks[0]);
    user_form::render(app, frame, chunks[1]);
    user_list::render(app, frame, chunks[2]);
    components::render_console(&app.console, frame, chunks[3]);
    components::render_footer(help_text(app.state), frame, chunks[4]);
}

fn help_text(state: AppState) -> &'static str {
    match state {
        AppState::UserList => {
            "j/k: Navigate | e: Edit | d: Delete | n: New user | b: Bio | r: Refresh | q: Quit"
        }
        AppState::CreateForm => "Tab: Switch field | Enter: Create User | Esc: Back to list",
        AppState::EditForm => "Tab: Switch field | Enter: Save | Esc: Cancel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;
    use user_service::testing::RecordingApi;
    use user_service::User;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn app() -> App {
        let api = Arc::new(RecordingApi::with_users(vec![
            User::new(1, "ann", "a@x.com"),
            User::new(2, "bob", "b@x.com"),
        ]));
        App::new(api).await
    }

    #[tokio::test]
    async fn test_renders_read_only_rows() {
        let app = app().await;
        let text = screen(&app);

        assert!(text.contains("All Users (2)"));
        assert!(text.contains("ann - (a@x.com)"));
        assert!(text.contains("bob - (b@x.com)"));
        assert!(text.contains("Loaded 2 user(s)"));
    }

    #[tokio::test]
    async fn test_row_in_edit_mode_renders_form() {
        let mut app = app().await;
        app.move_down();
        app.edit_selected();
        let text = screen(&app);

        assert!(text.contains("Editing: bob"));
        assert!(text.contains("bob_"));
        assert!(text.contains("ann - (a@x.com)"));
        assert!(!text.contains("bob - (b@x.com)"));
        assert!(text.contains("Enter: Save"));
    }

    #[tokio::test]
    async fn test_empty_list_message() {
        let app = App::new(Arc::new(RecordingApi::new())).await;
        assert!(screen(&app).contains("No users yet."));
    }
}
