use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, AppState};

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.state {
            AppState::UserList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Up | KeyCode::Char('k') => self.move_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_down(),
                KeyCode::Enter | KeyCode::Char('e') => self.edit_selected(),
                KeyCode::Delete | KeyCode::Char('d') => self.delete_selected(),
                KeyCode::Char('n') | KeyCode::Char('c') => self.focus_create_form(),
                KeyCode::Char('b') => self.request_bio_selected(),
                KeyCode::Char('r') => self.request_refresh(),
                _ => {}
            },
            AppState::CreateForm => match key_event.code {
                KeyCode::Esc => self.leave_create_form(),
                KeyCode::Enter => self.submit_create_form(),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    self.create_form.toggle_field()
                }
                KeyCode::Backspace => self.create_form.pop(),
                KeyCode::Char(c) => self.create_form.push(c),
                _ => {}
            },
            AppState::EditForm => match key_event.code {
                KeyCode::Esc => self.cancel_edit(),
                KeyCode::Enter => self.submit_edit_form(),
                _ => {
                    if let Some(form) = &mut self.edit_form {
                        match key_event.code {
                            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                                form.toggle_field()
                            }
                            KeyCode::Backspace => form.pop(),
                            KeyCode::Char(c) => form.push(c),
                            _ => {}
                        }
                    }
                }
            },
        }
        Ok(())
    }
}
