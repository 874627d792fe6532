use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::DefaultTerminal;

use std::collections::VecDeque;
use std::sync::Arc;

use user_service::{
    event_channel, validate_draft, DirectoryEvent, EventReceiver, User, UserApi, UserDirectory,
    UserDraft, UserId,
};

/// Entries kept in the console panel
const CONSOLE_CAPACITY: usize = 200;

// =============================================================================
// Application States
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browse users; Edit/Delete act on the selected row
    UserList,
    /// Typing into the create form
    CreateForm,
    /// Typing into the inline edit form of the row in edit mode
    EditForm,
}

/// Network work requested by a key press, run by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Refresh,
    Create(UserDraft),
    Save(UserId, UserDraft),
    Delete(UserId),
    Bio(UserId),
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub state: AppState,
    pub directory: UserDirectory,
    pub selected_index: usize,
    pub should_quit: bool,

    pub create_form: FormState,
    pub edit_form: Option<FormState>,

    pub console: Console,
    pub event_receiver: EventReceiver,
    pub pending: Option<PendingAction>,
}

// =============================================================================
// Form State (create form and inline edit form)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Username,
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub email: String,
    pub focus: FormField,
}

impl FormState {
    /// Edit form seeded from the user's current values
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            focus: FormField::Username,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::Email => &self.email,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Username => &mut self.username,
            FormField::Email => &mut self.email,
        }
    }

    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn pop(&mut self) {
        self.focused_mut().pop();
    }

    pub fn toggle_field(&mut self) {
        self.focus = match self.focus {
            FormField::Username => FormField::Email,
            FormField::Email => FormField::Username,
        };
    }

    pub fn draft(&self) -> UserDraft {
        UserDraft::new(self.username.clone(), self.email.clone())
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.email.clear();
        self.focus = FormField::Username;
    }
}

// =============================================================================
// Console (diagnostic log panel)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub text: String,
    pub kind: ConsoleKind,
}

#[derive(Debug, Clone, Default)]
pub struct Console {
    lines: VecDeque<ConsoleLine>,
}

impl Console {
    pub fn push(&mut self, kind: ConsoleKind, text: impl Into<String>) {
        if self.lines.len() == CONSOLE_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(ConsoleLine {
            text: text.into(),
            kind,
        });
    }

    pub fn push_event(&mut self, event: &DirectoryEvent) {
        let kind = if event.is_failure() {
            ConsoleKind::Error
        } else {
            ConsoleKind::Info
        };
        self.push(kind, event.to_string());
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &ConsoleLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&ConsoleLine> {
        self.lines.back()
    }
}

// =============================================================================
// App Implementation
// =============================================================================

impl App {
    /// Build the app and fetch the initial user list
    pub async fn new(api: Arc<dyn UserApi>) -> Self {
        let (tx, rx) = event_channel();
        let mut app = Self {
            state: AppState::UserList,
            directory: UserDirectory::new(api).with_events(tx),
            selected_index: 0,
            should_quit: false,
            create_form: FormState::default(),
            edit_form: None,
            console: Console::default(),
            event_receiver: rx,
            pending: None,
        };
        app.pending = Some(PendingAction::Refresh);
        app.process_pending().await;
        app
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;
            self.handle_events()?;

            // Handle pending network call
            self.process_pending().await;
        }
        Ok(())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index < self.directory.users().len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.directory.users().get(self.selected_index)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn clamp_selection(&mut self) {
        let len = self.directory.users().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    // =========================================================================
    // Create Form
    // =========================================================================

    pub fn focus_create_form(&mut self) {
        self.state = AppState::CreateForm;
    }

    /// Leave the create form; typed values are kept
    pub fn leave_create_form(&mut self) {
        self.state = AppState::UserList;
    }

    pub fn submit_create_form(&mut self) {
        let draft = self.create_form.draft();
        match validate_draft(&draft) {
            Ok(()) => self.pending = Some(PendingAction::Create(draft)),
            Err(e) => self.reject_form(e),
        }
    }

    // =========================================================================
    // Edit Mode
    // =========================================================================

    pub fn edit_selected(&mut self) {
        let Some(user) = self.selected_user().cloned() else {
            return;
        };
        if self.directory.begin_edit(user.id) {
            self.edit_form = Some(FormState::from_user(&user));
            self.state = AppState::EditForm;
        }
    }

    /// Hand the edited values to the directory; the network call happens
    /// when the pending action is processed
    pub fn submit_edit_form(&mut self) {
        let (Some(id), Some(form)) = (self.directory.editing(), &self.edit_form) else {
            return;
        };
        let draft = form.draft();
        match validate_draft(&draft) {
            Ok(()) => self.pending = Some(PendingAction::Save(id, draft)),
            Err(e) => self.reject_form(e),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.directory.cancel_edit();
        self.edit_form = None;
        self.state = AppState::UserList;
    }

    /// Drop the edit form once the directory has left edit mode
    fn sync_edit_mode(&mut self) {
        if self.directory.editing().is_none() && self.edit_form.is_some() {
            self.edit_form = None;
            if self.state == AppState::EditForm {
                self.state = AppState::UserList;
            }
        }
    }

    fn reject_form(&mut self, error: user_service::ValidationError) {
        tracing::warn!(%error, "form not submitted");
        self.console
            .push(ConsoleKind::Error, format!("Not submitted: {}", error));
    }

    // =========================================================================
    // Row actions
    // =========================================================================

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_user().map(|u| u.id) {
            self.pending = Some(PendingAction::Delete(id));
        }
    }

    pub fn request_bio_selected(&mut self) {
        if let Some(id) = self.selected_user().map(|u| u.id) {
            self.pending = Some(PendingAction::Bio(id));
        }
    }

    pub fn request_refresh(&mut self) {
        self.pending = Some(PendingAction::Refresh);
    }

    // =========================================================================
    // Network
    // =========================================================================

    /// Run the pending call to completion. Failures have already been
    /// reported by the directory; state is left as it was.
    pub async fn process_pending(&mut self) {
        let Some(action) = self.pending.take() else {
            return;
        };

        match action {
            PendingAction::Refresh => {
                let _ = self.directory.refresh().await;
            }
            PendingAction::Create(draft) => {
                if self.directory.create(&draft).await.is_ok() {
                    self.create_form.clear();
                }
            }
            PendingAction::Save(id, draft) => {
                let _ = self.directory.save_edit(id, &draft).await;
            }
            PendingAction::Delete(id) => {
                let _ = self.directory.delete(id).await;
            }
            PendingAction::Bio(id) => {
                let _ = self.directory.request_bio(id).await;
            }
        }

        self.sync_edit_mode();
        self.clamp_selection();
        self.process_directory_events();
    }

    pub fn process_directory_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.console.push_event(&event);
        }
    }
}
