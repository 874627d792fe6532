// Directory Events
// Diagnostic reporting for calls made by the user directory

use crate::models::UserId;

use std::fmt;
use tokio::sync::mpsc;

/// Sender for directory events
pub type EventSender = mpsc::UnboundedSender<DirectoryEvent>;

/// Receiver for directory events
pub type EventReceiver = mpsc::UnboundedReceiver<DirectoryEvent>;

/// Create a new event channel
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Which call an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fetch,
    Create,
    Update(UserId),
    Delete(UserId),
    Bio(UserId),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fetch => write!(f, "fetching users"),
            Action::Create => write!(f, "creating user"),
            Action::Update(id) => write!(f, "updating user {}", id),
            Action::Delete(id) => write!(f, "deleting user {}", id),
            Action::Bio(id) => write!(f, "requesting bio for user {}", id),
        }
    }
}

/// Events emitted as the directory talks to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    /// List replaced by a fresh fetch
    Fetched { count: usize },

    Created { id: UserId, username: String },

    Updated { id: UserId },

    Deleted { id: UserId },

    /// Bio generation queued on the server
    BioQueued { id: UserId, task_id: String },

    /// A call failed; state was left untouched
    Failed { action: Action, error: String },
}

impl DirectoryEvent {
    pub fn is_failure(&self) -> bool {
        matches!(self, DirectoryEvent::Failed { .. })
    }
}

impl fmt::Display for DirectoryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryEvent::Fetched { count } => write!(f, "Loaded {} user(s)", count),
            DirectoryEvent::Created { id, username } => {
                write!(f, "User created: {} (id {})", username, id)
            }
            DirectoryEvent::Updated { id } => write!(f, "User {} updated.", id),
            DirectoryEvent::Deleted { id } => write!(f, "User {} deleted.", id),
            DirectoryEvent::BioQueued { id, task_id } => {
                write!(f, "Bio generation started for user {} (task {})", id, task_id)
            }
            DirectoryEvent::Failed { action, error } => write!(f, "Error {}: {}", action, error),
        }
    }
}
