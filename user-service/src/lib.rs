// User Service Library
// Domain types and list orchestration for the userdeck client

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod events;
pub mod models;
pub mod validation;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Re-export commonly used types
pub use api::UserApi;
pub use config::{Config, ConfigError, DEFAULT_API_URL};
pub use directory::UserDirectory;
pub use error::{ApiError, ApiResult};
pub use events::{event_channel, Action, DirectoryEvent, EventReceiver, EventSender};
pub use models::{BioJob, User, UserDraft, UserId};
pub use validation::{validate_draft, ValidationError};
