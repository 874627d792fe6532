pub mod client;
pub mod error;

pub use client::RestClient;

// Re-export types needed by clients
pub use user_service::{ApiError, ApiResult, BioJob, User, UserApi, UserDraft, UserId};
