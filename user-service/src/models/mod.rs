pub mod user;

pub use user::{BioJob, User, UserDraft, UserId};
