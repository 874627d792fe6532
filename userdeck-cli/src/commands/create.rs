use crate::output;

use clap::Args;
use color_eyre::Result;

use user_service::{validate_draft, User, UserApi, UserDraft};

/// Create a new user
#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long, short)]
    pub username: String,

    #[arg(long, short)]
    pub email: String,
}

pub async fn execute(args: CreateArgs, api: &dyn UserApi) -> Result<User> {
    let draft = UserDraft::new(args.username, args.email);
    validate_draft(&draft)?;

    output::status("Creating", &draft.username);
    let user = api.create_user(&draft).await?;
    tracing::info!(id = user.id, "user created");

    output::success(&format!("User created: {} (id {})", user, user.id));
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::testing::{Call, RecordingApi};

    #[tokio::test]
    async fn test_create_sends_one_request() {
        let api = RecordingApi::new();
        let args = CreateArgs {
            username: "ann".to_string(),
            email: "a@x.com".to_string(),
        };

        let user = execute(args, &api).await.unwrap();
        assert_eq!(user, User::new(1, "ann", "a@x.com"));
        assert_eq!(api.calls(), vec![Call::Create(UserDraft::new("ann", "a@x.com"))]);
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_locally() {
        let api = RecordingApi::new();
        let args = CreateArgs {
            username: "ann".to_string(),
            email: "ann-at-x".to_string(),
        };

        let err = execute(args, &api).await.unwrap_err();
        assert!(err.to_string().contains("not a valid email address"));
        assert!(api.calls().is_empty());
    }
}
