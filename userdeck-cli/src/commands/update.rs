use crate::output;

use clap::Args;
use color_eyre::eyre::bail;
use color_eyre::Result;

use user_service::{validate_draft, User, UserApi, UserId};

/// Change a user's username and/or email
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// User id
    pub id: UserId,

    #[arg(long, short)]
    pub username: Option<String>,

    #[arg(long, short)]
    pub email: Option<String>,
}

/// Fields not given keep the user's current values
pub async fn execute(args: UpdateArgs, api: &dyn UserApi) -> Result<User> {
    if args.username.is_none() && args.email.is_none() {
        bail!("nothing to update: pass --username and/or --email");
    }

    let current = api.get_user(args.id).await?;
    let mut draft = current.draft();
    if let Some(username) = args.username {
        draft.username = username;
    }
    if let Some(email) = args.email {
        draft.email = email;
    }
    validate_draft(&draft)?;

    output::status("Updating", &format!("user {}", args.id));
    let user = api.update_user(args.id, &draft).await?;
    tracing::info!(id = args.id, "user updated");

    output::success(&format!("User {} updated: {}", user.id, user));
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_service::testing::{Call, RecordingApi};
    use user_service::{ApiError, UserDraft};

    #[tokio::test]
    async fn test_overlays_given_fields() {
        let api = RecordingApi::with_users(vec![User::new(1, "ann", "a@x.com")]);
        let args = UpdateArgs {
            id: 1,
            username: Some("annie".to_string()),
            email: None,
        };

        execute(args, &api).await.unwrap();
        assert_eq!(
            api.calls(),
            vec![
                Call::Get(1),
                Call::Update(1, UserDraft::new("annie", "a@x.com"))
            ]
        );
    }

    #[tokio::test]
    async fn test_requires_a_field() {
        let api = RecordingApi::with_users(vec![User::new(1, "ann", "a@x.com")]);
        let args = UpdateArgs {
            id: 1,
            username: None,
            email: None,
        };

        assert!(execute(args, &api).await.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_user() {
        let api = RecordingApi::new();
        let args = UpdateArgs {
            id: 5,
            username: Some("x".to_string()),
            email: None,
        };

        let err = execute(args, &api).await.unwrap_err();
        assert_eq!(err.downcast_ref::<ApiError>(), Some(&ApiError::NotFound(5)));
    }
}
