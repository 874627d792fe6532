use crate::output;

use clap::Args;
use color_eyre::Result;

use user_service::{UserApi, UserId};

/// Delete a user
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// User id
    pub id: UserId,
}

pub async fn execute(args: DeleteArgs, api: &dyn UserApi) -> Result<()> {
    output::status("Deleting", &format!("user {}", args.id));
    api.delete_user(args.id).await?;
    tracing::info!(id = args.id, "user deleted");
    output::success(&format!("User {} deleted.", args.id));
    Ok(())
}
