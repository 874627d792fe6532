use crate::output;

use clap::Args;
use color_eyre::Result;

use user_service::{UserApi, UserId};

/// Ask the backend to generate a bio for a user
#[derive(Args, Debug)]
pub struct BioArgs {
    /// User id
    pub id: UserId,
}

pub async fn execute(args: BioArgs, api: &dyn UserApi) -> Result<()> {
    let job = api.request_bio(args.id).await?;
    tracing::info!(id = args.id, task_id = %job.task_id, "bio generation queued");
    output::success(&job.message);
    output::info(&format!("task id: {}", job.task_id));
    Ok(())
}
