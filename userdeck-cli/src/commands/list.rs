use crate::output;

use clap::Args;
use color_eyre::Result;

use user_service::{UserApi, UserId};

/// Show a single user
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// User id
    pub id: UserId,
}

pub async fn list(api: &dyn UserApi) -> Result<()> {
    let users = api.list_users().await?;

    if users.is_empty() {
        output::info("No users yet");
        return Ok(());
    }

    output::user_table_header();
    for user in &users {
        output::user_row(user);
    }
    output::dim(&format!("{} user(s)", users.len()));
    Ok(())
}

pub async fn show(args: ShowArgs, api: &dyn UserApi) -> Result<()> {
    let user = api.get_user(args.id).await?;
    output::user_table_header();
    output::user_row(&user);
    Ok(())
}
