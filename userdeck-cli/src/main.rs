mod commands;
mod logging;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::Result;

use commands::bio::BioArgs;
use commands::create::CreateArgs;
use commands::delete::DeleteArgs;
use commands::list::ShowArgs;
use commands::update::UpdateArgs;
use user_rpc::RestClient;
use user_service::Config;

/// Manage users on a REST backend
#[derive(Parser, Debug)]
#[command(name = "userdeck", version, about)]
struct Cli {
    /// Backend base URL (default: http://localhost:8080)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Extra config file, applied after the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file for the interactive client
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive client (default)
    Tui,
    /// List all users
    List,
    Show(ShowArgs),
    Create(CreateArgs),
    Update(UpdateArgs),
    Delete(DeleteArgs),
    Bio(BioArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.set_base_url(url);
    }
    if let Some(file) = cli.log_file {
        config.log.file = Some(file);
    }

    let client = RestClient::from_config(&config.api)?;
    let command = cli.command.unwrap_or(Command::Tui);

    if matches!(command, Command::Tui) {
        let log_path = logging::init_file(&config.log)?;
        tracing::info!(base_url = %client.base_url(), log = %log_path.display(), "starting userdeck");
    } else {
        logging::init_stderr(&config.log)?;
        tracing::debug!(base_url = %client.base_url(), "running {:?}", command);
    }

    run_command(command, client).await
}

async fn run_command(command: Command, client: RestClient) -> Result<()> {
    match command {
        Command::Tui => userdeck_tui::run(Arc::new(client)).await,
        Command::List => commands::list::list(&client).await,
        Command::Show(args) => commands::list::show(args, &client).await,
        Command::Create(args) => commands::create::execute(args, &client).await.map(|_| ()),
        Command::Update(args) => commands::update::execute(args, &client).await.map(|_| ()),
        Command::Delete(args) => commands::delete::execute(args, &client).await,
        Command::Bio(args) => commands::bio::execute(args, &client).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_tui() {
        let cli = Cli::try_parse_from(["userdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_update() {
        let cli = Cli::try_parse_from([
            "userdeck",
            "update",
            "1",
            "--username",
            "annie",
            "--api-url",
            "http://api:9000",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://api:9000"));
        match cli.command {
            Some(Command::Update(args)) => {
                assert_eq!(args.id, 1);
                assert_eq!(args.username.as_deref(), Some("annie"));
                assert_eq!(args.email, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
