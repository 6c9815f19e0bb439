//! coffee-env CLI entry point.

use clap::Parser;

use coffee_env::cli::{self, Cli, Commands, EnvironmentSource};
use coffee_env::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig {
        log_dir: cli.log_dir.clone(),
        rotation: cli.log_rotation,
        ..LogConfig::from_verbosity(cli.verbose, cli.json)
    };
    let _logger = match LoggerImpl::init(&log_config) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };

    let source = EnvironmentSource::from_cli(&cli);
    let result = match cli.command {
        Commands::Show => cli::commands::show::execute(&source, cli.json).await,
        Commands::Validate => cli::commands::validate::execute(&source, cli.json).await,
        Commands::Export(args) => cli::commands::export::execute(args, &source, cli.json).await,
        Commands::LoginUrl(args) => cli::commands::login_url::execute(args, &source, cli.json).await,
    };

    if let Err(err) = result {
        cli::handle_error(err, cli.json);
    }
}
