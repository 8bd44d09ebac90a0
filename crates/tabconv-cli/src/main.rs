//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tabconv_cli::handlers::download::DownloadArgs;
use tabconv_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use tabconv_core::paths::env_file_path;
use tracing_subscriber::EnvFilter;

/// Load `.env` from the working directory, then the one under the data root.
/// Variables already set win.
fn load_env_files() {
    dotenvy::dotenv().ok();
    if let Ok(path) = env_file_path() {
        dotenvy::from_path(path).ok();
    }
}

/// `--verbose` forces debug; otherwise `RUST_LOG`, else warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(command: Commands) -> anyhow::Result<()> {
    let ctx = bootstrap(CliConfig::with_defaults()?).await?;

    match command {
        Commands::Download {
            url,
            output,
            dir,
            format,
            max_resolution,
            force,
            convert,
        } => {
            let args = DownloadArgs {
                url,
                output,
                dir,
                format,
                max_resolution,
                force,
                convert,
            };
            handlers::download::execute(&ctx, args).await
        }
        Commands::Convert { file, open_log } => {
            handlers::convert::execute(&ctx, &file, open_log).await
        }
        Commands::Streams { url } => handlers::streams::execute(&ctx, &url).await,
        Commands::Config { command } => handlers::config::execute(&ctx, command).await,
        Commands::Paths => handlers::paths::execute(&ctx).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    load_env_files();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        };
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cli_error = err.downcast_ref::<CliError>();
            if !cli_error.is_some_and(CliError::is_reported) {
                eprintln!("Error: {err:#}");
            }
            let code = cli_error.map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
