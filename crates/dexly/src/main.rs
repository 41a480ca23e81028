mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use dexly_core::Catalog;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;
use crate::output::OutputOpts;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't touch the network
        Command::Config(args) => commands::config_cmd::handle(args, cli.global.quiet),

        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "dexly", &mut std::io::stdout());
            Ok(())
        }

        Command::List(args) => {
            let (catalog, out) = build_session(&cli.global)?;
            commands::list::handle(&catalog, args, out).await
        }

        Command::Show(args) => {
            let (catalog, out) = build_session(&cli.global)?;
            commands::show::handle(&catalog, args, out).await
        }
    }
}

/// Resolve config file + flags into a catalog handle and output settings.
fn build_session(global: &GlobalOpts) -> Result<(Catalog, OutputOpts), CliError> {
    let cfg = config::load_config()?;
    let catalog_config = config::resolve_catalog(global, &cfg)?;
    tracing::debug!(base_url = %catalog_config.base_url, "catalog configured");

    let out = OutputOpts {
        format: config::resolve_output(global, &cfg),
        color: output::should_color(config::resolve_color(global, &cfg)),
        quiet: global.quiet,
    };

    Ok((Catalog::new(catalog_config)?, out))
}
