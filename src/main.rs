// ABOUTME: Entry point for the tabkit CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use std::path::Path;
use tabkit::config::{self, Config};
use tabkit::detection::resolve_executable;
use tabkit::error::Result;
use tabkit::output::{Output, OutputMode};
use tabkit::session::Session;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let output = Output::new(OutputMode::from_flags(cli.quiet, cli.json));

    if let Err(e) = run(cli, &output) {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    let cwd = env::current_dir()?;

    match &cli.command {
        Commands::Init { force } => {
            config::init_config(&cwd, *force)?;
            output.success(&format!("Wrote {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Login {
            site,
            user,
            password,
        } => {
            let (config, mut session) = open_session(&cli, &cwd)?;
            commands::login(
                &mut session,
                &config,
                site.as_deref(),
                user.as_deref(),
                password,
                output,
            )
        }
        Commands::Logout => {
            let (_, mut session) = open_session(&cli, &cwd)?;
            commands::logout(&mut session, output)
        }
        Commands::Refresh { datasource } => {
            let (_, mut session) = open_session(&cli, &cwd)?;
            commands::refresh(&mut session, datasource, output)
        }
        Commands::Export {
            view,
            filename,
            format,
            page_layout,
            page_size,
            width,
            height,
        } => {
            let (config, mut session) = open_session(&cli, &cwd)?;
            let options = commands::export_options(
                &config,
                *format,
                *page_layout,
                *page_size,
                *width,
                *height,
            );
            commands::export(&mut session, view, filename, &options, output)
        }
    }
}

/// Load configuration and open a session with CLI overrides applied.
fn open_session(cli: &Cli, cwd: &Path) -> Result<(Config, Session)> {
    let config = Config::discover(cwd)?;
    let executable = resolve_executable(cli.tabcmd.as_deref().or(config.tabcmd.as_deref()));
    let certcheck = cli.certcheck || config.certcheck;
    Ok((config, Session::with_executable(executable, certcheck)))
}
