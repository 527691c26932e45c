// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use tabkit::export::{ExportFormat, PageLayout, PageSize};

#[derive(Parser)]
#[command(name = "tabkit")]
#[command(about = "Session wrapper around Tableau's tabcmd command-line client")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print final results
    #[arg(long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit JSON lines instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the tabcmd executable
    #[arg(long, global = true, value_name = "PATH")]
    pub tabcmd: Option<String>,

    /// Validate TLS certificates (omits --no-certcheck)
    #[arg(long, global = true)]
    pub certcheck: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new tabkit.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Log in to a Tableau server
    Login {
        /// Tableau site url
        #[arg(short, long)]
        site: Option<String>,

        /// Tableau username
        #[arg(short, long)]
        user: Option<String>,

        /// Tableau password
        #[arg(short, long, env = "TABKIT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log out of the current session
    Logout,

    /// Trigger an extract refresh for a data source
    Refresh {
        /// Path to the data source
        datasource: String,
    },

    /// Export a view to a local file
    Export {
        /// Path to the Tableau view
        view: String,

        /// File to save the export to
        filename: String,

        /// Output format
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Page layout for paginated formats
        #[arg(long)]
        page_layout: Option<PageLayout>,

        /// Page size for paginated formats
        #[arg(long)]
        page_size: Option<PageSize>,

        /// Width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
}
