//! # vendo CLI Entry Point
//!
//! Parses CLI arguments using clap and routes subcommands to their handlers.
//!
//! ## Command Structure
//!
//! - **Build**: `sync`
//! - **Inspect**: `freeze`, `doctor`
//! - **Mutate**: `add`, `update`, `uninstall`
//! - **Misc**: `completion`

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::PathBuf;

use vendo::commands;
use vendo::config::Context;

#[derive(Parser)]
#[command(name = "vendo")]
#[command(about = "Vendor pip and git dependencies into a project-local directory", version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
struct Cli {
    /// Vendor directory root [default: vendor]
    #[arg(short = 'd', long = "dir", global = true)]
    dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a new vendor directory from a requirements file
    Sync {
        /// Requirements file to vendor
        #[arg(short = 'r', long = "requirement", default_value = "requirements.txt")]
        requirement: PathBuf,
    },
    /// Print the vendored package set in pip's freeze format
    Freeze,
    /// Move a dependency to a new version or revision
    Update {
        /// Package name
        package: String,
        /// Target version (packaged) or revision (source checkout)
        #[arg(id = "target_version", value_name = "VERSION")]
        version: String,
    },
    /// Remove a dependency
    Uninstall {
        /// Package name
        package: String,
    },
    /// Add a dependency (plain specifier or VCS reference)
    Add {
        /// Package specifier (e.g. requests==2.0.0) or git+<url>
        package: String,
    },
    /// Check availability of the external pip and git tools
    Doctor,
    /// Generate shell completions
    Completion {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "x".red(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Commands::Completion { shell } = &cli.command {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
        return Ok(());
    }

    let ctx = Context::resolve(cli.dir.as_deref())?;

    match &cli.command {
        Commands::Sync { requirement } => commands::sync::run_sync(&ctx, requirement),
        Commands::Freeze => commands::freeze::run_freeze(&ctx),
        Commands::Update { package, version } => commands::update::run_update(&ctx, package, version),
        Commands::Uninstall { package } => commands::uninstall::run_uninstall(&ctx, package),
        Commands::Add { package } => commands::add::run_add(&ctx, package),
        Commands::Doctor => commands::doctor::run_doctor(&ctx),
        Commands::Completion { .. } => unreachable!(),
    }
}
