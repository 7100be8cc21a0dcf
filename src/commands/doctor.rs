//! Doctor command handler
//!
//! Checks that the external tools every other subcommand shells out to are
//! actually available, and reports their versions.

use crate::config::Context;
use crate::ui;
use anyhow::Result;
use colored::*;

pub fn run_doctor(ctx: &Context) -> Result<()> {
    println!("{} Checking external tools...", "🚑".red());
    println!(
        "   OS: {} ({})",
        std::env::consts::OS.green(),
        std::env::consts::ARCH.cyan()
    );

    let mut table = ui::Table::new(&["Tool", "Status", "Version"]);

    match ctx.pip.version() {
        Some(version) => table.add_row(vec![
            "pip".to_string(),
            "Found".green().to_string(),
            version,
        ]),
        None => table.add_row(vec![
            "pip".to_string(),
            "Not Found".red().to_string(),
            "install Python/pip".dimmed().to_string(),
        ]),
    }

    match ctx.git.version() {
        Some(version) => table.add_row(vec![
            "git".to_string(),
            "Found".green().to_string(),
            version,
        ]),
        None => table.add_row(vec![
            "git".to_string(),
            "Not Found".red().to_string(),
            "install Git".dimmed().to_string(),
        ]),
    }

    table.print();

    if ctx.vendor.exists() {
        println!(
            "   {} Vendor directory present: {}",
            "✓".green(),
            ctx.vendor.root().display()
        );
    } else {
        println!(
            "   {} No vendor directory at {} (run 'vendo sync')",
            "!".yellow(),
            ctx.vendor.root().display()
        );
    }

    Ok(())
}
