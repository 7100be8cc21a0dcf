//! `vendo sync` — build a fresh vendor directory from a requirements file.

use crate::config::Context;
use crate::error::VendoError;
use crate::requirements;
use anyhow::Result;
use colored::*;
use std::fs;
use std::path::Path;

pub fn run_sync(ctx: &Context, requirement: &Path) -> Result<()> {
    // Refuse before any filesystem write.
    if ctx.vendor.exists() {
        return Err(VendoError::TargetExists(ctx.vendor.root().to_path_buf()).into());
    }

    let records = requirements::parse_file(requirement)?;
    let (editable, packaged): (Vec<_>, Vec<_>) = records.into_iter().partition(|r| r.editable);

    println!(
        "{} Vendoring {} packaged and {} source dependencies into {}",
        "📦".blue(),
        packaged.len(),
        editable.len(),
        ctx.vendor.root().display()
    );

    fs::create_dir_all(ctx.vendor.root())?;
    ctx.git.init(ctx.vendor.root())?;

    if !packaged.is_empty() {
        let specs: Vec<String> = packaged.iter().map(|r| r.pin_spec()).collect();
        let pb = super::spinner(format!("Installing {} packages...", specs.len()))?;
        let result = ctx.pip.install(&ctx.vendor.lib_dir(), &specs);
        match result {
            Ok(()) => pb.finish_with_message(format!("{} Packages installed", "✓".green())),
            Err(_) => pb.finish_with_message(format!("{} Package install failed", "x".red())),
        }
        result?;
    }

    super::editable::link_editables(ctx, &editable)?;

    let file_name = requirement
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| requirement.display().to_string());
    ctx.git.stage_and_commit(
        ctx.vendor.root(),
        &["lib", "src", "vendor.pth", ".gitmodules"],
        &format!("Sync vendored dependencies from {}", file_name),
    )
}
