//! Source-dependency linking, shared by `sync` (bulk) and `add` (single).
//!
//! One pip invocation checks the records out under `<vendor>/src`; each
//! checkout is then recorded in `vendor.pth` and registered as a git
//! submodule of the vendor repository.

use crate::config::Context;
use crate::requirements::{Requirement, bare_url};
use anyhow::{Context as _, Result};
use colored::*;

pub fn link_editables(ctx: &Context, records: &[Requirement]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let urls = records
        .iter()
        .map(|r| {
            r.url
                .clone()
                .with_context(|| format!("editable record '{}' has no URL", r.name))
        })
        .collect::<Result<Vec<String>>>()?;

    let pb = super::spinner(format!("Checking out {} source dependencies...", records.len()))?;
    let result = ctx.pip.install_editable(&ctx.vendor.src_dir(), &urls);
    match result {
        Ok(()) => pb.finish_with_message(format!("{} Source checkouts complete", "✓".green())),
        Err(_) => pb.finish_with_message(format!("{} Source checkout failed", "x".red())),
    }
    result?;

    for record in records {
        let url = record.url.as_deref().unwrap_or_default();
        let bare = bare_url(url);
        let path = format!("src/{}", record.name);

        ctx.vendor.append_pth(&record.name)?;
        ctx.git.submodule_add(ctx.vendor.root(), &bare, &path)?;
        println!("   {} Registered submodule {} -> {}", "✓".green(), path, bare);
    }

    Ok(())
}
