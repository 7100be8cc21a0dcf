//! `vendo update <package> <version>` — move a dependency to a new
//! version or revision.
//!
//! A directory under `<vendor>/src` means the dependency is a source
//! checkout; anything else is treated as a packaged install.

use crate::config::Context;
use crate::error::VendoError;
use anyhow::Result;
use colored::*;

pub fn run_update(ctx: &Context, package: &str, version: &str) -> Result<()> {
    let checkout = ctx.vendor.src_entry(package);

    if checkout.is_dir() {
        if !ctx.git.is_checkout(&checkout) {
            return Err(VendoError::UnsupportedVcs(checkout).into());
        }

        println!("{} Updating checkout {} to {}", "📦".blue(), package.bold(), version);
        ctx.git.fetch(&checkout)?;
        ctx.git.checkout(&checkout, version)?;
        if let Some(rev) = ctx.git.head_short(&checkout) {
            println!("   {} {} now at {}", "✓".green(), package, rev);
        }

        ctx.git.stage_and_commit(
            ctx.vendor.root(),
            &[&format!("src/{}", package)],
            &format!("Update {} to {}", package, version),
        )
    } else {
        println!("{} Reinstalling {} at {}", "📦".blue(), package.bold(), version);
        let lib = ctx.vendor.lib_dir();
        ctx.pip.uninstall(&lib, package)?;
        ctx.pip
            .install(&lib, &[format!("{}=={}", package, version)])?;

        ctx.git.stage_and_commit(
            ctx.vendor.root(),
            &["lib"],
            &format!("Update {} to {}", package, version),
        )
    }
}
