//! `vendo uninstall <package>` — remove a dependency.
//!
//! Same branch as `update`: a directory under `<vendor>/src` is a source
//! checkout, anything else a packaged install.

use crate::config::Context;
use anyhow::Result;
use colored::*;
use std::fs;

pub fn run_uninstall(ctx: &Context, package: &str) -> Result<()> {
    let checkout = ctx.vendor.src_entry(package);

    if checkout.is_dir() {
        println!("{} Removing source checkout {}", "🗑️".red(), package.bold());
        let path = format!("src/{}", package);

        ctx.vendor.remove_pth_entry(package)?;
        ctx.vendor.remove_submodule_entry(package)?;
        ctx.git.rm_cached(ctx.vendor.root(), &path)?;
        fs::remove_dir_all(&checkout)?;

        ctx.git.stage_and_commit(
            ctx.vendor.root(),
            &[".gitmodules", "vendor.pth"],
            &format!("Uninstall {}", package),
        )
    } else {
        println!("{} Uninstalling package {}", "🗑️".red(), package.bold());
        ctx.pip.uninstall(&ctx.vendor.lib_dir(), package)?;

        ctx.git.stage_and_commit(
            ctx.vendor.root(),
            &["lib"],
            &format!("Uninstall {}", package),
        )
    }
}
