//! `vendo add <package>` — add one dependency to an existing vendor
//! directory. A leading VCS scheme (`git+...`) means a source checkout;
//! anything else is installed as a packaged dependency.

use crate::config::Context;
use crate::requirements;
use anyhow::Result;
use colored::*;

pub fn run_add(ctx: &Context, package: &str) -> Result<()> {
    if requirements::is_vcs_reference(package) {
        let record = requirements::parse_editable(package)?;
        let name = record.name.clone();
        println!("{} Adding source dependency: {}...", "📦".blue(), name.bold());

        super::editable::link_editables(ctx, std::slice::from_ref(&record))?;

        ctx.git.stage_and_commit(
            ctx.vendor.root(),
            &["src", "vendor.pth", ".gitmodules"],
            &format!("Add {}", name),
        )
    } else {
        let record = requirements::parse_line(package)?
            .ok_or_else(|| anyhow::anyhow!("empty package specifier"))?;
        println!("{} Adding dependency: {}...", "📦".blue(), record.name.bold());

        let pb = super::spinner(format!("Installing {}...", record.name))?;
        let result = ctx.pip.install(&ctx.vendor.lib_dir(), &[record.pin_spec()]);
        match result {
            Ok(()) => pb.finish_with_message(format!("{} Installed {}", "✓".green(), record.name)),
            Err(_) => pb.finish_with_message(format!("{} Failed {}", "x".red(), record.name)),
        }
        result?;

        ctx.git.stage_and_commit(
            ctx.vendor.root(),
            &["lib"],
            &format!("Add {}", record.name),
        )
    }
}
