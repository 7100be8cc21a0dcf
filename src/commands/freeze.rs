//! `vendo freeze` — print the vendored package set in pip's freeze format.
//!
//! Read-only: no commit. The listing is pip's own stdout; a nonzero pip
//! exit code is forwarded as ours.

use crate::config::Context;
use anyhow::Result;

pub fn run_freeze(ctx: &Context) -> Result<()> {
    let status = ctx.pip.freeze(&ctx.vendor.lib_dir())?;
    if !status.success() {
        std::process::exit(status.code().unwrap_or(1));
    }
    Ok(())
}
