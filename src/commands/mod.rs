//! CLI command handlers, one module per subcommand.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

pub mod add;
pub mod doctor;
pub mod editable;
pub mod freeze;
pub mod sync;
pub mod uninstall;
pub mod update;

/// Spinner shown around long-running pip invocations.
pub(crate) fn spinner(message: String) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""]),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}
