//! Error kinds shared by every subcommand.
//!
//! Commands return `anyhow::Result`; the kinds below travel inside and stay
//! downcastable for callers that need to branch on them.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendoError {
    #[error("vendor directory '{}' already exists", .0.display())]
    TargetExists(PathBuf),

    #[error("failed to parse requirements: {0}")]
    Parse(String),

    #[error("pip install failed (exit {code}): {stderr}")]
    DependencyInstall { code: i32, stderr: String },

    #[error("pip uninstall failed (exit {code}): {stderr}")]
    DependencyUninstall { code: i32, stderr: String },

    #[error("'{}' is not a git checkout", .0.display())]
    UnsupportedVcs(PathBuf),

    #[error("cannot access manifest {}: {source}", .path.display())]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VendoError {
    /// Build an install/uninstall error from a finished pip invocation.
    pub fn from_pip_output(output: &std::process::Output, uninstall: bool) -> Self {
        let code = output.status.code().unwrap_or(1);
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if uninstall {
            VendoError::DependencyUninstall { code, stderr }
        } else {
            VendoError::DependencyInstall { code, stderr }
        }
    }
}
