//! Thin driver for the external `pip` binary.
//!
//! Argument construction is split out so the exact invocations are
//! unit-testable without spawning processes. Every call blocks until pip
//! finishes; there is no retry and no timeout.

use crate::error::VendoError;
use std::path::Path;
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone)]
pub struct Pip {
    program: String,
}

impl Pip {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    fn base_command(&self) -> Command {
        Command::new(&self.program)
    }

    /// `install -I --target=<lib> <spec>...` — `-I` forces reinstallation
    /// even when a satisfying version is already present.
    pub fn install_args(lib: &Path, specs: &[String]) -> Vec<String> {
        let mut args = vec![
            "install".to_string(),
            "-I".to_string(),
            format!("--target={}", lib.display()),
        ];
        args.extend(specs.iter().cloned());
        args
    }

    /// `install --src=<src> -e<url>...` — one `-e` per editable record,
    /// producing checkouts under `<src>/<name>`.
    pub fn install_editable_args(src: &Path, urls: &[String]) -> Vec<String> {
        let mut args = vec!["install".to_string(), format!("--src={}", src.display())];
        args.extend(urls.iter().map(|url| format!("-e{}", url)));
        args
    }

    pub fn uninstall_args(package: &str) -> Vec<String> {
        vec!["uninstall".to_string(), "-y".to_string(), package.to_string()]
    }

    pub fn freeze_args(lib: &Path) -> Vec<String> {
        vec!["freeze".to_string(), format!("--path={}", lib.display())]
    }

    pub fn install(&self, lib: &Path, specs: &[String]) -> Result<(), VendoError> {
        self.run_install(&Self::install_args(lib, specs))
    }

    pub fn install_editable(&self, src: &Path, urls: &[String]) -> Result<(), VendoError> {
        self.run_install(&Self::install_editable_args(src, urls))
    }

    fn run_install(&self, args: &[String]) -> Result<(), VendoError> {
        let output = self
            .base_command()
            .args(args)
            .output()
            .map_err(|e| VendoError::DependencyInstall {
                code: 1,
                stderr: format!("failed to run '{}': {}", self.program, e),
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(VendoError::from_pip_output(&output, false))
        }
    }

    /// `uninstall -y <package>` with `PYTHONPATH` pointed at the private
    /// install root so pip resolves the vendored installation rather than a
    /// global one. The original tool deleted an environment marker instead;
    /// see DESIGN.md.
    pub fn uninstall(&self, lib: &Path, package: &str) -> Result<(), VendoError> {
        let output = self
            .base_command()
            .args(Self::uninstall_args(package))
            .env("PYTHONPATH", lib)
            .output()
            .map_err(|e| VendoError::DependencyUninstall {
                code: 1,
                stderr: format!("failed to run '{}': {}", self.program, e),
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(VendoError::from_pip_output(&output, true))
        }
    }

    /// `freeze --path=<lib>`, stdout inherited so the listing is the
    /// command's own output. The caller forwards a nonzero exit code.
    pub fn freeze(&self, lib: &Path) -> anyhow::Result<ExitStatus> {
        let status = self.base_command().args(Self::freeze_args(lib)).status()?;
        Ok(status)
    }

    /// First line of `pip --version`, if the binary runs at all.
    pub fn version(&self) -> Option<String> {
        let output = self.base_command().arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        let text = String::from_utf8_lossy(&output.stdout);
        text.lines().next().map(|line| line.trim().to_string())
    }
}
