//! Thin driver for the external `git` binary, plus the shared commit step.
//!
//! Mutations go through the CLI; the read side (is this path a real
//! checkout, what revision is it at) uses git2 directly.

use anyhow::{Result, anyhow};
use colored::*;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone)]
pub struct Git {
    program: String,
}

impl Git {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// Run git in `workdir`, surfacing stderr on a nonzero exit.
    fn run(&self, workdir: &Path, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|e| anyhow!("failed to run '{}': {}", self.program, e))?;
        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(anyhow!(
                "git {} failed: {}",
                args.first().unwrap_or(&""),
                stderr.trim()
            ))
        }
    }

    pub fn init(&self, dir: &Path) -> Result<()> {
        self.run(dir, &["init"])?;
        Ok(())
    }

    pub fn submodule_add(&self, root: &Path, url: &str, path: &str) -> Result<()> {
        self.run(root, &["submodule", "add", url, path])?;
        Ok(())
    }

    /// Drop a path from the index while leaving the worktree alone.
    pub fn rm_cached(&self, root: &Path, path: &str) -> Result<()> {
        self.run(root, &["rm", "--cached", path])?;
        Ok(())
    }

    pub fn fetch(&self, checkout: &Path) -> Result<()> {
        self.run(checkout, &["fetch"])?;
        Ok(())
    }

    pub fn checkout(&self, checkout: &Path, rev: &str) -> Result<()> {
        self.run(checkout, &["checkout", rev])?;
        Ok(())
    }

    /// Stage the given paths, skipping ones that don't exist on disk, then
    /// commit. When nothing is stageable or nothing changed, the commit is
    /// skipped with a warning rather than failing the operation.
    pub fn stage_and_commit(&self, root: &Path, paths: &[&str], message: &str) -> Result<()> {
        let existing: Vec<&str> = paths
            .iter()
            .copied()
            .filter(|p| root.join(p).exists())
            .collect();

        if existing.is_empty() {
            println!("{} Nothing to commit for: {}", "!".yellow(), message);
            return Ok(());
        }

        let mut args = vec!["add", "-A", "--"];
        args.extend(existing.iter().copied());
        self.run(root, &args)?;

        let status = self.run(root, &["status", "--porcelain"])?;
        if status.trim().is_empty() {
            println!("{} Nothing to commit for: {}", "!".yellow(), message);
            return Ok(());
        }

        self.run(root, &["commit", "-m", message])?;
        println!("{} Committed: {}", "✓".green(), message);
        Ok(())
    }

    /// True when `path` opens as a git repository (a submodule checkout
    /// qualifies, its `.git` is a file pointing into the superproject).
    pub fn is_checkout(&self, path: &Path) -> bool {
        git2::Repository::open(path).is_ok()
    }

    /// Short revision of HEAD, for reporting after an update.
    pub fn head_short(&self, path: &Path) -> Option<String> {
        let repo = git2::Repository::open(path).ok()?;
        let head = repo.head().ok()?.peel_to_commit().ok()?;
        let id = head.id().to_string();
        Some(id.chars().take(8).collect())
    }

    /// First line of `git --version`, if the binary runs at all.
    pub fn version(&self) -> Option<String> {
        let output = Command::new(&self.program).arg("--version").output().ok()?;
        if !output.status.success() {
            return None;
        }
        let text = String::from_utf8_lossy(&output.stdout);
        text.lines().next().map(|line| line.trim().to_string())
    }
}
