//! # vendo - Project-Local Dependency Vendoring
//!
//! vendo pins a project's third-party dependencies into a local, git-tracked
//! vendor directory: packaged dependencies are pip-installed into a private
//! `lib/` tree, source dependencies are checked out under `src/` and
//! registered as git submodules, and every mutation becomes one commit.
//!
//! ## Quick Start
//!
//! ```bash
//! # Build the vendor directory from requirements.txt
//! vendo sync -r requirements.txt
//!
//! # Later: add, pin, or drop individual dependencies
//! vendo add requests==2.0.0
//! vendo update foo v1.2
//! vendo uninstall requests
//! ```
//!
//! ## Module Organization
//!
//! - [`requirements`] - Requirements file parsing
//! - [`vendor`] - Vendor directory layout and manifest editing
//! - [`pip`] / [`git`] - External tool drivers
//! - [`commands`] - CLI command handlers

/// CLI command handlers extracted from main.
pub mod commands;

/// Configuration file parsing (`vendo.toml`) and the command context.
pub mod config;

/// Error kinds shared by every subcommand.
pub mod error;

/// Driver for the external git binary (plus git2 on the read side).
pub mod git;

/// Driver for the external pip binary.
pub mod pip;

/// Requirements file parsing.
pub mod requirements;

/// Terminal UI utilities (tables, colors).
pub mod ui;

/// Vendor directory layout, `vendor.pth` and `.gitmodules` editing.
pub mod vendor;
