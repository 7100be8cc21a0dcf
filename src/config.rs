//! Configuration file (`vendo.toml`) and the resolved command context.
//!
//! The config file is optional: the working directory is checked first, then
//! `<config dir>/vendo/config.toml`. CLI flags win over config, config over
//! built-in defaults.

use crate::git::Git;
use crate::pip::Pip;
use crate::vendor::VendorDir;
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Default)]
pub struct VendoConfig {
    pub vendor: Option<VendorSection>,
    pub tools: Option<ToolsSection>,
}

#[derive(Deserialize, Debug, Default)]
pub struct VendorSection {
    pub dir: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ToolsSection {
    pub pip: Option<String>,
    pub git: Option<String>,
}

impl VendoConfig {
    pub fn load() -> Result<Self> {
        if let Some(config) = Self::load_from(Path::new("vendo.toml"))? {
            return Ok(config);
        }
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("vendo").join("config.toml");
            if let Some(config) = Self::load_from(&path)? {
                return Ok(config);
            }
        }
        Ok(Self::default())
    }

    fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&content)?))
    }
}

/// Everything a command needs, resolved once per invocation and immutable
/// afterwards. No other process-wide state exists.
#[derive(Debug, Clone)]
pub struct Context {
    pub vendor: VendorDir,
    pub pip: Pip,
    pub git: Git,
}

impl Context {
    pub fn resolve(cli_dir: Option<&str>) -> Result<Self> {
        let config = VendoConfig::load()?;
        let dir = cli_dir
            .map(str::to_string)
            .or_else(|| config.vendor.as_ref().and_then(|v| v.dir.clone()))
            .unwrap_or_else(|| "vendor".to_string());

        let mut root = PathBuf::from(dir);
        if root.is_relative() {
            root = std::env::current_dir()?.join(root);
        }

        let tools = config.tools.unwrap_or_default();
        Ok(Self {
            vendor: VendorDir::new(root),
            pip: Pip::new(tools.pip.as_deref().unwrap_or("pip")),
            git: Git::new(tools.git.as_deref().unwrap_or("git")),
        })
    }
}
