//! Vendor directory layout and the two manifests it owns.
//!
//! The vendor root is itself a git repository holding `lib/` (pip's private
//! install tree), `src/<name>/` submodule checkouts, `vendor.pth` (one
//! `src/<name>` line per editable dependency), and git's `.gitmodules`.
//! `vendor.pth` and `.gitmodules` are edited in place, never regenerated.

use crate::error::VendoError;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct VendorDir {
    root: PathBuf,
}

impl VendorDir {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.exists()
    }

    /// Private install root for packaged dependencies.
    pub fn lib_dir(&self) -> PathBuf {
        self.root.join("lib")
    }

    /// Parent of the editable checkouts.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join("src")
    }

    pub fn src_entry(&self, name: &str) -> PathBuf {
        self.src_dir().join(name)
    }

    pub fn pth_file(&self) -> PathBuf {
        self.root.join("vendor.pth")
    }

    pub fn gitmodules(&self) -> PathBuf {
        self.root.join(".gitmodules")
    }

    /// Append `src/<name>` to `vendor.pth`, creating the file if needed.
    pub fn append_pth(&self, name: &str) -> Result<(), VendoError> {
        let path = self.pth_file();
        let mut content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(VendoError::ManifestIo { path, source: e }),
        };
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&format!("src/{}\n", name));
        fs::write(&path, content).map_err(|e| VendoError::ManifestIo { path, source: e })
    }

    /// Rewrite `vendor.pth` dropping the `src/<name>` line.
    pub fn remove_pth_entry(&self, name: &str) -> Result<(), VendoError> {
        let path = self.pth_file();
        let content =
            fs::read_to_string(&path).map_err(|e| VendoError::ManifestIo {
                path: path.clone(),
                source: e,
            })?;
        let entry = format!("src/{}", name);
        let mut rewritten = String::new();
        for line in content.lines() {
            if line != entry {
                rewritten.push_str(line);
                rewritten.push('\n');
            }
        }
        fs::write(&path, rewritten).map_err(|e| VendoError::ManifestIo { path, source: e })
    }

    /// Rewrite `.gitmodules` dropping the block for `src/<name>`.
    pub fn remove_submodule_entry(&self, name: &str) -> Result<(), VendoError> {
        let path = self.gitmodules();
        let content =
            fs::read_to_string(&path).map_err(|e| VendoError::ManifestIo {
                path: path.clone(),
                source: e,
            })?;
        let rewritten = strip_submodule_block(&content, name);
        fs::write(&path, rewritten).map_err(|e| VendoError::ManifestIo { path, source: e })
    }
}

/// Remove one submodule's block from `.gitmodules` text: on the header line
/// `[submodule "src/<name>"]`, skip it plus the next two lines (path, url)
/// unconditionally; every other line is kept verbatim, in order. This is a
/// fixed-offset skip, not a structural parse — a block longer than three
/// lines would be mis-edited. Kept that way deliberately.
pub fn strip_submodule_block(content: &str, name: &str) -> String {
    let header = format!("[submodule \"src/{}\"]", name);
    let mut out = String::new();
    let mut lines = content.lines();
    while let Some(line) = lines.next() {
        if line == header {
            lines.next();
            lines.next();
            continue;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
