//! Requirements file parsing.
//!
//! One `Requirement` per non-comment, non-blank line, in file order.
//! Editable entries (`-e <vcs>+<url>`) become git checkouts later; plain
//! entries keep their version specifiers verbatim for pip.

use crate::error::VendoError;
use regex::Regex;
use std::fs;
use std::path::Path;

/// VCS scheme prefixes pip recognizes for editable checkouts.
const VCS_SCHEMES: [&str; 4] = ["git+", "hg+", "svn+", "bzr+"];

/// A single `(operator, version)` pair, text preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpec {
    pub op: String,
    pub version: String,
}

/// One parsed requirements entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub specs: Vec<VersionSpec>,
    pub editable: bool,
    pub url: Option<String>,
}

impl Requirement {
    /// The specifier pip gets: `<name><op><version>` using the first
    /// version spec when one exists, otherwise the bare name.
    pub fn pin_spec(&self) -> String {
        match self.specs.first() {
            Some(spec) => format!("{}{}{}", self.name, spec.op, spec.version),
            None => self.name.clone(),
        }
    }
}

/// True when `input` is a VCS reference (`git+...`, `hg+...`, ...).
pub fn is_vcs_reference(input: &str) -> bool {
    VCS_SCHEMES.iter().any(|scheme| input.starts_with(scheme))
}

/// Parse a requirements file into records, preserving file order.
pub fn parse_file(path: &Path) -> Result<Vec<Requirement>, VendoError> {
    let content = fs::read_to_string(path)
        .map_err(|e| VendoError::Parse(format!("cannot read {}: {}", path.display(), e)))?;
    parse_lines(&content)
}

/// Parse requirements text. Blank lines and whole-line comments are skipped.
pub fn parse_lines(content: &str) -> Result<Vec<Requirement>, VendoError> {
    let mut records = Vec::new();
    for line in content.lines() {
        if let Some(record) = parse_line(line)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Parse one line; `None` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Requirement>, VendoError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if let Some(reference) = line
        .strip_prefix("-e ")
        .or_else(|| line.strip_prefix("--editable "))
    {
        return parse_editable(reference.trim()).map(Some);
    }

    parse_plain(line).map(Some)
}

/// Parse an editable VCS reference into a record.
pub fn parse_editable(reference: &str) -> Result<Requirement, VendoError> {
    if !is_vcs_reference(reference) {
        return Err(VendoError::Parse(format!(
            "editable reference '{}' has no VCS scheme prefix (git+, hg+, svn+, bzr+)",
            reference
        )));
    }
    Ok(Requirement {
        name: name_from_url(reference),
        specs: Vec::new(),
        editable: true,
        url: Some(reference.to_string()),
    })
}

fn parse_plain(line: &str) -> Result<Requirement, VendoError> {
    let re = Regex::new(r"^([A-Za-z0-9][A-Za-z0-9._-]*)\s*(.*)$").unwrap();
    let caps = re
        .captures(line)
        .ok_or_else(|| VendoError::Parse(format!("malformed requirement line: '{}'", line)))?;

    let name = caps[1].to_string();
    let rest = caps[2].trim();

    let mut specs = Vec::new();
    if !rest.is_empty() {
        let spec_re = Regex::new(r"^(==|!=|<=|>=|~=|<|>)\s*([^\s,]+)$").unwrap();
        for part in rest.split(',') {
            let part = part.trim();
            let caps = spec_re.captures(part).ok_or_else(|| {
                VendoError::Parse(format!("malformed version specifier '{}' in '{}'", part, line))
            })?;
            specs.push(VersionSpec {
                op: caps[1].to_string(),
                version: caps[2].to_string(),
            });
        }
    }

    Ok(Requirement {
        name,
        specs,
        editable: false,
        url: None,
    })
}

/// Derive a package name from a VCS reference: the `#egg=<name>` fragment
/// parameter when present, otherwise the final path segment minus a trailing
/// `.git` and any `@<rev>` suffix.
pub fn name_from_url(url: &str) -> String {
    if let Some(idx) = url.find("#egg=") {
        let egg = &url[idx + 5..];
        let egg = egg.split('&').next().unwrap_or(egg);
        if !egg.is_empty() {
            return egg.to_string();
        }
    }

    let without_fragment = url.split('#').next().unwrap_or(url);
    let basename = without_fragment
        .rsplit('/')
        .next()
        .unwrap_or(without_fragment);
    let basename = basename.split('@').next().unwrap_or(basename);
    basename.trim_end_matches(".git").to_string()
}

/// Strip the VCS scheme prefix and truncate at the first `#`, or at the
/// first `@` when no `#` is present. `#` wins when both occur; for
/// `git+https://host/repo@branch#egg=x` the bare URL keeps `@branch`.
pub fn bare_url(url: &str) -> String {
    let mut stripped = url;
    for scheme in VCS_SCHEMES {
        if let Some(rest) = url.strip_prefix(scheme) {
            stripped = rest;
            break;
        }
    }
    if let Some(idx) = stripped.find('#') {
        stripped[..idx].to_string()
    } else if let Some(idx) = stripped.find('@') {
        stripped[..idx].to_string()
    } else {
        stripped.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order_and_editable_flag() {
        let content = "\
requests==2.0.0

# comment line
-e git+https://example.com/foo.git#egg=foo
flask>=1.0,<2.0
";
        let records = parse_lines(content).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "requests");
        assert!(!records[0].editable);
        assert_eq!(records[1].name, "foo");
        assert!(records[1].editable);
        assert_eq!(
            records[1].url.as_deref(),
            Some("git+https://example.com/foo.git#egg=foo")
        );
        assert_eq!(records[2].name, "flask");
        assert_eq!(records[2].specs.len(), 2);
    }

    #[test]
    fn test_pin_spec_uses_first_specifier() {
        let records = parse_lines("flask>=1.0,<2.0\nrequests\n").unwrap();
        assert_eq!(records[0].pin_spec(), "flask>=1.0");
        assert_eq!(records[1].pin_spec(), "requests");
    }

    #[test]
    fn test_version_specs_kept_verbatim() {
        let records = parse_lines("django~=4.2.1\n").unwrap();
        assert_eq!(records[0].specs[0].op, "~=");
        assert_eq!(records[0].specs[0].version, "4.2.1");
    }

    #[test]
    fn test_editable_without_scheme_is_malformed() {
        let err = parse_lines("-e https://example.com/foo.git\n").unwrap_err();
        assert!(matches!(err, VendoError::Parse(_)));
    }

    #[test]
    fn test_malformed_specifier_is_rejected() {
        assert!(parse_lines("requests=2.0\n").is_err());
        assert!(parse_lines("requests == \n").is_err());
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let err = parse_file(Path::new("/nonexistent/requirements.txt")).unwrap_err();
        assert!(matches!(err, VendoError::Parse(_)));
    }

    #[test]
    fn test_name_from_egg_fragment() {
        assert_eq!(
            name_from_url("git+https://example.com/repo.git#egg=mypkg"),
            "mypkg"
        );
    }

    #[test]
    fn test_name_from_basename() {
        assert_eq!(name_from_url("git+https://example.com/foo.git"), "foo");
        assert_eq!(name_from_url("git+https://example.com/bar.git@v1.2"), "bar");
    }

    #[test]
    fn test_bare_url_hash_wins_over_at() {
        assert_eq!(
            bare_url("git+https://example.com/repo@branch#egg=name"),
            "https://example.com/repo@branch"
        );
    }

    #[test]
    fn test_bare_url_at_truncation_without_hash() {
        assert_eq!(
            bare_url("git+https://example.com/repo.git@v2"),
            "https://example.com/repo.git"
        );
    }

    #[test]
    fn test_bare_url_plain() {
        assert_eq!(
            bare_url("git+https://example.com/foo.git"),
            "https://example.com/foo.git"
        );
    }

    #[test]
    fn test_vcs_reference_detection() {
        assert!(is_vcs_reference("git+https://example.com/x.git"));
        assert!(is_vcs_reference("hg+https://example.com/x"));
        assert!(!is_vcs_reference("requests==2.0.0"));
        assert!(!is_vcs_reference("https://example.com/x.git"));
    }
}
