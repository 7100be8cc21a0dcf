//! Integration tests for the mutating operations (`add`, `update`,
//! `uninstall`) and for `freeze`, using the same stub pip/git tools as the
//! sync tests.
#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn test_projects_root() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".tmp_test_projects")
        .join("ops")
}

fn get_vendo_binary() -> PathBuf {
    let target_dir = std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target"));
    target_dir.join("debug").join("vendo")
}

const PIP_STUB: &str = r#"#!/bin/sh
printf 'pip %s\n' "$*" >> "$VENDO_TOOL_LOG"
if [ "$1" = "freeze" ]; then echo "requests==2.0.0"; fi
src=""
for a in "$@"; do
  case "$a" in
    --target=*) mkdir -p "${a#--target=}" ;;
    --src=*) src="${a#--src=}"; mkdir -p "$src" ;;
    -e*) ref="${a#-e}"
         name="${ref##*egg=}"
         if [ "$name" = "$ref" ]; then name=$(basename "${ref%%#*}" .git); fi
         mkdir -p "$src/$name" ;;
  esac
done
exit 0
"#;

const GIT_STUB: &str = r#"#!/bin/sh
printf 'git %s\n' "$*" >> "$VENDO_TOOL_LOG"
case "$1" in
  init) mkdir -p .git ;;
  submodule) printf '[submodule "%s"]\n\tpath = %s\n\turl = %s\n' "$4" "$4" "$3" >> .gitmodules ;;
  status) echo " M ." ;;
esac
exit 0
"#;

fn write_stub(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    fs::write(path, body).expect("Failed to write stub tool");
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod stub tool");
}

/// Scratch project with stub tools and an existing (empty) vendor directory.
fn create_test_project(name: &str) -> PathBuf {
    let project = test_projects_root().join(name);
    if project.exists() {
        fs::remove_dir_all(&project).ok();
    }
    let bin = project.join("bin");
    fs::create_dir_all(&bin).expect("Failed to create test directory");
    fs::create_dir_all(project.join("vendor")).expect("Failed to create vendor directory");

    write_stub(&bin.join("pip"), PIP_STUB);
    write_stub(&bin.join("git"), GIT_STUB);

    let config = format!(
        "[tools]\npip = \"{}\"\ngit = \"{}\"\n",
        bin.join("pip").display(),
        bin.join("git").display()
    );
    fs::write(project.join("vendo.toml"), config).expect("Failed to write vendo.toml");

    project
}

fn run_vendo(project: &Path, args: &[&str]) -> std::process::Output {
    Command::new(get_vendo_binary())
        .args(args)
        .current_dir(project)
        .env("VENDO_TOOL_LOG", project.join("tool-log.txt"))
        .output()
        .expect("Failed to execute vendo")
}

fn tool_log(project: &Path) -> String {
    fs::read_to_string(project.join("tool-log.txt")).unwrap_or_default()
}

#[test]
fn test_add_plain_package() {
    if !get_vendo_binary().exists() {
        eprintln!("Skipping test: vendo binary not found");
        return;
    }
    let project = create_test_project("add_plain");

    let output = run_vendo(&project, &["add", "requests==2.0.0"]);
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let log = tool_log(&project);
    assert!(log.contains("pip install -I --target="));
    assert!(log.contains("requests==2.0.0"));
    assert!(log.contains("git commit -m Add requests"));
}

#[test]
fn test_add_vcs_reference() {
    if !get_vendo_binary().exists() {
        eprintln!("Skipping test: vendo binary not found");
        return;
    }
    let project = create_test_project("add_vcs");

    let output = run_vendo(&project, &["add", "git+https://example.com/bar.git#egg=bar"]);
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let vendor = project.join("vendor");
    assert!(vendor.join("src").join("bar").is_dir());
    assert_eq!(
        fs::read_to_string(vendor.join("vendor.pth")).unwrap(),
        "src/bar\n"
    );
    let log = tool_log(&project);
    assert!(log.contains("git submodule add https://example.com/bar.git src/bar"));
    assert!(log.contains("git commit -m Add bar"));
}

#[test]
fn test_uninstall_packaged_dependency() {
    if !get_vendo_binary().exists() {
        eprintln!("Skipping test: vendo binary not found");
        return;
    }
    let project = create_test_project("uninstall_packaged");

    let output = run_vendo(&project, &["uninstall", "requests"]);
    assert!(
        output.status.success(),
        "uninstall failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let log = tool_log(&project);
    assert!(log.contains("pip uninstall -y requests"));
    assert!(log.contains("git commit -m Uninstall requests"));
}

#[test]
fn test_uninstall_source_checkout_edits_manifests() {
    if !get_vendo_binary().exists() {
        eprintln!("Skipping test: vendo binary not found");
        return;
    }
    let project = create_test_project("uninstall_source");
    let vendor = project.join("vendor");
    fs::create_dir_all(vendor.join("src").join("foo")).unwrap();
    fs::write(vendor.join("vendor.pth"), "src/foo\nsrc/zed\n").unwrap();
    fs::write(
        vendor.join(".gitmodules"),
        "[submodule \"src/alpha\"]\n\tpath = src/alpha\n\turl = https://example.com/alpha.git\n\
         [submodule \"src/foo\"]\n\tpath = src/foo\n\turl = https://example.com/foo.git\n\
         [submodule \"src/zed\"]\n\tpath = src/zed\n\turl = https://example.com/zed.git\n",
    )
    .unwrap();

    let output = run_vendo(&project, &["uninstall", "foo"]);
    assert!(
        output.status.success(),
        "uninstall failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(!vendor.join("src").join("foo").exists());
    assert_eq!(
        fs::read_to_string(vendor.join("vendor.pth")).unwrap(),
        "src/zed\n"
    );
    assert_eq!(
        fs::read_to_string(vendor.join(".gitmodules")).unwrap(),
        "[submodule \"src/alpha\"]\n\tpath = src/alpha\n\turl = https://example.com/alpha.git\n\
         [submodule \"src/zed\"]\n\tpath = src/zed\n\turl = https://example.com/zed.git\n"
    );

    let log = tool_log(&project);
    assert!(log.contains("git rm --cached src/foo"));
    assert!(log.contains("git commit -m Uninstall foo"));
    assert!(!log.contains("pip uninstall"));
}

#[test]
fn test_update_packaged_dependency_reinstalls_pinned() {
    if !get_vendo_binary().exists() {
        eprintln!("Skipping test: vendo binary not found");
        return;
    }
    let project = create_test_project("update_packaged");

    let output = run_vendo(&project, &["update", "requests", "2.1.0"]);
    assert!(
        output.status.success(),
        "update failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let log = tool_log(&project);
    assert!(log.contains("pip uninstall -y requests"));
    assert!(log.contains("requests==2.1.0"));
    assert!(log.contains("git commit -m Update requests to 2.1.0"));
}

#[test]
fn test_update_rejects_non_git_source_entry() {
    if !get_vendo_binary().exists() {
        eprintln!("Skipping test: vendo binary not found");
        return;
    }
    let project = create_test_project("update_non_git");
    // A same-named directory under src/ that is not a git checkout.
    fs::create_dir_all(project.join("vendor").join("src").join("foo")).unwrap();

    let output = run_vendo(&project, &["update", "foo", "v2"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a git checkout"));
}

#[test]
fn test_freeze_forwards_pip_listing() {
    if !get_vendo_binary().exists() {
        eprintln!("Skipping test: vendo binary not found");
        return;
    }
    let project = create_test_project("freeze");

    let output = run_vendo(&project, &["freeze"]);
    assert!(
        output.status.success(),
        "freeze failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("requests==2.0.0"));

    let log = tool_log(&project);
    assert!(log.contains("pip freeze --path="));
    // Read-only: no commit.
    assert!(!log.contains("git commit"));
}
