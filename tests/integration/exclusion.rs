//! Excluded directories are pruned before descent and never mutated

use super::test_utils::{read, write_tree};
use licensify::{StampConfig, Stamper};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_exclusions_at_every_depth() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(
        root,
        &[
            (".git/hooks/pre-commit.py", "import sys"),
            (".vscode/tasks.rs", "// tasks"),
            ("target/debug/build/out.rs", "generated"),
            ("components/parser/target/gen.rs", "generated"),
            ("components/parser/src/lib.rs", "pub mod ast;"),
        ],
    );

    let report = Stamper::new(StampConfig::new(root)).run().unwrap();

    assert_eq!(
        report.stamped,
        vec![PathBuf::from("components/parser/src/lib.rs")]
    );
    assert_eq!(read(root, ".git/hooks/pre-commit.py"), "import sys");
    assert_eq!(read(root, ".vscode/tasks.rs"), "// tasks");
    assert_eq!(read(root, "target/debug/build/out.rs"), "generated");
    assert_eq!(read(root, "components/parser/target/gen.rs"), "generated");
}

#[test]
fn test_custom_exclusions_replace_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("vendor/dep.rs", "dep"), ("target/out.rs", "out")]);

    let report = Stamper::new(StampConfig::new(root).with_exclusions(["vendor"]))
        .run()
        .unwrap();

    assert_eq!(report.stamped, vec![PathBuf::from("target/out.rs")]);
    assert_eq!(read(root, "vendor/dep.rs"), "dep");
}

/// An unreadable excluded directory is never opened, so it cannot fail the pass
#[cfg(unix)]
#[test]
fn test_excluded_directory_is_never_opened() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("target/secret.rs", "s"), ("main.rs", "fn main(){}")]);
    let target = root.join("target");
    std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o000)).unwrap();

    let result = Stamper::new(StampConfig::new(root)).run();
    std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o755)).unwrap();

    let report = result.unwrap();
    assert_eq!(report.stamped, vec![PathBuf::from("main.rs")]);
}

#[cfg(unix)]
#[test]
fn test_symlinked_files_are_not_rewritten() {
    let temp_dir = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(outside.path(), &[("shared.rs", "shared")]);
    std::os::unix::fs::symlink(outside.path().join("shared.rs"), root.join("link.rs")).unwrap();

    let report = Stamper::new(StampConfig::new(root)).run().unwrap();

    assert!(report.stamped.is_empty());
    assert_eq!(report.symlinks_skipped, 1);
    assert_eq!(read(outside.path(), "shared.rs"), "shared");
}

#[cfg(unix)]
#[test]
fn test_symlink_cycle_is_skipped_when_following() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(root, &[("src/lib.rs", "pub fn f() {}")]);
    std::os::unix::fs::symlink(root, root.join("src").join("back")).unwrap();

    let mut config = StampConfig::new(root);
    config.follow_symlinks = true;
    let report = Stamper::new(config).run().unwrap();

    assert_eq!(report.stamped, vec![PathBuf::from("src/lib.rs")]);
    assert_eq!(report.cycles_skipped, 1);
}
