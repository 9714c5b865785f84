//! Layered configuration: workspace file, global file, environment and flags

use super::test_utils::{read, run_licensify, write_tree};
use licensify::config::ConfigLoader;
use licensify::Stamper;
use licensify::RunMode;
use tempfile::TempDir;

#[test]
fn test_workspace_file_drives_a_pass() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_tree(
        root,
        &[
            (
                "licensify.toml",
                r#"
[stamp]
header = ["Copyright Example Corp"]
exclude = ["third_party"]

[[stamp.styles]]
extension = ".sql"
prefix = "--"
"#,
            ),
            ("schema.sql", "CREATE TABLE t (id INT);"),
            ("third_party/vendor.sql", "SELECT 1;"),
            ("main.rs", "fn main() {}"),
        ],
    );

    let config = ConfigLoader::load(root).unwrap();
    let mut settings = config.stamp;
    settings.root = root.to_path_buf();
    let report = Stamper::new(settings.to_stamp_config(RunMode::Write).unwrap())
        .run()
        .unwrap();

    assert_eq!(report.stamped.len(), 1);
    assert_eq!(
        read(root, "schema.sql"),
        "-- Copyright Example Corp\n\nCREATE TABLE t (id INT);"
    );
    assert_eq!(read(root, "third_party/vendor.sql"), "SELECT 1;");
    // the styles list replaces the defaults, so .rs is no longer known
    assert_eq!(read(root, "main.rs"), "fn main() {}");
}

#[cfg(target_os = "linux")]
#[test]
fn test_global_file_is_overridden_by_workspace_file() {
    let env_dir = TempDir::new().unwrap();
    let global_dir = env_dir.path().join("config").join("licensify");
    std::fs::create_dir_all(&global_dir).unwrap();
    std::fs::write(
        global_dir.join("config.toml"),
        "[stamp]\nheader = [\"Global header\"]\nexclude = [\"skipme\"]\n",
    )
    .unwrap();

    let ws = TempDir::new().unwrap();
    write_tree(
        ws.path(),
        &[
            ("licensify.toml", "[stamp]\nheader = [\"Workspace header\"]\n"),
            ("a.rs", "fn a() {}"),
            ("skipme/b.rs", "fn b() {}"),
        ],
    );

    let root = ws.path().to_string_lossy().to_string();
    let output = run_licensify(&env_dir, &["--quiet", "--root", &root]);
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(read(ws.path(), "a.rs"), "// Workspace header\n\nfn a() {}");
    assert_eq!(read(ws.path(), "skipme/b.rs"), "fn b() {}");
}

#[test]
fn test_environment_overrides_files() {
    let env_dir = TempDir::new().unwrap();
    let ws = TempDir::new().unwrap();
    write_tree(
        ws.path(),
        &[
            ("licensify.toml", "[stamp]\nheader = [\"H\"]\nexisting_header = \"skip\"\n"),
            ("a.rs", "// H\n\nfn a() {}"),
        ],
    );

    let root = ws.path().to_string_lossy().to_string();
    let home = env_dir.path().join("home");
    let config_home = env_dir.path().join("config");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&config_home).unwrap();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_licensify"))
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", &config_home)
        .env("LICENSIFY__STAMP__EXISTING_HEADER", "force")
        .args(["--quiet", "--root", root.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(read(ws.path(), "a.rs"), "// H\n\n// H\n\nfn a() {}");
}

#[test]
fn test_explicit_config_file_skips_workspace_file() {
    let env_dir = TempDir::new().unwrap();
    let ws = TempDir::new().unwrap();
    write_tree(
        ws.path(),
        &[
            ("licensify.toml", "[stamp]\nheader = [\"Workspace\"]\n"),
            ("a.py", "print(1)"),
        ],
    );
    let explicit = env_dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[stamp]\nheader = [\"Explicit\"]\n").unwrap();

    let root = ws.path().to_string_lossy().to_string();
    let config = explicit.to_string_lossy().to_string();
    let output = run_licensify(&env_dir, &["--quiet", "--root", &root, "--config", &config]);
    assert!(output.status.success());

    assert_eq!(read(ws.path(), "a.py"), "# Explicit\n\nprint(1)");
}

#[test]
fn test_invalid_workspace_file_fails_before_touching_files() {
    let env_dir = TempDir::new().unwrap();
    let ws = TempDir::new().unwrap();
    write_tree(
        ws.path(),
        &[
            ("licensify.toml", "[stamp]\nheader = []\n"),
            ("a.rs", "fn a() {}"),
        ],
    );

    let root = ws.path().to_string_lossy().to_string();
    let output = run_licensify(&env_dir, &["--quiet", "--root", &root]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Header"));
    assert_eq!(read(ws.path(), "a.rs"), "fn a() {}");
}
