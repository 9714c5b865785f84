//! Property-based tests for the stamping formula and the exclusion invariant

use licensify::{ExistingHeaderPolicy, StampConfig, Stamper, StyleEntry};
use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn runner() -> TestRunner {
    TestRunner::new(Config {
        cases: 48,
        ..Config::default()
    })
}

/// after == "\n".join([P + " " + line for line in header] + ["", before])
#[test]
fn test_stamped_content_matches_formula() {
    runner()
        .run(
            &(
                prop::collection::vec("[ -~]{0,24}", 1..5),
                prop_oneof![Just("//"), Just("#"), Just("--"), Just(";;")],
                any::<String>(),
            ),
            |(header, prefix, before)| {
                let temp_dir = TempDir::new().unwrap();
                let path = temp_dir.path().join("target_file.src");
                fs::write(&path, &before).unwrap();

                let config = StampConfig::new(temp_dir.path())
                    .with_styles(&[StyleEntry::new(".src", prefix)])
                    .unwrap()
                    .with_header(header.clone())
                    .with_policy(ExistingHeaderPolicy::Force);
                Stamper::new(config).run().unwrap();

                let mut expected: Vec<String> =
                    header.iter().map(|line| format!("{} {}", prefix, line)).collect();
                expected.push(String::new());
                expected.push(before.clone());

                prop_assert_eq!(fs::read_to_string(&path).unwrap(), expected.join("\n"));
                Ok(())
            },
        )
        .unwrap();
}

fn tree_strategy() -> impl Strategy<Value = Vec<(Vec<&'static str>, &'static str)>> {
    let segment = prop_oneof![
        Just("src"),
        Just("nested"),
        Just(".git"),
        Just("target"),
        Just(".vscode"),
    ];
    let file = prop_oneof![Just("a.rs"), Just("b.py"), Just("c.txt"), Just("d")];
    prop::collection::vec((prop::collection::vec(segment, 0..4), file), 1..12)
}

/// Files under an excluded directory, and files without a known extension, are
/// byte-for-byte unchanged; every other `.rs`/`.py` file is stamped exactly once.
#[test]
fn test_exclusion_and_unknown_extension_invariants() {
    runner()
        .run(&tree_strategy(), |entries| {
            let temp_dir = TempDir::new().unwrap();
            let root = temp_dir.path();

            let mut files: BTreeMap<PathBuf, (bool, String)> = BTreeMap::new();
            for (segments, name) in &entries {
                let mut relative = PathBuf::new();
                for segment in segments {
                    relative.push(segment);
                }
                relative.push(name);
                let excluded = segments
                    .iter()
                    .any(|s| [".git", "target", ".vscode"].contains(s));
                let content = format!("content of {}", relative.display());
                files.insert(relative, (excluded, content));
            }
            for (relative, (_, content)) in &files {
                let path = root.join(relative);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(&path, content).unwrap();
            }

            let config = StampConfig::new(root).with_header(vec!["H".to_string()]);
            Stamper::new(config).run().unwrap();

            for (relative, (excluded, before)) in &files {
                let after = fs::read_to_string(root.join(relative)).unwrap();
                let prefix = match relative.extension().and_then(|e| e.to_str()) {
                    Some("rs") => Some("//"),
                    Some("py") => Some("#"),
                    _ => None,
                };
                match (excluded, prefix) {
                    (false, Some(prefix)) => {
                        prop_assert_eq!(after, format!("{} H\n\n{}", prefix, before))
                    }
                    _ => prop_assert_eq!(&after, before),
                }
            }
            Ok(())
        })
        .unwrap();
}
