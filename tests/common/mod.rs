//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use sdkbump::buildozer::BuildEditor;
use sdkbump::error::BuildozerError;
use sdkbump::plan::{ProductVersion, VersionBumpPlan};

/// The 2025.1 -> 2025.2 plan used across the integration tests.
pub fn test_plan() -> VersionBumpPlan {
    let old: ProductVersion = "2025.1".parse().expect("valid old version");
    let new: ProductVersion = "2025.2".parse().expect("valid new version");
    VersionBumpPlan::derive(&old, &new)
}

/// Create a temporary directory for test output.
pub fn temp_workspace() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Lay out the versioned paths of an un-migrated 2025.1 corpus, with nested
/// content so copies can be checked byte-for-byte.
pub fn seed_corpus(root: &Path) {
    fs::create_dir_all(root.join("sdkcompat/v251/general")).expect("Failed to create sdkcompat");
    fs::write(
        root.join("sdkcompat/v251/BUILD"),
        "java_library(\n    name = \"v251\",\n    visibility = [\"//visibility:public\"],\n)\n",
    )
    .expect("Failed to write sdkcompat BUILD");
    fs::write(
        root.join("sdkcompat/v251/general/Compat.java"),
        "package sdkcompat.general;\n\npublic class Compat {}\n",
    )
    .expect("Failed to write compat shim");

    fs::create_dir_all(root.join("intellij_platform_sdk")).expect("Failed to create sdk dir");
    for name in ["BUILD.idea251", "BUILD.ue251", "BUILD.clion251"] {
        fs::write(
            root.join("intellij_platform_sdk").join(name),
            format!("# {}\n", name),
        )
        .expect("Failed to write platform BUILD file");
    }

    fs::create_dir_all(root.join("testing/testcompat/v251")).expect("Failed to create testcompat");
    fs::write(
        root.join("testing/testcompat/v251/BUILD"),
        "# testcompat\n",
    )
    .expect("Failed to write testcompat BUILD");
}

/// A scripted stand-in for buildozer.
///
/// Records every issued command, answers `print` commands with a canned
/// select expression, and rejects duplicate `new config_setting` names the
/// way the real tool does. Optionally fails on the first command containing
/// a configured substring.
pub struct ScriptedEditor {
    commands: RefCell<Vec<(String, String)>>,
    created: RefCell<HashSet<String>>,
    print_lines: Vec<String>,
    fail_on: Option<String>,
}

impl ScriptedEditor {
    pub fn new() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            created: RefCell::new(HashSet::new()),
            print_lines: vec![
                "select({".to_string(),
                "    \"intellij-2025.1\": [\"//sdkcompat/v251\"],".to_string(),
                "    \"default\": [],".to_string(),
                "})".to_string(),
                String::new(),
            ],
            fail_on: None,
        }
    }

    /// An editor that fails the first command containing `needle`.
    pub fn failing_on(needle: &str) -> Self {
        Self {
            fail_on: Some(needle.to_string()),
            ..Self::new()
        }
    }

    /// Everything issued so far, in order.
    pub fn commands(&self) -> Vec<(String, String)> {
        self.commands.borrow().clone()
    }
}

impl Default for ScriptedEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildEditor for ScriptedEditor {
    fn run(&self, command: &str, target: &str) -> Result<Vec<String>, BuildozerError> {
        self.commands
            .borrow_mut()
            .push((command.to_string(), target.to_string()));

        if let Some(needle) = &self.fail_on {
            if command.contains(needle) {
                return Err(BuildozerError::NonZeroExit {
                    code: 1,
                    stderr: format!("scripted failure on '{}'", needle),
                });
            }
        }

        if let Some(rest) = command.strip_prefix("new config_setting ") {
            let name = rest.split_whitespace().next().unwrap_or("").to_string();
            if !self.created.borrow_mut().insert(name.clone()) {
                return Err(BuildozerError::NonZeroExit {
                    code: 2,
                    stderr: format!("rule '{}' already exists", name),
                });
            }
        }

        if command.starts_with("print ") {
            return Ok(self.print_lines.clone());
        }

        Ok(vec![String::new()])
    }
}
