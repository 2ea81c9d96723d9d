//! The `-tables` overrides document read by buildozer.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::BumpError;

/// File name of the overrides document, relative to the workspace root.
pub const OVERRIDES_FILE_NAME: &str = "override.json";

/// Attribute typing overrides for buildozer.
///
/// `exports` and `srcs` hold select expressions in this corpus, so the tool
/// must not rewrite them as plain lists.
#[derive(Debug, Serialize)]
pub struct Overrides {
    #[serde(rename = "IsListArg")]
    pub is_list_arg: BTreeMap<String, bool>,
}

impl Default for Overrides {
    fn default() -> Self {
        let mut is_list_arg = BTreeMap::new();
        is_list_arg.insert("exports".to_string(), false);
        is_list_arg.insert("srcs".to_string(), false);
        Self { is_list_arg }
    }
}

/// Write the overrides file if absent. An existing file is left untouched.
///
/// The write goes through a temp file in the same directory so a crash never
/// leaves a half-written document for buildozer to choke on.
pub fn ensure_overrides_file(path: &Path) -> Result<bool, BumpError> {
    if path.exists() {
        return Ok(false);
    }

    let json =
        serde_json::to_string_pretty(&Overrides::default()).map_err(|e| {
            BumpError::OverridesWriteFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| BumpError::OverridesWriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| BumpError::OverridesWriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    tmp.persist(path).map_err(|e| BumpError::OverridesWriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(true)
}
