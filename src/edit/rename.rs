//! Renaming the copied compatibility-layer sub-target.

use crate::buildozer::BuildEditor;
use crate::error::BuildozerError;

/// Rename of a named sub-target within a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOperation {
    /// Package containing the target, e.g. `//sdkcompat/v252`.
    pub package: String,
    /// Current (old-API-suffixed) name, e.g. `v251`.
    pub old_name: String,
    /// New name, e.g. `v252`.
    pub new_name: String,
}

/// Rename the target with the editor's `set name` command. Only the name
/// changes; every other attribute is left as copied.
pub fn rename_target(
    editor: &dyn BuildEditor,
    rename: &RenameOperation,
) -> Result<(), BuildozerError> {
    editor.run(
        &format!("set name {}", rename.new_name),
        &format!("{}:{}", rename.package, rename.old_name),
    )?;
    Ok(())
}
