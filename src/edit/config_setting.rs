//! Structural edits: creating and populating versioned config settings.

use crate::buildozer::BuildEditor;
use crate::error::BuildozerError;

/// Package holding the per-version config settings.
pub const PLATFORM_PACKAGE: &str = "//intellij_platform_sdk";

/// One new config_setting to create, positioned after its previous-version
/// anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSettingEdit {
    /// Name of the setting to create, e.g. `intellij-2025.2-mac`.
    pub name: String,
    /// Existing setting the new one is placed after, e.g. `intellij-2025.1-mac`.
    pub anchor: String,
    /// Product define added to the values dict, e.g.
    /// `define:ij_product=intellij-2025.2`.
    pub define: String,
    /// Mac variants additionally pin the cpu value.
    pub mac: bool,
}

/// Create one config setting: `new config_setting <name> after <anchor>`,
/// empty out its values dict, then add the product define (and the darwin
/// cpu for mac variants).
pub fn add_config_setting(
    editor: &dyn BuildEditor,
    edit: &ConfigSettingEdit,
) -> Result<(), BuildozerError> {
    let package = format!("{}:__pkg__", PLATFORM_PACKAGE);
    editor.run(
        &format!("new config_setting {} after {}", edit.name, edit.anchor),
        &package,
    )?;

    let target = format!("{}:{}", PLATFORM_PACKAGE, edit.name);
    editor.run("set values {}", &target)?;
    editor.run(&format!("dict_add values {}", edit.define), &target)?;
    if edit.mac {
        editor.run("dict_add values cpu:darwin_x86_64", &target)?;
    }

    Ok(())
}
