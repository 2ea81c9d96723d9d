//! Selection inserts: adding one condition to a select-valued attribute.

use tracing::warn;

use crate::buildozer::BuildEditor;
use crate::error::BuildozerError;

/// One entry to add to a condition-keyed select mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionInsert {
    /// Attribute holding the select expression, `exports` or `srcs`.
    pub attribute: &'static str,
    /// Target carrying the attribute, e.g. `//third_party/go:go_internal`.
    pub target: &'static str,
    /// Literal entry text, e.g. `"intellij-2025.2":["//sdkcompat/v252"],`.
    pub entry: String,
}

/// Insert `entry` directly after the first line.
///
/// buildozer's `print` output for a select-valued attribute leads with a
/// structural line before the real entries, so index 1 puts the new
/// condition ahead of every existing one. This is order-dependent on the
/// tool's output format.
pub fn insert_after_first(lines: &[String], entry: &str) -> Vec<String> {
    let mut out = lines.to_vec();
    out.insert(1.min(out.len()), entry.to_string());
    out
}

/// Add one entry to the select mapping on `attribute` of `target`.
///
/// Reads the current entries with `print`, inserts the new one at position 1,
/// and writes everything back with `set`, joined with all spaces stripped so
/// the tool re-parses the expression as a single argument.
pub fn insert_into_select(
    editor: &dyn BuildEditor,
    insert: &SelectionInsert,
) -> Result<(), BuildozerError> {
    let lines = editor.run(&format!("print {}", insert.attribute), insert.target)?;
    if lines.len() < 2 {
        warn!(
            "print {} on {} returned {} line(s); the position-1 insert may not land where expected",
            insert.attribute,
            insert.target,
            lines.len()
        );
    }
    let new_lines = insert_after_first(&lines, &insert.entry);
    let command = format!(
        "set {} {}",
        insert.attribute,
        new_lines.join(" ").replace(' ', "")
    );
    editor.run(&command, insert.target)?;
    Ok(())
}
