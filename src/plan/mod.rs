//! The bump plan: every parameter for one release migration.

pub mod version;

pub use version::ProductVersion;

/// Product families whose config settings receive a new versioned entry.
///
/// Each family has a base config setting and a `-mac` platform variant.
pub const PRODUCT_FAMILIES: &[&str] = &["intellij", "intellij-ue", "clion"];

/// Complete parameter set for one bump run.
///
/// Replaces process-wide version globals: the plan is constructed once at the
/// start of a run and passed explicitly to every operation. The derived
/// strings must all refer to the same logical release; `derive` guarantees
/// that, explicit overrides are accepted as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBumpPlan {
    /// Version already present in the corpus, e.g. `2025.1`.
    pub old_version: String,
    /// Version being introduced, e.g. `2025.2`.
    pub new_version: String,
    /// API level suffix of the old version, e.g. `251`.
    pub old_api_level: String,
    /// API level suffix of the new version, e.g. `252`.
    pub new_api_level: String,
    /// Underscore-joined label of the new version, e.g. `2025_2`, used in
    /// external repository references like `@python_2025_2//:python`.
    pub new_label: String,
}

impl VersionBumpPlan {
    /// Build a plan with all identifier strings derived from the version pair.
    pub fn derive(old: &ProductVersion, new: &ProductVersion) -> Self {
        Self {
            old_version: old.to_string(),
            new_version: new.to_string(),
            old_api_level: old.api_level(),
            new_api_level: new.api_level(),
            new_label: new.label(),
        }
    }
}
