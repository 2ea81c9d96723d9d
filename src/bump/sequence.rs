//! The fixed migration sequence, parameterized by the plan.
//!
//! Everything here is pure: the functions turn a plan into the ordered edit,
//! insert, copy, and rename operations the pipeline applies.

use crate::edit::{ConfigSettingEdit, CopyOperation, RenameOperation, SelectionInsert};
use crate::edit::copy::derive_destination;
use crate::plan::{PRODUCT_FAMILIES, VersionBumpPlan};

/// Config settings to create: base and mac variant per product family,
/// each anchored after its previous-version counterpart.
pub fn config_setting_edits(plan: &VersionBumpPlan) -> Vec<ConfigSettingEdit> {
    let mut edits = Vec::new();

    for family in PRODUCT_FAMILIES {
        let new_product = format!("{}-{}", family, plan.new_version);
        let old_product = format!("{}-{}", family, plan.old_version);
        let define = format!("define:ij_product={}", new_product);

        edits.push(ConfigSettingEdit {
            name: new_product.clone(),
            anchor: old_product.clone(),
            define: define.clone(),
            mac: false,
        });
        edits.push(ConfigSettingEdit {
            name: format!("{}-mac", new_product),
            anchor: format!("{}-mac", old_product),
            define,
            mac: true,
        });
    }

    edits
}

/// Selection inserts across the compatibility surfaces, in corpus order:
/// the sdkcompat exports first, then the per-ecosystem integration shims.
pub fn selection_inserts(plan: &VersionBumpPlan) -> Vec<SelectionInsert> {
    let new = &plan.new_version;
    let label = &plan.new_label;
    let mut inserts = Vec::new();

    // Every product re-exports the new compatibility layer.
    for family in PRODUCT_FAMILIES {
        inserts.push(SelectionInsert {
            attribute: "exports",
            target: "//sdkcompat",
            entry: format!(
                "\"{}-{}\":[\"//sdkcompat/v{}\"],",
                family, new, plan.new_api_level
            ),
        });
    }

    // Python ships per-release helper and runtime repos for every product.
    for family in PRODUCT_FAMILIES {
        inserts.push(SelectionInsert {
            attribute: "srcs",
            target: "//third_party/python:python_helpers",
            entry: format!(
                "\"{}-{}\":[\"@python_{}//:python_helpers\"],",
                family, new, label
            ),
        });
    }
    for family in PRODUCT_FAMILIES {
        inserts.push(SelectionInsert {
            attribute: "exports",
            target: "//third_party/python:python_internal",
            entry: format!("\"{}-{}\":[\"@python_{}//:python\"],", family, new, label),
        });
    }

    // The javascript shims only exist for the ultimate and clion bundles,
    // each backed by its own SDK repository.
    const JAVASCRIPT_TARGETS: &[(&str, &str)] = &[
        ("//third_party/javascript:javascript_internal", "javascript"),
        ("//third_party/javascript:css_internal", "css"),
        ("//third_party/javascript:tslint_internal", "tslint"),
        ("//third_party/javascript:angular_internal", "angular"),
    ];
    for &(target, artifact) in JAVASCRIPT_TARGETS {
        for family in ["intellij-ue", "clion"] {
            let repo = family.replace('-', "_");
            inserts.push(SelectionInsert {
                attribute: "exports",
                target,
                entry: format!(
                    "\"{}-{}\":[\"@{}_{}//:{}\"],",
                    family, new, repo, label, artifact
                ),
            });
        }
    }

    // Scala and Go integrate with the IntelliJ products only.
    for family in ["intellij", "intellij-ue"] {
        inserts.push(SelectionInsert {
            attribute: "exports",
            target: "//third_party/scala:scala_internal",
            entry: format!("\"{}-{}\":[\"@scala_{}//:scala\"],", family, new, label),
        });
    }
    for family in ["intellij", "intellij-ue"] {
        inserts.push(SelectionInsert {
            attribute: "exports",
            target: "//third_party/go:go_internal",
            // The go entries in the corpus carry a space after the colon.
            entry: format!("\"{}-{}\": [\"@go_{}//:go\"],", family, new, label),
        });
    }

    inserts
}

/// Versioned directories and build files to duplicate under the new API
/// level.
pub fn copy_operations(plan: &VersionBumpPlan) -> Vec<CopyOperation> {
    let old = &plan.old_api_level;

    [
        format!("sdkcompat/v{}/", old),
        format!("intellij_platform_sdk/BUILD.idea{}", old),
        format!("intellij_platform_sdk/BUILD.ue{}", old),
        format!("intellij_platform_sdk/BUILD.clion{}", old),
        format!("testing/testcompat/v{}/", old),
    ]
    .into_iter()
    .map(|src| {
        let dst = derive_destination(&src, old, &plan.new_api_level);
        CopyOperation { src, dst }
    })
    .collect()
}

/// The copied compatibility sub-target still carries the old name; rename it
/// to the new API level.
pub fn rename_operation(plan: &VersionBumpPlan) -> RenameOperation {
    RenameOperation {
        package: format!("//sdkcompat/v{}", plan.new_api_level),
        old_name: format!("v{}", plan.old_api_level),
        new_name: format!("v{}", plan.new_api_level),
    }
}
