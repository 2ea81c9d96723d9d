//! Recursive copy behavior against a real filesystem.

mod common;

use std::fs;

use sdkbump::edit::{copy_path, derive_destination};
use sdkbump::error::BumpError;

use common::{seed_corpus, temp_workspace};

#[test]
fn test_derive_destination_substitutes_api_level() {
    assert_eq!(
        derive_destination("sdkcompat/v251/", "251", "252"),
        "sdkcompat/v252"
    );
}

#[test]
#[cfg(unix)]
fn test_directory_copy_is_recursive_and_byte_identical() {
    let dir = temp_workspace();
    seed_corpus(dir.path());

    copy_path(dir.path(), "sdkcompat/v251/", "sdkcompat/v252").expect("copy should succeed");

    for relative in ["BUILD", "general/Compat.java"] {
        let src = fs::read(dir.path().join("sdkcompat/v251").join(relative)).unwrap();
        let dst = fs::read(dir.path().join("sdkcompat/v252").join(relative)).unwrap();
        assert_eq!(src, dst, "{} must be byte-identical", relative);
    }

    // The source tree is untouched.
    assert!(dir.path().join("sdkcompat/v251/general/Compat.java").exists());
}

#[test]
#[cfg(unix)]
fn test_single_file_copy() {
    let dir = temp_workspace();
    seed_corpus(dir.path());

    copy_path(
        dir.path(),
        "intellij_platform_sdk/BUILD.idea251",
        "intellij_platform_sdk/BUILD.idea252",
    )
    .expect("copy should succeed");

    let src = fs::read(dir.path().join("intellij_platform_sdk/BUILD.idea251")).unwrap();
    let dst = fs::read(dir.path().join("intellij_platform_sdk/BUILD.idea252")).unwrap();
    assert_eq!(src, dst);
}

#[test]
#[cfg(unix)]
fn test_missing_source_fails_with_copy_error() {
    let dir = temp_workspace();

    let err = copy_path(dir.path(), "sdkcompat/v999/", "sdkcompat/v252").unwrap_err();
    match err {
        BumpError::CopyFailed { src, dst, reason } => {
            assert_eq!(src, "sdkcompat/v999/");
            assert_eq!(dst, "sdkcompat/v252");
            assert!(!reason.is_empty(), "cp stderr should be captured");
        }
        other => panic!("Expected CopyFailed, got {:?}", other),
    }
}
