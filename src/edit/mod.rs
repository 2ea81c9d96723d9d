//! The edit operations applied to the configuration corpus.

pub mod config_setting;
pub mod copy;
pub mod rename;
pub mod select;

pub use config_setting::{ConfigSettingEdit, add_config_setting};
pub use copy::{CopyOperation, copy_path, derive_destination};
pub use rename::{RenameOperation, rename_target};
pub use select::{SelectionInsert, insert_after_first, insert_into_select};
