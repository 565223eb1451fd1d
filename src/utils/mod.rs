mod fs;

pub use fs::{canonical_or_absolute, move_file};

use std::path::{Path, PathBuf};

/// The name of the folder kept files are moved into
pub const KEPT_FOLDER: &str = "kept_files";

/// Extension filter applied in delete mode when none is given
pub const DEFAULT_EXTENSIONS: &str = ".sms";

/// Get the path to the kept_files folder inside the scanned directory
pub fn get_kept_path(directory: &Path) -> PathBuf {
    directory.join(KEPT_FOLDER)
}
