//! Path normalization

use std::path::Path;

/// Render a path for reports with forward slashes on every platform.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
