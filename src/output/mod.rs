// Output — terminal display and on-disk artifacts.

pub mod terminal;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Write `bytes` to `path` through a temporary sibling file and a rename, so
/// readers never observe a half-written file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = temp_sibling(path);
    let result = std::fs::write(&tmp, bytes)
        .with_context(|| format!("Failed to write temporary file {}", tmp.display()))
        .and_then(|()| {
            std::fs::rename(&tmp, path).with_context(|| {
                format!("Failed to move output into place at {}", path.display())
            })
        });
    if result.is_err() {
        // A failed write can leave a partial temp file behind
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

/// `dir/name.tmp` next to `path`.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output".into());
    name.push(".tmp");
    path.with_file_name(name)
}
