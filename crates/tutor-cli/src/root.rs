use std::path::{Path, PathBuf};
use tutor_core::paths::TUTOR_DIR;

/// Resolve the tutorial root directory.
///
/// Priority:
/// 1. `--root` flag / `TUTOR_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.tutor/`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    for marker in [TUTOR_DIR, ".git"] {
        if let Some(found) = find_up(&cwd, marker) {
            return found;
        }
    }

    cwd
}

fn find_up(start: &Path, marker: &str) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(marker).is_dir() {
            return Some(dir);
        }
        dir = dir.parent()?.to_path_buf();
    }
}
