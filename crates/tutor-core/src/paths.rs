use std::path::{Path, PathBuf};

pub const TUTOR_DIR: &str = ".tutor";
pub const STATE_FILE: &str = ".tutor/activity.json";

pub fn tutor_dir(root: &Path) -> PathBuf {
    root.join(TUTOR_DIR)
}

pub fn state_path(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}
