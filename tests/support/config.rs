use std::sync::Mutex;

use tempfile::NamedTempFile;

/// Serializes tests that touch process environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Write `contents` to a temporary `.toml` file.
pub fn temp_config(contents: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("create temp config");
    std::fs::write(file.path(), contents).expect("write temp config");
    file
}
