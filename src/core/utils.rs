use dirs::home_dir;
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::BookError;

const DEFAULT_DIR_NAME: &str = ".spendbook";
const DATA_DIR: &str = "data";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application base directory, defaulting to `~/.spendbook`.
pub fn app_base_dir() -> PathBuf {
    if let Some(custom) = env::var_os("SPENDBOOK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the tabular record files.
pub fn data_dir_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR)
}

/// Path to the configuration file inside a base directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), BookError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Sibling path used for staged writes before the final rename.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to a tmp sibling and renames it over `path`.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), BookError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tmp_path_stacks_the_suffix_on_the_extension() {
        let tmp = tmp_path(Path::new("/tmp/spendings.csv"));
        assert_eq!(tmp, PathBuf::from("/tmp/spendings.csv.tmp"));
    }

    #[test]
    fn write_atomic_leaves_no_tmp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("config.json");
        write_atomic(&target, "{}").unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
        assert!(!tmp_path(&target).exists());
    }
}
