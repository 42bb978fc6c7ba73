use std::path::PathBuf;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use spendbook::{core::BookManager, storage::CsvStorage};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated manager backed by a unique data directory.
pub fn setup_manager() -> (BookManager, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let data_dir = temp.path().join("data");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = CsvStorage::new(data_dir.clone()).expect("create csv storage backend");
    let (manager, warnings) = BookManager::load(Box::new(storage)).expect("load empty book");
    assert!(warnings.is_empty(), "fresh dir should load cleanly");
    (manager, data_dir)
}

/// Reopens the data directory as a fresh manager, as a new process would.
pub fn reopen(data_dir: &PathBuf) -> (BookManager, Vec<String>) {
    let storage = CsvStorage::new(data_dir.clone()).expect("reopen csv storage backend");
    BookManager::load(Box::new(storage)).expect("reload book")
}
