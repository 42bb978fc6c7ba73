use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::{
    book::{page_slug, Book, Income, PageEntry, Spending},
    core::utils::{ensure_dir, tmp_path},
    errors::BookError,
};

use super::{LoadReport, Result, StorageBackend};

const SPENDINGS_FILE: &str = "spendings.csv";
const INCOME_FILE: &str = "income.csv";
const PAGES_FILE: &str = "custom_pages.csv";
const PAGES_DIR: &str = "pages";
const CSV_EXTENSION: &str = "csv";

/// One row of the custom page registry file.
#[derive(Debug, Serialize, Deserialize)]
struct PageRow {
    page: String,
}

/// CSV-backed persistence: one tabular file per logical collection plus one
/// file per custom page under `pages/`. Every save rewrites the full layout.
pub struct CsvStorage {
    data_dir: PathBuf,
    pages_dir: PathBuf,
}

impl CsvStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let pages_dir = data_dir.join(PAGES_DIR);
        ensure_dir(&data_dir)?;
        ensure_dir(&pages_dir)?;
        Ok(Self { data_dir, pages_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn page_path(&self, page: &str) -> PathBuf {
        self.pages_dir
            .join(format!("{}.{}", page_slug(page), CSV_EXTENSION))
    }

    /// Reads all rows of one file. A missing file yields an empty collection;
    /// a malformed one is treated as empty and contributes a warning instead
    /// of failing the load.
    fn read_rows<T: DeserializeOwned>(path: &Path, warnings: &mut Vec<String>) -> Vec<T> {
        if !path.exists() {
            return Vec::new();
        }
        let mut reader = match csv::Reader::from_path(path) {
            Ok(reader) => reader,
            Err(err) => {
                Self::push_warning(path, err, warnings);
                return Vec::new();
            }
        };
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            match record {
                Ok(row) => rows.push(row),
                Err(err) => {
                    Self::push_warning(path, err, warnings);
                    return Vec::new();
                }
            }
        }
        rows
    }

    fn push_warning(path: &Path, err: csv::Error, warnings: &mut Vec<String>) {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("record file");
        warn!(file = name, error = %err, "record file is malformed, loading it as empty");
        warnings.push(format!("{} is malformed and was loaded as empty ({})", name, err));
    }

    /// Serializes rows to a tmp sibling and renames it into place.
    fn write_rows<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let tmp = tmp_path(path);
        let mut writer = csv::Writer::from_path(&tmp)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(BookError::Io)?;
        drop(writer);
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Deletes page files whose page is no longer registered, so the pages
    /// directory always mirrors the registry.
    fn prune_stale_pages(&self, pages: &[String]) -> Result<()> {
        let live: HashSet<PathBuf> = pages.iter().map(|page| self.page_path(page)).collect();
        for entry in fs::read_dir(&self.pages_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(CSV_EXTENSION) {
                continue;
            }
            if !live.contains(&path) {
                let _ = fs::remove_file(&path);
            }
        }
        Ok(())
    }
}

impl StorageBackend for CsvStorage {
    fn load(&self) -> Result<LoadReport> {
        let mut warnings = Vec::new();

        let spendings: Vec<Spending> =
            Self::read_rows(&self.data_dir.join(SPENDINGS_FILE), &mut warnings);
        let income: Vec<Income> = Self::read_rows(&self.data_dir.join(INCOME_FILE), &mut warnings);
        let registry: Vec<PageRow> =
            Self::read_rows(&self.data_dir.join(PAGES_FILE), &mut warnings);

        let custom_pages: Vec<String> = registry.into_iter().map(|row| row.page).collect();
        let mut page_entries: BTreeMap<String, Vec<PageEntry>> = BTreeMap::new();
        for page in &custom_pages {
            let entries = Self::read_rows(&self.page_path(page), &mut warnings);
            page_entries.insert(page.clone(), entries);
        }

        info!(
            spendings = spendings.len(),
            income = income.len(),
            pages = custom_pages.len(),
            "loaded book from {}",
            self.data_dir.display()
        );

        Ok(LoadReport {
            book: Book {
                spendings,
                income,
                custom_pages,
                page_entries,
            },
            warnings,
        })
    }

    fn save(&self, book: &Book) -> Result<()> {
        Self::write_rows(&self.data_dir.join(SPENDINGS_FILE), &book.spendings)?;
        Self::write_rows(&self.data_dir.join(INCOME_FILE), &book.income)?;

        let registry: Vec<PageRow> = book
            .custom_pages
            .iter()
            .map(|page| PageRow { page: page.clone() })
            .collect();
        Self::write_rows(&self.data_dir.join(PAGES_FILE), &registry)?;

        for page in &book.custom_pages {
            Self::write_rows(&self.page_path(page), book.entries_for(page))?;
        }
        self.prune_stale_pages(&book.custom_pages)?;
        Ok(())
    }
}
