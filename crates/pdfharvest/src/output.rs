//! Output directory layout and artifact file names.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HarvestError, Result};

/// File name of the JSON manifest inside the output directory.
pub const MANIFEST_FILE: &str = "content.json";

/// File name of the rendered image for a 1-based page number.
pub fn page_image_name(page_number: usize) -> String {
    format!("page_{page_number}.jpg")
}

/// File name of the CSV for a table, both numbers 1-based.
pub fn table_csv_name(page_number: usize, table_index: usize) -> String {
    format!("table_p{page_number}_{table_index}.csv")
}

/// An output directory that is known to exist.
///
/// Existing contents are left in place; artifacts with colliding names are
/// overwritten when written.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Create `path` and any missing parents. Succeeds if it already exists.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let root = path.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| HarvestError::io(&root, e))?;
        Ok(Self { root })
    }

    /// The directory path.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Path of `content.json` in this directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    /// Path of the JPEG for a 1-based page number.
    pub fn page_image_path(&self, page_number: usize) -> PathBuf {
        self.root.join(page_image_name(page_number))
    }

    /// Path of the CSV for a table, both numbers 1-based.
    pub fn table_csv_path(&self, page_number: usize, table_index: usize) -> PathBuf {
        self.root.join(table_csv_name(page_number, table_index))
    }
}
