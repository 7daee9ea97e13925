//! The `content.json` manifest: per-page text and image file names.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HarvestError, Result};
use crate::output::page_image_name;

/// One manifest entry per page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// 1-based page number.
    pub page_number: usize,
    /// Plain text extracted from the page.
    pub text: String,
    /// Image file name relative to the output directory.
    pub image_file: String,
}

/// Ordered page records, serialized as `{"pages": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub pages: Vec<PageRecord>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page number the next pushed record will receive.
    pub fn next_page_number(&self) -> usize {
        self.pages.len() + 1
    }

    /// Append the record for the next page and return it.
    ///
    /// Page numbers and image names are assigned here so entries stay
    /// contiguous from 1 with no gaps or duplicates.
    pub fn push_page(&mut self, text: String) -> &PageRecord {
        let page_number = self.next_page_number();
        self.pages.push(PageRecord {
            page_number,
            text,
            image_file: page_image_name(page_number),
        });
        &self.pages[page_number - 1]
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Write the manifest as 2-space indented JSON, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| HarvestError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| HarvestError::io(path, e))?;
        Ok(())
    }

    /// Read a manifest previously written by [`Manifest::write_to`].
    pub fn read_from(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| HarvestError::io(path, e))?;
        Ok(serde_json::from_slice(&data)?)
    }
}
