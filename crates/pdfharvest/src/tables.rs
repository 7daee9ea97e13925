//! Table pass, backed by pdfplumber.

use std::path::Path;

use pdfplumber::{Pdf, Strategy, TableSettings};
use tracing::debug;

use crate::error::Result;
use crate::table_csv::TableGrid;

/// Opens a document and hands each page's detected tables, in page order, to
/// a visitor.
///
/// Implementations must call `visit` exactly once per page (with an empty
/// list for pages without tables), first page first, and stop at the first
/// error returned by `visit`. Tables are passed in detection order.
pub trait TableDetector {
    fn detect_tables(
        &self,
        pdf_path: &Path,
        visit: &mut dyn FnMut(Vec<TableGrid>) -> Result<()>,
    ) -> Result<()>;
}

/// [`TableDetector`] backed by pdfplumber's table finder.
#[derive(Debug)]
pub struct PlumberTables {
    settings: TableSettings,
}

impl PlumberTables {
    pub fn new(settings: TableSettings) -> Self {
        Self { settings }
    }

    /// Default settings with the given detection strategy.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(TableSettings {
            strategy,
            ..TableSettings::default()
        })
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }
}

impl Default for PlumberTables {
    fn default() -> Self {
        Self::new(TableSettings::default())
    }
}

impl TableDetector for PlumberTables {
    fn detect_tables(
        &self,
        pdf_path: &Path,
        visit: &mut dyn FnMut(Vec<TableGrid>) -> Result<()>,
    ) -> Result<()> {
        let pdf = Pdf::open_path(pdf_path, None)?;

        for index in 0..pdf.page_count() {
            let page = pdf.page(index)?;
            let grids: Vec<TableGrid> = page
                .find_tables(&self.settings)
                .into_iter()
                .map(|table| {
                    table
                        .rows
                        .into_iter()
                        .map(|row| row.into_iter().map(|cell| cell.text).collect())
                        .collect()
                })
                .collect();

            debug!(page = index + 1, tables = grids.len(), "detected tables");
            visit(grids)?;
        }

        Ok(())
    }
}
