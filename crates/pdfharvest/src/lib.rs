//! pdfharvest: dump a PDF's page text, page images, and tables to disk.
//!
//! A run makes two independent passes over the document:
//!
//! 1. **Text and raster** ([`PageRenderer`], PDFium by default): each page's
//!    text goes into the manifest and its rendering into `page_<n>.jpg`.
//!    The manifest is then written to `content.json`.
//! 2. **Tables** ([`TableDetector`], pdfplumber by default): each non-empty
//!    detected table is written to `table_p<page>_<index>.csv`.
//!
//! # Example
//!
//! ```no_run
//! use pdfharvest::{Extractor, HarvestOptions, PdfiumRenderer, PlumberTables};
//!
//! # fn main() -> pdfharvest::Result<()> {
//! let extractor = Extractor::new(
//!     PdfiumRenderer::new(None)?,
//!     PlumberTables::default(),
//!     HarvestOptions::default(),
//! );
//! let report = extractor.run("input/report.pdf", "output")?;
//! println!("{} pages, {} tables", report.page_count(), report.tables.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod extractor;
mod manifest;
mod options;
mod output;
mod render;
mod table_csv;
mod tables;

pub use error::{HarvestError, Result};
pub use extractor::{ExtractionReport, Extractor, check_input, extract_pdf_content};
pub use manifest::{Manifest, PageRecord};
pub use options::{DEFAULT_DPI, DEFAULT_JPEG_QUALITY, HarvestOptions};
pub use output::{MANIFEST_FILE, OutputDir, page_image_name, table_csv_name};
pub use render::{PageRenderer, PdfiumRenderer, RenderedPage, bind_pdfium, target_size, write_jpeg};
pub use table_csv::{TableGrid, is_empty_table, write_table_csv};
pub use tables::{PlumberTables, TableDetector};

pub use pdfplumber::{Strategy, TableSettings};
