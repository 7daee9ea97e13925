//! Error type for extraction runs.
//!
//! Each variant wraps the native error of whichever library failed, unchanged,
//! as its source.

use std::io;
use std::path::{Path, PathBuf};

use pdfium_render::prelude::PdfiumError;
use thiserror::Error;

/// Errors produced while extracting a PDF into an output directory.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// The input PDF is missing, unreadable, or not a regular file.
    #[error("cannot read input {}: {source}", path.display())]
    Input {
        /// Path that was given as input.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Creating the output directory or writing an artifact failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// PDFium failed to bind, open the document, read text, or render.
    #[error("pdfium: {0}")]
    Pdfium(#[from] PdfiumError),

    /// pdfplumber failed to open the document or load a page.
    #[error("table extraction: {0}")]
    Table(#[from] pdfplumber::PdfError),

    /// JPEG encoding of a rendered page failed.
    #[error("failed to encode {}: {source}", path.display())]
    Image {
        /// Destination image path.
        path: PathBuf,
        /// Underlying encoder error.
        #[source]
        source: image::ImageError,
    },

    /// Writing a table CSV failed.
    #[error("failed to write table {}: {source}", path.display())]
    Csv {
        /// Destination CSV path.
        path: PathBuf,
        /// Underlying CSV writer error.
        #[source]
        source: csv::Error,
    },

    /// Serializing the manifest failed.
    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// An option was outside its accepted range.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

impl HarvestError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        HarvestError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns `true` if this error came from a missing or unreadable input file.
    pub fn is_input_error(&self) -> bool {
        matches!(self, HarvestError::Input { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HarvestError>;
