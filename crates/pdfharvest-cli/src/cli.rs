use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pdfharvest::{DEFAULT_DPI, DEFAULT_JPEG_QUALITY, HarvestOptions, Strategy};

/// Input used when no FILE argument is given.
pub const DEFAULT_INPUT: &str = "input/Fast Flow Validation.pdf";

/// Dump a PDF's page text, page images, and tables into a directory.
///
/// Writes content.json (page text and image names), page_<N>.jpg for every
/// page, and table_p<P>_<T>.csv for every detected table.
#[derive(Debug, Parser)]
#[command(name = "pdfharvest", about, version)]
pub struct Cli {
    /// Path to the PDF file
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub file: PathBuf,

    /// Directory to write artifacts into (created if missing)
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Rendering density for page images
    #[arg(long, default_value_t = DEFAULT_DPI, value_parser = clap::value_parser!(u16).range(1..=1200))]
    pub dpi: u16,

    /// JPEG quality for page images (1-100)
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: u8,

    /// Table detection strategy
    #[arg(long, value_enum, default_value_t = TableStrategy::Lattice)]
    pub strategy: TableStrategy,

    /// Directory containing the PDFium shared library. Default: system library path
    #[arg(long, value_name = "DIR", env = "PDFHARVEST_PDFIUM_DIR")]
    pub pdfium_lib_dir: Option<PathBuf>,

    /// Log every written artifact to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn options(&self) -> HarvestOptions {
        HarvestOptions {
            dpi: self.dpi,
            jpeg_quality: self.jpeg_quality,
        }
    }
}

/// Table detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableStrategy {
    /// Ruling lines and rectangle edges
    Lattice,
    /// Ruling lines only
    LatticeStrict,
    /// Text alignment, for tables without borders
    Stream,
}

impl From<TableStrategy> for Strategy {
    fn from(strategy: TableStrategy) -> Self {
        match strategy {
            TableStrategy::Lattice => Strategy::Lattice,
            TableStrategy::LatticeStrict => Strategy::LatticeStrict,
            TableStrategy::Stream => Strategy::Stream,
        }
    }
}
