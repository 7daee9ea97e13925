//! The two-phase extraction run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{HarvestError, Result};
use crate::manifest::Manifest;
use crate::options::HarvestOptions;
use crate::output::OutputDir;
use crate::render::{PageRenderer, PdfiumRenderer, write_jpeg};
use crate::table_csv::{is_empty_table, write_table_csv};
use crate::tables::{PlumberTables, TableDetector};

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Directory all artifacts were written to.
    pub output_dir: PathBuf,
    /// The manifest as written to `content.json`.
    pub manifest: Manifest,
    /// Path of the written `content.json`.
    pub manifest_path: PathBuf,
    /// Page images, in page order.
    pub images: Vec<PathBuf>,
    /// Table CSVs, in page then detection order.
    pub tables: Vec<PathBuf>,
}

impl ExtractionReport {
    /// Number of pages in the manifest.
    pub fn page_count(&self) -> usize {
        self.manifest.len()
    }
}

/// Check that `pdf_path` names a readable regular file.
///
/// # Errors
///
/// Returns [`HarvestError::Input`] if the file is missing, unreadable, or a
/// directory.
pub fn check_input(pdf_path: &Path) -> Result<()> {
    let input_err = |source| HarvestError::Input {
        path: pdf_path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(pdf_path).map_err(input_err)?;
    if !metadata.is_file() {
        return Err(input_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    fs::File::open(pdf_path).map_err(input_err)?;
    Ok(())
}

/// Extracts a PDF into an output directory.
///
/// Phase one walks the pages with `R`, writing one JPEG per page and then the
/// manifest. Phase two re-opens the document with `T` and writes one CSV per
/// non-empty table. Nothing written before a failure is removed.
pub struct Extractor<R, T> {
    renderer: R,
    tables: T,
    options: HarvestOptions,
}

impl<R: PageRenderer, T: TableDetector> Extractor<R, T> {
    pub fn new(renderer: R, tables: T, options: HarvestOptions) -> Self {
        Self {
            renderer,
            tables,
            options,
        }
    }

    pub fn options(&self) -> &HarvestOptions {
        &self.options
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn tables(&self) -> &T {
        &self.tables
    }

    /// Run both phases for `pdf_path`, writing into `output_dir`.
    ///
    /// # Errors
    ///
    /// - [`HarvestError::InvalidOption`] before anything else if the options
    ///   are out of range.
    /// - [`HarvestError::Input`] before the output directory is created if the
    ///   input is not a readable file.
    /// - Otherwise the first error from either backend or from writing an
    ///   artifact.
    pub fn run(&self, pdf_path: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Result<ExtractionReport> {
        let pdf_path = pdf_path.as_ref();
        self.options.validate()?;
        check_input(pdf_path)?;

        let out = OutputDir::create(output_dir)?;
        info!(input = %pdf_path.display(), output = %out.path().display(), "starting extraction");

        let (manifest, images) = self.render_phase(pdf_path, &out)?;
        let manifest_path = out.manifest_path();
        manifest.write_to(&manifest_path)?;
        info!(pages = manifest.len(), path = %manifest_path.display(), "wrote manifest");

        let tables = self.table_phase(pdf_path, &out)?;
        info!(output = %out.path().display(), tables = tables.len(), "extraction complete");

        Ok(ExtractionReport {
            output_dir: out.path().to_path_buf(),
            manifest,
            manifest_path,
            images,
            tables,
        })
    }

    fn render_phase(&self, pdf_path: &Path, out: &OutputDir) -> Result<(Manifest, Vec<PathBuf>)> {
        let mut manifest = Manifest::new();
        let mut images = Vec::new();
        let quality = self.options.jpeg_quality;

        self.renderer
            .render_pages(pdf_path, self.options.dpi, &mut |page| {
                let image_path = out.page_image_path(manifest.next_page_number());
                write_jpeg(&image_path, &page.image, quality)?;
                let record = manifest.push_page(page.text);
                debug!(page = record.page_number, path = %image_path.display(), "wrote page image");
                images.push(image_path);
                Ok(())
            })?;

        Ok((manifest, images))
    }

    fn table_phase(&self, pdf_path: &Path, out: &OutputDir) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        let mut page_number = 0;

        self.tables.detect_tables(pdf_path, &mut |grids| {
            page_number += 1;
            for (i, grid) in grids.iter().enumerate() {
                let table_index = i + 1;
                if is_empty_table(grid) {
                    warn!(page = page_number, table = table_index, "skipping empty table");
                    continue;
                }
                let path = out.table_csv_path(page_number, table_index);
                write_table_csv(&path, grid)?;
                debug!(page = page_number, table = table_index, rows = grid.len(), path = %path.display(), "wrote table");
                written.push(path);
            }
            Ok(())
        })?;

        Ok(written)
    }
}

/// Extract `pdf_path` into `output_dir` with the system PDFium library,
/// default table settings and default options.
pub fn extract_pdf_content(
    pdf_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<ExtractionReport> {
    let pdf_path = pdf_path.as_ref();
    // A missing input must be reported before PDFium binding can fail.
    check_input(pdf_path)?;

    let extractor = Extractor::new(
        PdfiumRenderer::new(None)?,
        PlumberTables::default(),
        HarvestOptions::default(),
    );
    extractor.run(pdf_path, output_dir)
}
