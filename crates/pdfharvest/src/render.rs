//! Text and raster pass, backed by PDFium.
//!
//! [`PageRenderer`] abstracts the pass so the extractor does not depend on a
//! particular binding; [`PdfiumRenderer`] is the implementation used by the
//! command-line tool.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use pdfium_render::prelude::*;
use tracing::debug;

use crate::error::{HarvestError, Result};

const PDF_POINTS_PER_INCH: f32 = 72.0;

/// One page produced by the text and raster pass.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Plain text in the library's reading order.
    pub text: String,
    /// The page rendered at the requested density.
    pub image: DynamicImage,
}

/// Opens a document and hands each page, in order, to a visitor.
///
/// Implementations must call `visit` exactly once per page, first page first,
/// and stop at the first error returned by `visit`.
pub trait PageRenderer {
    fn render_pages(
        &self,
        pdf_path: &Path,
        dpi: u16,
        visit: &mut dyn FnMut(RenderedPage) -> Result<()>,
    ) -> Result<()>;
}

/// Bind to the PDFium shared library.
///
/// Looks in `lib_dir` when given, otherwise uses the platform's library
/// search path.
pub fn bind_pdfium(lib_dir: Option<&Path>) -> Result<Pdfium> {
    let bindings = match lib_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "binding pdfium from directory");
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))?
        }
        None => {
            debug!("binding system pdfium");
            Pdfium::bind_to_system_library()?
        }
    };
    Ok(Pdfium::new(bindings))
}

/// Pixel size of a page of `width_pt` x `height_pt` points rendered at `dpi`.
///
/// Each side is at least one pixel.
pub fn target_size(width_pt: f32, height_pt: f32, dpi: u16) -> (i32, i32) {
    let scale = f32::from(dpi) / PDF_POINTS_PER_INCH;
    let width = ((width_pt * scale).round() as i32).max(1);
    let height = ((height_pt * scale).round() as i32).max(1);
    (width, height)
}

/// [`PageRenderer`] backed by `pdfium-render`.
pub struct PdfiumRenderer {
    pdfium: Pdfium,
}

impl PdfiumRenderer {
    /// Bind PDFium (see [`bind_pdfium`]) and wrap it.
    pub fn new(lib_dir: Option<&Path>) -> Result<Self> {
        Ok(Self {
            pdfium: bind_pdfium(lib_dir)?,
        })
    }

    pub fn from_pdfium(pdfium: Pdfium) -> Self {
        Self { pdfium }
    }
}

impl PageRenderer for PdfiumRenderer {
    fn render_pages(
        &self,
        pdf_path: &Path,
        dpi: u16,
        visit: &mut dyn FnMut(RenderedPage) -> Result<()>,
    ) -> Result<()> {
        let document = self.pdfium.load_pdf_from_file(pdf_path, None)?;

        for (index, page) in document.pages().iter().enumerate() {
            let text = page.text()?.all();

            let (width, height) = target_size(page.width().value, page.height().value, dpi);
            let config = PdfRenderConfig::new()
                .set_target_width(width)
                .set_target_height(height);
            let image = page.render_with_config(&config)?.as_image();

            debug!(page = index + 1, width, height, "rendered page");
            visit(RenderedPage { text, image })?;
        }

        Ok(())
    }
}

/// Encode `image` as a JPEG at `path`, replacing any existing file.
///
/// Alpha is dropped since JPEG has no alpha channel.
pub fn write_jpeg(path: &Path, image: &DynamicImage, quality: u8) -> Result<()> {
    let file = File::create(path).map_err(|e| HarvestError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let rgb = image.to_rgb8();
    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(&rgb)
        .map_err(|source| HarvestError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|e| HarvestError::io(path, e))?;
    Ok(())
}
