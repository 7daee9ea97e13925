//! Shared fixtures: in-memory PDFs built with lopdf and fake phase backends.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgb, RgbImage};
use lopdf::{Object, Stream, dictionary};
use pdfharvest::{PageRenderer, RenderedPage, Result, TableDetector, TableGrid};

/// Build a PDF with one US-letter page per content stream, all sharing a
/// Helvetica font resource named `F1`.
pub fn pdf_with_pages(contents: &[&[u8]]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = contents
        .iter()
        .map(|content| {
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.to_vec()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ],
                "Contents" => Object::Reference(content_id),
                "Resources" => dictionary! {
                    "Font" => dictionary! { "F1" => Object::Reference(font_id) },
                },
            });
            Object::Reference(page_id)
        })
        .collect();

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

pub const HELLO_WORLD: &[u8] = b"BT /F1 12 Tf 72 720 Td (Hello World) Tj ET";

/// A 2x2 grid ruled with explicit lines, cells "a" "b" / "c" "d".
pub const GRID_2X2: &[u8] = b"
    1 w
    100 700 m 300 700 l S
    100 680 m 300 680 l S
    100 660 m 300 660 l S
    100 700 m 100 660 l S
    200 700 m 200 660 l S
    300 700 m 300 660 l S
    BT /F1 10 Tf 110 685 Td (a) Tj ET
    BT /F1 10 Tf 210 685 Td (b) Tj ET
    BT /F1 10 Tf 110 665 Td (c) Tj ET
    BT /F1 10 Tf 210 665 Td (d) Tj ET
";

/// Write `bytes` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Build a table grid from string literals; `None` marks a missing cell.
pub fn grid(rows: &[&[Option<&str>]]) -> TableGrid {
    rows.iter()
        .map(|row| row.iter().map(|c| c.map(str::to_string)).collect())
        .collect()
}

/// Renderer that ignores the file and yields canned pages.
pub struct FakeRenderer {
    pub texts: Vec<String>,
    /// Records the DPI of every call.
    pub seen_dpi: RefCell<Vec<u16>>,
}

impl FakeRenderer {
    pub fn new(texts: &[&str]) -> Self {
        Self {
            texts: texts.iter().map(|t| t.to_string()).collect(),
            seen_dpi: RefCell::new(Vec::new()),
        }
    }
}

impl PageRenderer for FakeRenderer {
    fn render_pages(
        &self,
        _pdf_path: &Path,
        dpi: u16,
        visit: &mut dyn FnMut(RenderedPage) -> Result<()>,
    ) -> Result<()> {
        self.seen_dpi.borrow_mut().push(dpi);
        for (i, text) in self.texts.iter().enumerate() {
            let shade = (i as u8).wrapping_mul(40);
            let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 20, Rgb([shade, 120, 200])));
            visit(RenderedPage {
                text: text.clone(),
                image,
            })?;
        }
        Ok(())
    }
}

/// Detector that ignores the file and yields canned tables per page.
pub struct FakeTables {
    pub pages: Vec<Vec<TableGrid>>,
    /// Called once before the first page is visited.
    pub on_start: Box<dyn Fn(&Path)>,
}

impl FakeTables {
    pub fn new(pages: Vec<Vec<TableGrid>>) -> Self {
        Self {
            pages,
            on_start: Box::new(|_: &Path| {}),
        }
    }

    pub fn none(page_count: usize) -> Self {
        Self::new(vec![Vec::new(); page_count])
    }
}

impl TableDetector for FakeTables {
    fn detect_tables(
        &self,
        pdf_path: &Path,
        visit: &mut dyn FnMut(Vec<TableGrid>) -> Result<()>,
    ) -> Result<()> {
        (self.on_start)(pdf_path);
        for tables in &self.pages {
            visit(tables.clone())?;
        }
        Ok(())
    }
}
