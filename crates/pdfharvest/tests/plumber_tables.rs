//! The pdfplumber-backed table pass on real (lopdf-built) documents.

mod common;

use common::{FakeRenderer, GRID_2X2, HELLO_WORLD, grid, pdf_with_pages, write_fixture};
use pdfharvest::{Extractor, HarvestError, HarvestOptions, PlumberTables, TableDetector, TableGrid};

fn detect(bytes: &[u8]) -> Vec<Vec<TableGrid>> {
    let tmp = tempfile::tempdir().unwrap();
    let pdf = write_fixture(tmp.path(), "doc.pdf", bytes);

    let mut pages = Vec::new();
    PlumberTables::default()
        .detect_tables(&pdf, &mut |tables| {
            pages.push(tables);
            Ok(())
        })
        .unwrap();
    pages
}

#[test]
fn visits_every_page_in_order() {
    let pages = detect(&pdf_with_pages(&[HELLO_WORLD, HELLO_WORLD, HELLO_WORLD]));
    assert_eq!(pages.len(), 3);
}

#[test]
fn text_only_page_has_no_tables() {
    let pages = detect(&pdf_with_pages(&[HELLO_WORLD]));
    assert_eq!(pages.len(), 1);
    assert!(pages[0].is_empty(), "unexpected tables: {:?}", pages[0]);
}

#[test]
fn ruled_grid_yields_cell_text() {
    let pages = detect(&pdf_with_pages(&[GRID_2X2]));
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].len(), 1, "expected one table, got {:?}", pages[0]);
    assert_eq!(
        pages[0][0],
        grid(&[&[Some("a"), Some("b")], &[Some("c"), Some("d")]])
    );
}

#[test]
fn extractor_writes_ruled_grid_as_csv() {
    let tmp = tempfile::tempdir().unwrap();
    let pdf = write_fixture(tmp.path(), "grid.pdf", &pdf_with_pages(&[GRID_2X2]));
    let out = tmp.path().join("output");

    let report = Extractor::new(
        FakeRenderer::new(&["a b c d"]),
        PlumberTables::default(),
        HarvestOptions::default(),
    )
    .run(&pdf, &out)
    .unwrap();

    assert_eq!(report.tables, vec![out.join("table_p1_1.csv")]);
    assert_eq!(
        std::fs::read_to_string(out.join("table_p1_1.csv")).unwrap(),
        "a,b\nc,d\n"
    );
}

#[test]
fn corrupt_pdf_is_table_error() {
    let tmp = tempfile::tempdir().unwrap();
    let pdf = write_fixture(tmp.path(), "bad.pdf", b"this is not a pdf");

    let result = PlumberTables::default().detect_tables(&pdf, &mut |_| Ok(()));
    assert!(matches!(result, Err(HarvestError::Table(_))));
}

#[test]
fn extractor_writes_no_csv_for_text_only_document() {
    let tmp = tempfile::tempdir().unwrap();
    let pdf = write_fixture(tmp.path(), "doc.pdf", &pdf_with_pages(&[HELLO_WORLD, HELLO_WORLD]));
    let out = tmp.path().join("output");

    let report = Extractor::new(
        FakeRenderer::new(&["Hello World", "Hello World"]),
        PlumberTables::default(),
        HarvestOptions::default(),
    )
    .run(&pdf, &out)
    .unwrap();

    assert!(report.tables.is_empty());
    let csvs = std::fs::read_dir(&out)
        .unwrap()
        .filter(|e| e.as_ref().unwrap().file_name().to_string_lossy().starts_with("table_"))
        .count();
    assert_eq!(csvs, 0);
}
