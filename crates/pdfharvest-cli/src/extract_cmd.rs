use std::io;
use std::path::Path;

use pdfharvest::{ExtractionReport, Extractor, HarvestError, PdfiumRenderer, PlumberTables};

use crate::cli::{Cli, TableStrategy};

pub fn run(cli: &Cli) -> Result<ExtractionReport, i32> {
    check_file(&cli.file)?;

    let renderer = PdfiumRenderer::new(cli.pdfium_lib_dir.as_deref()).map_err(|e| {
        eprintln!("Error: failed to load PDFium: {e}");
        1
    })?;

    let extractor = Extractor::new(renderer, table_detector(cli.strategy), cli.options());
    extract(&extractor, &cli.file, &cli.output_dir)
}

fn check_file(file: &Path) -> Result<(), i32> {
    pdfharvest::check_input(file).map_err(|e| {
        match &e {
            HarvestError::Input { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                eprintln!("Error: file not found: {}", file.display())
            }
            _ => eprintln!("Error: {e}"),
        }
        1
    })
}

fn table_detector(strategy: TableStrategy) -> PlumberTables {
    PlumberTables::with_strategy(strategy.into())
}

fn extract(
    extractor: &Extractor<PdfiumRenderer, PlumberTables>,
    file: &Path,
    output_dir: &Path,
) -> Result<ExtractionReport, i32> {
    extractor.run(file, output_dir).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}
