//! CSV output for detected tables.

use std::path::Path;

use crate::error::{HarvestError, Result};

/// A detected table: rows of optional cell text, as produced by the table
/// finder. Rows may have different lengths.
pub type TableGrid = Vec<Vec<Option<String>>>;

/// Returns `true` if the table has no rows.
pub fn is_empty_table(grid: &TableGrid) -> bool {
    grid.is_empty()
}

/// Write a table as CSV, one line per row.
///
/// Missing cells become empty fields. Cells containing a comma, quote or line
/// break are quoted; everything else is written as-is.
pub fn write_table_csv(path: &Path, grid: &TableGrid) -> Result<()> {
    let csv_err = |source| HarvestError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(csv_err)?;

    for row in grid {
        writer
            .write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))
            .map_err(csv_err)?;
    }

    writer.flush().map_err(|e| HarvestError::io(path, e))?;
    Ok(())
}
