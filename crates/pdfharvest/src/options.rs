//! Options controlling how pages are rasterized and encoded.

use serde::{Deserialize, Serialize};

use crate::error::{HarvestError, Result};

/// Default rendering density in dots per inch.
pub const DEFAULT_DPI: u16 = 150;

/// Default JPEG quality (1-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Options for an extraction run.
///
/// Table detection is configured separately through the
/// [`TableSettings`](pdfplumber::TableSettings) held by
/// [`PlumberTables`](crate::PlumberTables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestOptions {
    /// Rendering density for page images.
    pub dpi: u16,
    /// JPEG encoder quality, 1 (smallest) to 100 (best).
    pub jpeg_quality: u8,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl HarvestOptions {
    /// Check that every option is within its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`HarvestError::InvalidOption`] for a zero DPI or a JPEG
    /// quality outside `1..=100`.
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(HarvestError::InvalidOption(
                "dpi must be at least 1".to_string(),
            ));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(HarvestError::InvalidOption(format!(
                "jpeg quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}
