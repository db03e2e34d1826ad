//! Writer module provides the trait and implementations for catalog output formats.
//!
//! A writer turns the ordered list of hero records into a document and saves
//! it, replacing whatever was at the destination before.

use crate::error::{Error, Result};
use crate::types::HeroRecord;
use std::path::Path;

pub mod json;

/// Common interface for all catalog writers.
pub trait CatalogWriter {
    /// Renders the records into the document bytes without touching the filesystem.
    ///
    /// # Parameters
    /// * `records` - Hero records, already in output order
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - The encoded document
    fn render(&self, records: &[HeroRecord]) -> Result<Vec<u8>>;

    /// Renders the records and writes them to `path`, overwriting any existing file.
    ///
    /// Rendering happens before the file is opened, so a rendering failure
    /// never truncates an existing catalog.
    ///
    /// # Returns
    /// * `Result<()>` - [`Error::WriteFailure`] if the document could not be written
    fn save(&self, records: &[HeroRecord], path: &Path) -> Result<()> {
        let document = self.render(records)?;
        std::fs::write(path, document).map_err(|source| Error::WriteFailure {
            path: path.to_path_buf(),
            source,
        })
    }
}
