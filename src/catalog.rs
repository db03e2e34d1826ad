use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use std::path::PathBuf;

use crate::classifier::classify_groups;
use crate::collector::Collector;
use crate::error::{Error, Result};
use crate::parser::DEFAULT_RESERVED_NAMES;
use crate::types::{CatalogReport, CollectedHeroes, HeroRecord};
use crate::writer::{CatalogWriter, json::JsonWriter};

/// File name used for the catalog when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "heroes_data_nuevos.json";
/// Image extension scanned when none is configured.
pub const DEFAULT_IMAGE_EXTENSION: &str = "png";

lazy_static! {
    /// A bare extension: letters and digits only, no leading dot.
    static ref EXTENSION_REGEX: Regex = Regex::new(r"^[A-Za-z0-9]+$").unwrap();
}

/// Configuration for one catalog run, built declaratively using the builder pattern.
///
/// Once configured, the whole pipeline runs with [`run`](CatalogConfig::run), or
/// stage by stage with [`collect`](CatalogConfig::collect),
/// [`build_catalog`](CatalogConfig::build_catalog) and
/// [`write_catalog`](CatalogConfig::write_catalog).
///
/// ```rust,no_run
/// # use hero_catalog::prelude::*;
/// # fn main() -> hero_catalog::error::Result<()> {
/// let config = CatalogConfig::builder()
///     .source_path(PathBuf::from("./assets/heroes_full"))
///     .output_path(PathBuf::from("./heroes.json"))
///     .build()?;
///
/// let report = config.run()?;
/// println!("Wrote {} heroes", report.heroes);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct CatalogConfig {
    /// Directory containing the hero images. It is not scanned recursively.
    #[builder(default = "PathBuf::from(\".\")")]
    pub source_path: PathBuf,

    /// Destination of the catalog document. An existing file is overwritten.
    #[builder(default = "PathBuf::from(DEFAULT_OUTPUT_FILE)")]
    pub output_path: PathBuf,

    /// Extension, without the leading dot, that files must carry to be scanned.
    /// Compared case-insensitively.
    #[builder(default = "DEFAULT_IMAGE_EXTENSION.to_string()")]
    pub image_extension: String,

    /// Placeholder asset names that never produce a hero.
    #[builder(default = "DEFAULT_RESERVED_NAMES.iter().map(|s| s.to_string()).collect()")]
    pub reserved_names: Vec<String>,
}

impl CatalogConfig {
    /// Creates a new builder for configuring `CatalogConfig`.
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }

    /// Checks that the configuration can run before anything is scanned.
    ///
    /// # Returns
    ///
    /// * `Ok(&self)` - The source directory exists and the output path is set
    /// * `Err(Error::DirectoryNotFound)` - The source path is missing or not a directory
    pub fn preflight_check(&self) -> Result<&Self> {
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("Output path is required".to_string()));
        }
        if !self.source_path.is_dir() {
            return Err(Error::DirectoryNotFound(self.source_path.clone()));
        }
        Ok(self)
    }

    /// Lists the source directory and groups its image files by hero.
    pub fn collect(&self) -> Result<CollectedHeroes> {
        self.preflight_check()?;
        let collector = Collector::new(
            &self.source_path,
            &self.image_extension,
            &self.reserved_names,
        );
        let collected = collector.collect()?;
        info!("Found {} unique heroes", collected.groups.len());
        Ok(collected)
    }

    /// Classifies collected groups into records ordered by asset name.
    pub fn build_catalog(&self, collected: &CollectedHeroes) -> Vec<HeroRecord> {
        classify_groups(&collected.groups)
    }

    /// Renders the catalog without writing it.
    pub fn render_catalog(&self, records: &[HeroRecord]) -> Result<String> {
        let bytes = JsonWriter::new().render(records)?;
        String::from_utf8(bytes).map_err(|e| Error::Other(e.to_string()))
    }

    /// Writes the catalog to the configured output path.
    pub fn write_catalog(&self, records: &[HeroRecord]) -> Result<()> {
        JsonWriter::new().save(records, &self.output_path)?;
        info!(
            "Created '{}' with {} heroes",
            self.output_path.display(),
            records.len()
        );
        Ok(())
    }

    /// Runs the full pipeline: scan, group, classify and write.
    ///
    /// Nothing is written unless every earlier stage succeeded.
    pub fn run(&self) -> Result<CatalogReport> {
        let (report, records) = self.prepare()?;
        self.write_catalog(&records)?;
        Ok(CatalogReport {
            output_path: Some(self.output_path.clone()),
            ..report
        })
    }

    /// Runs every stage except the write, returning the rendered catalog instead.
    pub fn dry_run(&self) -> Result<(CatalogReport, String)> {
        let (report, records) = self.prepare()?;
        let rendered = self.render_catalog(&records)?;
        Ok((report, rendered))
    }

    fn prepare(&self) -> Result<(CatalogReport, Vec<HeroRecord>)> {
        info!("Starting hero catalog generation");
        let collected = self.collect()?;
        let records = self.build_catalog(&collected);
        let report = CatalogReport {
            entries_scanned: collected.entries_scanned,
            image_files: collected.image_files,
            skipped_files: collected.skipped_files,
            heroes: records.len(),
            skins: records.iter().map(HeroRecord::skin_count).sum(),
            output_path: None,
        };
        Ok((report, records))
    }
}

impl CatalogConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(extension) = &self.image_extension {
            if !EXTENSION_REGEX.is_match(extension) {
                return Err(format!("Invalid image_extension: {:?}", extension));
            }
        }
        if let Some(output_path) = &self.output_path {
            if output_path.as_os_str().is_empty() {
                return Err("output_path must not be empty".to_string());
            }
        }
        if let Some(reserved) = &self.reserved_names {
            if reserved.iter().any(|name| name.is_empty()) {
                return Err("reserved_names must not contain empty names".to_string());
            }
        }
        Ok(())
    }
}
