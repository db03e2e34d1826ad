//! Core data types for the hero catalog.
//!
//! This module defines the fundamental data structures used throughout the crate:
//! - Output records (`HeroRecord`) and the ordered catalog they form
//! - The intermediate grouping structure (`HeroGroups`)
//! - Run diagnostics (`CatalogReport`)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Filenames grouped by hero asset name.
///
/// Keys iterate in ascending order, which is the order records are emitted in.
/// Each value keeps the filenames in the order the directory listing produced them.
pub type HeroGroups = BTreeMap<String, Vec<String>>;

/// Skin key to filename mapping for a single hero.
pub type SkinMap = BTreeMap<String, String>;

/// One catalog entry per distinct hero asset name.
///
/// `game_name`, `rarity` and `available` are placeholders that are filled in by
/// hand after the catalog has been generated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeroRecord {
    pub asset_name: String,
    pub game_name: String,
    pub rarity: u32,
    pub available: bool,
    pub short_image: String,
    pub long_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skins: Option<SkinMap>,
}

impl HeroRecord {
    /// Creates an unclassified record with every field at its default value.
    pub fn new(asset_name: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            ..Default::default()
        }
    }

    /// Number of skins attached to this record.
    pub fn skin_count(&self) -> usize {
        self.skins.as_ref().map_or(0, |skins| skins.len())
    }
}

/// Summary of a completed catalog run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    /// Every entry returned by the directory listing
    pub entries_scanned: usize,
    /// Entries carrying the configured image extension
    pub image_files: usize,
    /// Image files that matched no naming convention (or a reserved name)
    pub skipped_files: usize,
    /// Distinct heroes emitted
    pub heroes: usize,
    /// Skin entries across all heroes
    pub skins: usize,
    /// Where the catalog was written, `None` for a dry run
    pub output_path: Option<PathBuf>,
}

/// Outcome of the collection stage: hero groups plus the counts gathered while scanning.
#[derive(Debug, Clone, Default)]
pub struct CollectedHeroes {
    pub groups: HeroGroups,
    pub entries_scanned: usize,
    pub image_files: usize,
    pub skipped_files: usize,
}
