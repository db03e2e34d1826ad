//! Hero image collection and grouping module.
//!
//! This module lists the files of a source directory, keeps the ones carrying
//! the configured image extension, and groups them by the hero asset name
//! derived from their file names.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::parser::parse_hero_asset_name;
use crate::path_utils::{get_file_name_lossy, get_file_name_safe, has_extension};
use crate::types::{CollectedHeroes, HeroGroups};

/// Collects and groups hero image files from a single directory
#[derive(Debug)]
pub struct Collector<'a> {
    base_directory: &'a Path,
    image_extension: &'a str,
    reserved_names: &'a [String],
}

impl<'a> Collector<'a> {
    /// Creates a new Collector instance for the specified directory.
    ///
    /// # Arguments
    ///
    /// * `base_directory` - Directory holding the hero images (not scanned recursively)
    /// * `image_extension` - Extension, without the dot, a file must carry to be considered
    /// * `reserved_names` - Placeholder asset names that never produce a hero
    pub fn new(
        base_directory: &'a Path,
        image_extension: &'a str,
        reserved_names: &'a [String],
    ) -> Self {
        Self {
            base_directory,
            image_extension,
            reserved_names,
        }
    }

    /// Lists the directory and groups its image files by hero.
    ///
    /// # Returns
    ///
    /// * `Result<CollectedHeroes>` - The hero groups and scan counts, or
    ///   [`Error::DirectoryNotFound`] if the base directory is missing
    pub fn collect(&self) -> Result<CollectedHeroes> {
        if !self.base_directory.is_dir() {
            return Err(Error::DirectoryNotFound(self.base_directory.to_path_buf()));
        }

        info!("Scanning folder: {}", self.base_directory.display());
        let entries = Self::list_entries(self.base_directory)?;

        let mut file_names = Vec::with_capacity(entries.len());
        for entry in &entries {
            match get_file_name_safe(entry) {
                Ok(name) => file_names.push(name),
                Err(_) => warn!(
                    "Skipping entry with a non UTF-8 name: {}",
                    get_file_name_lossy(entry)
                ),
            }
        }

        let mut collected = self.group_file_names(file_names);
        collected.entries_scanned = entries.len();
        Ok(collected)
    }

    /// Groups already listed file names by hero.
    ///
    /// Names without the image extension are ignored entirely. Image files
    /// that match no naming convention are counted as skipped.
    pub fn group_file_names<I>(&self, file_names: I) -> CollectedHeroes
    where
        I: IntoIterator<Item = String>,
    {
        let mut collected = CollectedHeroes::default();
        let mut groups = HeroGroups::new();

        for file_name in file_names {
            collected.entries_scanned += 1;
            if !has_extension(&file_name, self.image_extension) {
                continue;
            }
            collected.image_files += 1;

            match parse_hero_asset_name(&file_name, self.reserved_names) {
                Some(asset_name) => groups.entry(asset_name).or_default().push(file_name),
                None => {
                    debug!("Skipping {file_name}: no hero naming convention matched");
                    collected.skipped_files += 1;
                }
            }
        }

        collected.groups = groups;
        collected
    }

    /// Lists every entry of a directory, files and subdirectories alike
    ///
    /// # Arguments
    ///
    /// * `directory` - Directory to list
    ///
    /// # Returns
    ///
    /// * `Result<Vec<PathBuf>>` - Entry paths in the order the filesystem returned them
    pub fn list_entries(directory: &Path) -> Result<Vec<PathBuf>> {
        let mut entries: Vec<PathBuf> = Vec::new();
        for entry in read_dir(directory)? {
            entries.push(entry?.path());
        }
        Ok(entries)
    }
}
