//! Hero Catalog - Hero asset catalog generation
//!
//! This crate scans a folder of hero images, works out which hero each file
//! belongs to from its name, and writes one JSON record per hero listing its
//! icon, base illustration and skins.
//!
//! # Getting Started
//!
//! Configure a run with `CatalogConfig::builder()` and execute it with
//! [`CatalogConfig::run`].
//!
//! ```rust,no_run
//! use hero_catalog::prelude::*;
//!
//! fn main() -> hero_catalog::error::Result<()> {
//!     let config = CatalogConfig::builder()
//!         .source_path(PathBuf::from("./hero illust/Texture2D"))
//!         .output_path(PathBuf::from("./heroes_data_nuevos.json"))
//!         .build()?;
//!
//!     let report = config.run()?;
//!     println!(
//!         "Catalogued {} heroes ({} skins), skipped {} files",
//!         report.heroes, report.skins, report.skipped_files
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Naming conventions
//!
//! | File name                              | Becomes                         |
//! |----------------------------------------|---------------------------------|
//! | `full_illust_hero_<asset>_base.png`    | `long_image` of `<asset>`       |
//! | `full_illust_hero_<asset>_<skin>.png`  | `skins[<skin>]` of `<asset>`    |
//! | `<asset>_a_<suffix>.png`               | `short_image` of `<asset>`      |
//!
//! The asset names `dummy` and `template` are placeholders and never produce a record.

pub mod catalog;
pub mod classifier;
pub mod collector;
pub mod error;
pub mod parser;
pub mod path_utils;
pub mod types;
pub mod writer;

pub use catalog::CatalogConfig;
pub use catalog::CatalogConfigBuilder;

pub use types::{CatalogReport, CollectedHeroes, HeroGroups, HeroRecord, SkinMap};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        CatalogConfig, CatalogConfigBuilder, CatalogReport, CollectedHeroes, HeroGroups,
        HeroRecord, SkinMap, error, types,
    };
    pub use crate::collector::Collector;
    pub use crate::writer::{CatalogWriter, json::JsonWriter};
    pub use std::path::{Path, PathBuf};
}
