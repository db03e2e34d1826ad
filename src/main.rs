//! hero-catalog CLI
//!
//! Scans a folder of hero images and writes the JSON hero catalog.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use hero_catalog::CatalogConfig;
use hero_catalog::catalog::{DEFAULT_IMAGE_EXTENSION, DEFAULT_OUTPUT_FILE};
use hero_catalog::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "hero-catalog")]
#[command(author, version, about = "Build a JSON hero catalog from hero image file names", long_about = None)]
struct Cli {
    /// Folder containing the hero icons and illustrations
    #[arg(short, long, env = "HERO_CATALOG_SOURCE", default_value = ".")]
    source: PathBuf,

    /// Catalog file to write (overwritten if it exists)
    #[arg(short, long, env = "HERO_CATALOG_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Image extension to scan, without the dot
    #[arg(short, long, env = "HERO_CATALOG_EXTENSION", default_value = DEFAULT_IMAGE_EXTENSION)]
    extension: String,

    /// Placeholder asset names to ignore (repeatable; replaces the defaults)
    #[arg(long = "reserved", value_name = "NAME")]
    reserved: Vec<String>,

    /// Print the catalog to stdout instead of writing the file
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Result<CatalogConfig> {
        let mut builder = CatalogConfig::builder();
        builder
            .source_path(self.source.clone())
            .output_path(self.output.clone())
            .image_extension(self.extension.clone());
        if !self.reserved.is_empty() {
            builder.reserved_names(self.reserved.clone());
        }
        Ok(builder.build()?)
    }

    fn execute(&self) -> Result<()> {
        let config = self.config()?;

        if self.dry_run {
            let (report, rendered) = config.dry_run()?;
            println!("{rendered}");
            info!(
                "Dry run: {} heroes, {} skins, {} files skipped",
                report.heroes, report.skins, report.skipped_files
            );
        } else {
            let report = config.run()?;
            info!(
                "{} heroes, {} skins, {} of {} image files skipped",
                report.heroes, report.skins, report.skipped_files, report.image_files
            );
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::DirectoryNotFound(path)) => {
            error!("The image folder does not exist: {}", path.display());
            ExitCode::FAILURE
        }
        Err(e @ Error::WriteFailure { .. }) => {
            error!("Error saving the catalog: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
