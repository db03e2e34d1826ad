//! Common test utilities and constants for the hero-catalog crate.
//!
//! Provides functions for setting up and tearing down test directories,
//! creating placeholder image files, and reading back written catalogs.

use hero_catalog::HeroRecord;
use rand::{Rng, distributions::Alphanumeric};
use std::fs;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub const TEST_TMP_DIR: &str = "tests/tmp";

/// Scratch directories for a single test.
#[allow(dead_code)]
pub struct TestDirs {
    pub base_dir: PathBuf,
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
}

/// Creates a clean, uniquely named test directory with source and target subdirectories.
#[allow(dead_code)]
pub fn setup_test_dirs(sub_path: &str) -> TestDirs {
    let rand_string: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let base_dir = PathBuf::from(TEST_TMP_DIR).join(format!("{}-{}", sub_path, rand_string));
    if base_dir.exists() {
        fs::remove_dir_all(&base_dir).unwrap();
    }
    let source_dir = base_dir.join("source");
    let target_dir = base_dir.join("target");

    fs::create_dir_all(&source_dir).unwrap();
    fs::create_dir_all(&target_dir).unwrap();

    TestDirs {
        base_dir,
        source_dir,
        target_dir,
    }
}

/// Removes a test's scratch directory.
#[allow(dead_code)]
pub fn cleanup_test_dirs(dirs: &TestDirs) {
    let _ = fs::remove_dir_all(&dirs.base_dir);
}

/// Creates empty files with the given names. Only the names matter to the catalog.
#[allow(dead_code)]
pub fn touch_files(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

/// Reads a written catalog back into records.
#[allow(dead_code)]
pub fn read_catalog(path: &Path) -> Vec<HeroRecord> {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}
