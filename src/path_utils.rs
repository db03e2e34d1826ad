//! Path and filename utilities.
//!
//! Helpers for turning directory entries into filename strings and for the
//! extension handling shared by the collector and the parser.

use crate::error::{Error, Result};

use std::path::Path;

/// Safely gets the file name from a path as a string.
///
/// # Arguments
///
/// * `path` - The path to extract the file name from
///
/// # Returns
///
/// * `Result<String>` - The file name as a UTF-8 string, or an error if conversion fails
pub fn get_file_name_safe(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            Error::InvalidPath(
                path.to_path_buf(),
                "File name is not valid UTF-8".to_string(),
            )
        })
}

/// Gets the file name from a path with fallback to lossy conversion.
pub fn get_file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Removes the final extension from a file name.
///
/// Only the last `.`-separated suffix is removed. Leading dots are part of the
/// name, so `.png` and `..png` have no extension and are returned unchanged.
///
/// # Arguments
///
/// * `file_name` - A bare file name (no directory components)
///
/// # Returns
///
/// * `&str` - The file name without its extension
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if file_name[..dot].chars().any(|c| c != '.') => &file_name[..dot],
        _ => file_name,
    }
}

/// Checks whether a file name ends in `.<extension>`, ignoring case.
pub fn has_extension(file_name: &str, extension: &str) -> bool {
    let suffix = format!(".{}", extension.to_lowercase());
    file_name.to_lowercase().ends_with(&suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_get_file_name_lossy() {
        let path = Path::new("heroes/aggyocw_a_de.png");
        assert_eq!(get_file_name_lossy(path), "aggyocw_a_de.png");
        assert_eq!(get_file_name_lossy(Path::new("")), "unknown");
    }

    #[test]
    fn test_get_file_name_safe() {
        let path = Path::new("heroes/full_illust_hero_aggyocw_base.png");
        assert_eq!(
            get_file_name_safe(path).unwrap(),
            "full_illust_hero_aggyocw_base.png"
        );
        assert!(get_file_name_safe(Path::new("")).is_err());
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("aggyocw_a_de.png"), "aggyocw_a_de");
        assert_eq!(strip_extension("archive.tar.PNG"), "archive.tar");
        assert_eq!(strip_extension("no_extension"), "no_extension");
        assert_eq!(strip_extension(".png"), ".png");
        assert_eq!(strip_extension("..png"), "..png");
        assert_eq!(strip_extension(".hidden.png"), ".hidden");
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("icon.png", "png"));
        assert!(has_extension("ICON.PNG", "png"));
        assert!(has_extension("icon.png", "PNG"));
        assert!(!has_extension("notes.txt", "png"));
        assert!(!has_extension("png", "png"));
        assert!(!has_extension("iconpng", "png"));
    }
}
