//! Filename conventions for hero assets.
//!
//! Two naming schemes identify a hero:
//!
//! - Full illustrations: `full_illust_hero_<asset>_<variant>.png`, where the
//!   variant is `base` for the primary artwork or a skin code such as `bm_01`.
//! - Icons: `<asset>_a_<suffix>.png`, exactly three underscore separated parts.
//!
//! Everything else is ignored. Matching is done on the lower-cased,
//! extension-stripped file name.

use crate::path_utils::strip_extension;

/// Prefix shared by every full illustration file.
pub const FULL_ILLUST_PREFIX: &str = "full_illust_hero_";
/// Middle part of an icon file name.
pub const ICON_MARKER: &str = "a";
/// Variant name of the primary illustration.
pub const BASE_VARIANT: &str = "base";
/// Placeholder asset names that never produce a hero.
pub const DEFAULT_RESERVED_NAMES: [&str; 2] = ["dummy", "template"];

/// Index of the asset name in a split full illustration name
/// (`full`, `illust`, `hero`, `<asset>`, ...).
const FULL_ILLUST_ASSET_INDEX: usize = 3;

/// Derives the hero asset name from a file name.
///
/// # Arguments
///
/// * `file_name` - Bare file name, including its extension
/// * `reserved` - Placeholder names to reject
///
/// # Returns
///
/// * `Option<String>` - The lower-case asset name, or None if the name matches
///   neither convention or resolves to an empty or reserved name
pub fn parse_hero_asset_name<S: AsRef<str>>(file_name: &str, reserved: &[S]) -> Option<String> {
    let base = strip_extension(file_name).to_lowercase();
    let parts: Vec<&str> = base.split('_').collect();

    let candidate = if base.starts_with(FULL_ILLUST_PREFIX) {
        // The prefix check owns the name even when the part count fails.
        parts.get(FULL_ILLUST_ASSET_INDEX).copied()?
    } else if parts.len() == 3 && parts[1] == ICON_MARKER {
        parts[0]
    } else {
        return None;
    };

    if candidate.is_empty() || is_reserved(candidate, reserved) {
        return None;
    }
    Some(candidate.to_string())
}

/// Extracts the skin key from a full illustration file name.
///
/// The prefix `full_illust_hero_<asset>_` is compared against the original
/// case of the file name; only the extension is removed first.
///
/// # Arguments
///
/// * `file_name` - Bare file name, including its extension
/// * `asset_name` - Hero the file was grouped under
///
/// # Returns
///
/// * `Option<String>` - The trailing key (e.g. `bm_01`), or None when the
///   prefix does not match or nothing follows it
pub fn skin_key(file_name: &str, asset_name: &str) -> Option<String> {
    let base = strip_extension(file_name);
    let prefix = format!("{FULL_ILLUST_PREFIX}{asset_name}_");
    base.strip_prefix(prefix.as_str())
        .filter(|key| !key.is_empty())
        .map(str::to_string)
}

/// Returns true if `candidate` is one of the reserved placeholder names.
pub fn is_reserved<S: AsRef<str>>(candidate: &str, reserved: &[S]) -> bool {
    reserved
        .iter()
        .any(|name| name.as_ref().to_lowercase() == candidate)
}
