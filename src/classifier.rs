//! Turns a hero's grouped files into a catalog record.

use log::debug;

use crate::parser::{BASE_VARIANT, FULL_ILLUST_PREFIX, ICON_MARKER, skin_key};
use crate::types::{HeroGroups, HeroRecord, SkinMap};

/// Builds the record for one hero from the files grouped under it.
///
/// Each file lands in at most one slot. The icon check runs first, then the
/// base illustration check, and only then the skin fallback. When several
/// files qualify for the short or long image, the one seen last wins.
///
/// # Arguments
///
/// * `asset_name` - The hero's asset name
/// * `files` - File names grouped under the hero, in listing order
///
/// # Returns
///
/// * `HeroRecord` - The classified record; `skins` is `None` when no skin was found
pub fn classify_hero(asset_name: &str, files: &[String]) -> HeroRecord {
    let icon_marker = format!("{asset_name}_{ICON_MARKER}_");
    let base_marker = format!("{FULL_ILLUST_PREFIX}{asset_name}_{BASE_VARIANT}");

    let mut record = HeroRecord::new(asset_name);
    let mut skins = SkinMap::new();

    for file_name in files {
        let lower = file_name.to_lowercase();

        if lower.contains(&icon_marker) {
            debug!("{asset_name}: short image {file_name}");
            record.short_image = file_name.clone();
        } else if lower.contains(&base_marker) {
            debug!("{asset_name}: long image {file_name}");
            record.long_image = file_name.clone();
        } else if lower.starts_with(FULL_ILLUST_PREFIX) {
            if let Some(key) = skin_key(file_name, asset_name) {
                debug!("{asset_name}: skin {key} -> {file_name}");
                skins.insert(key, file_name.clone());
            }
        }
    }

    if !skins.is_empty() {
        record.skins = Some(skins);
    }
    record
}

/// Classifies every group, yielding records in ascending asset name order.
pub fn classify_groups(groups: &HeroGroups) -> Vec<HeroRecord> {
    groups
        .iter()
        .map(|(asset_name, files)| classify_hero(asset_name, files))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classify_complete_hero() {
        let record = classify_hero(
            "aggyocw",
            &files(&[
                "full_illust_hero_aggyocw_base.png",
                "full_illust_hero_aggyocw_bm_01.png",
                "aggyocw_a_de.png",
            ]),
        );

        assert_eq!(record.asset_name, "aggyocw");
        assert_eq!(record.game_name, "");
        assert_eq!(record.rarity, 0);
        assert!(!record.available);
        assert_eq!(record.short_image, "aggyocw_a_de.png");
        assert_eq!(record.long_image, "full_illust_hero_aggyocw_base.png");
        let skins = record.skins.expect("skins should be present");
        assert_eq!(skins.len(), 1);
        assert_eq!(
            skins.get("bm_01").map(String::as_str),
            Some("full_illust_hero_aggyocw_bm_01.png")
        );
    }

    #[test]
    fn test_no_skins_leaves_field_absent() {
        let record = classify_hero("bocksle", &files(&["bocksle_a_de.png"]));
        assert_eq!(record.short_image, "bocksle_a_de.png");
        assert_eq!(record.long_image, "");
        assert!(record.skins.is_none());
    }

    #[test]
    fn test_last_match_wins() {
        let record = classify_hero(
            "aggyocw",
            &files(&[
                "aggyocw_a_de.png",
                "aggyocw_a_en.png",
                "full_illust_hero_aggyocw_base.png",
                "full_illust_hero_aggyocw_base2.png",
            ]),
        );
        assert_eq!(record.short_image, "aggyocw_a_en.png");
        assert_eq!(record.long_image, "full_illust_hero_aggyocw_base2.png");
        assert!(record.skins.is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive_but_output_keeps_case() {
        let record = classify_hero(
            "aggyocw",
            &files(&["Aggyocw_A_DE.PNG", "FULL_ILLUST_HERO_AGGYOCW_BASE.PNG"]),
        );
        assert_eq!(record.short_image, "Aggyocw_A_DE.PNG");
        assert_eq!(record.long_image, "FULL_ILLUST_HERO_AGGYOCW_BASE.PNG");
    }

    #[test]
    fn test_upper_case_skin_prefix_is_ignored() {
        // The skin key prefix is matched case-sensitively.
        let record = classify_hero("aggyocw", &files(&["Full_Illust_Hero_Aggyocw_BM_01.png"]));
        assert!(record.skins.is_none());
    }

    #[test]
    fn test_duplicate_skin_key_overwrites() {
        let record = classify_hero(
            "aggyocw",
            &files(&[
                "full_illust_hero_aggyocw_bm_01.png",
                "full_illust_hero_aggyocw_bm_01.PNG",
            ]),
        );
        let skins = record.skins.unwrap();
        assert_eq!(skins.len(), 1);
        assert_eq!(skins["bm_01"], "full_illust_hero_aggyocw_bm_01.PNG");
    }

    #[test]
    fn test_classify_groups_is_sorted() {
        let mut groups = HeroGroups::new();
        groups.insert("zeta".to_string(), files(&["zeta_a_de.png"]));
        groups.insert("alpha".to_string(), files(&["alpha_a_de.png"]));

        let records = classify_groups(&groups);
        let names: Vec<&str> = records.iter().map(|r| r.asset_name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
