use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::types::HeroRecord;
use crate::writer::CatalogWriter;

/// Default indentation of the JSON catalog.
const DEFAULT_INDENT: &[u8] = b"    ";

/// Writes the catalog as a pretty-printed JSON array.
///
/// Non-ASCII characters are written as UTF-8, not escaped.
#[derive(Debug, Clone)]
pub struct JsonWriter {
    indent: Vec<u8>,
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_vec(),
        }
    }
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `width` spaces per indentation level instead of four.
    pub fn with_indent(width: usize) -> Self {
        Self {
            indent: vec![b' '; width],
        }
    }
}

impl CatalogWriter for JsonWriter {
    fn render(&self, records: &[HeroRecord]) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        records.serialize(&mut serializer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SkinMap;

    fn render_str(writer: &JsonWriter, records: &[HeroRecord]) -> String {
        String::from_utf8(writer.render(records).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(render_str(&JsonWriter::new(), &[]), "[]");
    }

    #[test]
    fn test_record_layout_without_skins() {
        let record = HeroRecord {
            short_image: "bocksle_a_de.png".to_string(),
            ..HeroRecord::new("bocksle")
        };
        let expected = r#"[
    {
        "asset_name": "bocksle",
        "game_name": "",
        "rarity": 0,
        "available": false,
        "short_image": "bocksle_a_de.png",
        "long_image": ""
    }
]"#;
        assert_eq!(render_str(&JsonWriter::new(), &[record]), expected);
    }

    #[test]
    fn test_record_layout_with_skins() {
        let mut skins = SkinMap::new();
        skins.insert("bm_02".to_string(), "full_illust_hero_x_bm_02.png".to_string());
        skins.insert("bm_01".to_string(), "full_illust_hero_x_bm_01.png".to_string());
        let record = HeroRecord {
            skins: Some(skins),
            ..HeroRecord::new("x")
        };

        let expected = r#"[
  {
    "asset_name": "x",
    "game_name": "",
    "rarity": 0,
    "available": false,
    "short_image": "",
    "long_image": "",
    "skins": {
      "bm_01": "full_illust_hero_x_bm_01.png",
      "bm_02": "full_illust_hero_x_bm_02.png"
    }
  }
]"#;
        assert_eq!(render_str(&JsonWriter::with_indent(2), &[record]), expected);
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let record = HeroRecord {
            game_name: "Señor Ñandú".to_string(),
            ..HeroRecord::new("senor")
        };
        let output = render_str(&JsonWriter::new(), &[record]);
        assert!(output.contains("\"game_name\": \"Señor Ñandú\""));
    }
}
