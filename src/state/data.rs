/// Scraped game metadata
///
/// These structs mirror the `game_data.json` file produced by the
/// extract-game-data script: manufacturers, damage elements, playable
/// characters, rarity levels and weapon type names pulled out of the build
/// planner's bundled JavaScript. The GUI loads the file when present;
/// absence is normal and only logged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One weapon/gear manufacturer and its icon paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
    #[serde(rename = "isBaseItemManufacturer")]
    pub is_base_item_manufacturer: bool,
    #[serde(rename = "bannerIcon")]
    pub banner_icon: Option<String>,
    #[serde(rename = "logoIcon")]
    pub logo_icon: Option<String>,
    #[serde(rename = "headerLogoIcon")]
    pub header_logo_icon: Option<String>,
}

/// One damage element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub name: String,
    #[serde(rename = "hasStatusEffect")]
    pub has_status_effect: bool,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// One playable character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
}

/// One rarity level as the planner defines it (0-4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityInfo {
    pub level: u32,
    pub color: String,
    #[serde(rename = "topBorder")]
    pub top_border: String,
    #[serde(rename = "bottomBorder")]
    pub bottom_border: String,
    pub rarity: Option<String>,
}

/// Everything the extraction script pulls from the planner's data chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub manufacturers: BTreeMap<String, Manufacturer>,
    pub elements: BTreeMap<String, Element>,
    pub characters: BTreeMap<String, Character>,
    pub rarities: BTreeMap<String, RarityInfo>,
    #[serde(rename = "weaponTypes")]
    pub weapon_types: Vec<String>,
    pub version: String,
}

impl Default for GameData {
    fn default() -> Self {
        Self {
            manufacturers: BTreeMap::new(),
            elements: BTreeMap::new(),
            characters: BTreeMap::new(),
            rarities: BTreeMap::new(),
            weapon_types: Vec::new(),
            version: "1.0.0".to_string(),
        }
    }
}

impl GameData {
    /// Convert to pretty JSON for the data file.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON (the data file).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the data file if it exists. Missing or malformed data is a
    /// console warning, never an error for the caller.
    pub fn load(path: &Path) -> Option<GameData> {
        if !path.exists() {
            println!("ℹ️  No game data file at {}", path.display());
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match GameData::from_json(&contents) {
                Ok(data) => {
                    println!(
                        "📊 Loaded game data: {} manufacturers, {} elements, {} characters",
                        data.manufacturers.len(),
                        data.elements.len(),
                        data.characters.len()
                    );
                    Some(data)
                }
                Err(e) => {
                    eprintln!("⚠️  Could not parse game data: {}", e);
                    None
                }
            },
            Err(e) => {
                eprintln!("⚠️  Could not read game data: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut data = GameData::default();
        data.manufacturers.insert(
            "jakobs".to_string(),
            Manufacturer {
                id: "jakobs".to_string(),
                name: "Jakobs".to_string(),
                is_base_item_manufacturer: true,
                banner_icon: Some("icons/manufacturer/jakobs-banner.webp".to_string()),
                logo_icon: Some("icons/manufacturer/jakobs-logo.webp".to_string()),
                header_logo_icon: None,
            },
        );
        data.weapon_types.push("assault".to_string());

        let json = data.to_json().unwrap();
        let restored = GameData::from_json(&json).unwrap();

        assert_eq!(data, restored);
        // JSON keys follow the planner's camelCase names
        assert!(json.contains("\"isBaseItemManufacturer\""));
        assert!(json.contains("\"weaponTypes\""));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        assert!(GameData::load(Path::new("/nonexistent/game_data.json")).is_none());
    }
}
