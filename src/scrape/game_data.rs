/// Game metadata extraction
///
/// Pulls manufacturers, damage elements, characters, rarity levels and
/// weapon type names out of the planner's bundled data chunk. The chunk is
/// minified JavaScript object literals, so each record type is matched by
/// a fixed anchor pattern and enriched by per-key secondary searches.
/// Minified booleans appear as `!0`/`!1`.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

use crate::state::data::{Character, Element, GameData, Manufacturer, RarityInfo};

lazy_static! {
    static ref MANUFACTURER_RE: Regex =
        Regex::new(r#"(\w+):\s*\{\s*name:\s*"([^"]+)",\s*isBaseItemManufacturer:\s*(\w+|!0|!1),"#)
            .unwrap();
    static ref ELEMENT_RE: Regex =
        Regex::new(r#"(\w+):\s*\{\s*name:\s*"([^"]+)",\s*hasStatusEffect:\s*(\w+|!0|!1),"#)
            .unwrap();
    static ref CHARACTER_RE: Regex =
        Regex::new(r#"(\w+):\s*\{\s*id:\s*"([^"]+)",\s*name:\s*"([^"]+)""#).unwrap();
    static ref RARITY_RE: Regex = Regex::new(
        r#"(\d+):\s*\{\s*color:\s*"([^"]+)",\s*topBorder:\s*"([^"]+)",\s*bottomBorder:\s*"([^"]+)""#
    )
    .unwrap();
    static ref WEAPON_TYPE_RES: Vec<Regex> = [
        r#"(?i)"(assault[^"]*)""#,
        r#"(?i)"(pistol[^"]*)""#,
        r#"(?i)"(smg[^"]*)""#,
        r#"(?i)"(shotgun[^"]*)""#,
        r#"(?i)"(sniper[^"]*)""#,
        r#"(?i)"(heavy.?weapon[^"]*)""#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// Minified JS truthiness: `!0` or `true`.
fn js_bool(token: &str) -> bool {
    token == "!0" || token == "true"
}

/// Search for a string property of a keyed object elsewhere in the chunk,
/// e.g. `jakobs: { ... bannerIcon: "..." }`.
fn keyed_property(content: &str, key: &str, property: &str) -> Option<String> {
    let pattern = format!(
        r#"{}:\s*\{{[^}}]*{}:\s*"([^"]+)""#,
        regex::escape(key),
        regex::escape(property)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract manufacturer records and their icon paths.
pub fn extract_manufacturers(content: &str) -> BTreeMap<String, Manufacturer> {
    let mut manufacturers = BTreeMap::new();

    for captures in MANUFACTURER_RE.captures_iter(content) {
        let key = captures[1].to_string();
        let name = captures[2].to_string();
        let is_base = js_bool(&captures[3]);

        manufacturers.insert(
            key.clone(),
            Manufacturer {
                id: key.clone(),
                name,
                is_base_item_manufacturer: is_base,
                banner_icon: keyed_property(content, &key, "bannerIcon"),
                logo_icon: keyed_property(content, &key, "logoIcon"),
                header_logo_icon: keyed_property(content, &key, "headerLogoIcon"),
            },
        );
    }

    manufacturers
}

/// Extract damage element records.
pub fn extract_elements(content: &str) -> BTreeMap<String, Element> {
    let mut elements = BTreeMap::new();

    for captures in ELEMENT_RE.captures_iter(content) {
        let key = captures[1].to_string();
        let name = captures[2].to_string();
        let has_status = js_bool(&captures[3]);

        elements.insert(
            key.clone(),
            Element {
                id: key.clone(),
                name,
                has_status_effect: has_status,
                icon: keyed_property(content, &key, "icon"),
                color: keyed_property(content, &key, "color"),
            },
        );
    }

    elements
}

/// Extract playable character records.
pub fn extract_characters(content: &str) -> BTreeMap<String, Character> {
    let mut characters = BTreeMap::new();

    for captures in CHARACTER_RE.captures_iter(content) {
        characters.insert(
            captures[1].to_string(),
            Character {
                id: captures[2].to_string(),
                name: captures[3].to_string(),
            },
        );
    }

    characters
}

/// Extract rarity level records (levels 0-4).
pub fn extract_rarities(content: &str) -> BTreeMap<String, RarityInfo> {
    let mut rarities = BTreeMap::new();

    for captures in RARITY_RE.captures_iter(content) {
        let level: u32 = match captures[1].parse() {
            Ok(level) => level,
            Err(_) => continue,
        };
        rarities.insert(
            level.to_string(),
            RarityInfo {
                level,
                color: captures[2].to_string(),
                top_border: captures[3].to_string(),
                bottom_border: captures[4].to_string(),
                rarity: keyed_property(content, &captures[1], "rarity"),
            },
        );
    }

    rarities
}

/// Extract the weapon type name strings, sorted and de-duplicated.
pub fn extract_weapon_types(content: &str) -> Vec<String> {
    let mut weapon_types = BTreeSet::new();

    for re in WEAPON_TYPE_RES.iter() {
        for captures in re.captures_iter(content) {
            weapon_types.insert(captures[1].to_string());
        }
    }

    weapon_types.into_iter().collect()
}

/// Run every extractor over the data chunk.
pub fn extract_game_data(content: &str) -> GameData {
    GameData {
        manufacturers: extract_manufacturers(content),
        elements: extract_elements(content),
        characters: extract_characters(content),
        rarities: extract_rarities(content),
        weapon_types: extract_weapon_types(content),
        version: "1.0.0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHUNK: &str = r##"
        manufacturers: {
            jakobs: { name: "Jakobs", isBaseItemManufacturer: !0, bannerIcon: "icons/manufacturer/jakobs-banner.webp", logoIcon: "icons/manufacturer/jakobs-logo.webp" },
            order: { name: "The Order", isBaseItemManufacturer: !1, logoIcon: "icons/manufacturer/order-logo.webp" }
        },
        elements: {
            fire: { name: "Incendiary", hasStatusEffect: !0, icon: "icons/element/fire.webp", color: "#ff6a00" }
        },
        characters: {
            vex: { id: "vex", name: "Vex" }
        },
        rarities: {
            3: { color: "#8e1db6", topBorder: "#a03fd1", bottomBorder: "#6b1689", rarity: "epic" }
        },
        types: ["assault-rifle", "pistol", "heavy-weapon", "pistol"]
    "##;

    #[test]
    fn test_extract_manufacturers() {
        let manufacturers = extract_manufacturers(CHUNK);
        assert_eq!(manufacturers.len(), 2);

        let jakobs = &manufacturers["jakobs"];
        assert_eq!(jakobs.name, "Jakobs");
        assert!(jakobs.is_base_item_manufacturer);
        assert_eq!(
            jakobs.banner_icon.as_deref(),
            Some("icons/manufacturer/jakobs-banner.webp")
        );
        assert!(jakobs.header_logo_icon.is_none());

        let order = &manufacturers["order"];
        assert!(!order.is_base_item_manufacturer);
    }

    #[test]
    fn test_extract_elements() {
        let elements = extract_elements(CHUNK);
        let fire = &elements["fire"];
        assert_eq!(fire.name, "Incendiary");
        assert!(fire.has_status_effect);
        assert_eq!(fire.color.as_deref(), Some("#ff6a00"));
    }

    #[test]
    fn test_extract_characters_and_rarities() {
        let characters = extract_characters(CHUNK);
        assert_eq!(characters["vex"].name, "Vex");

        let rarities = extract_rarities(CHUNK);
        let epic = &rarities["3"];
        assert_eq!(epic.level, 3);
        assert_eq!(epic.color, "#8e1db6");
        assert_eq!(epic.rarity.as_deref(), Some("epic"));
    }

    #[test]
    fn test_extract_weapon_types_sorted_unique() {
        let types = extract_weapon_types(CHUNK);
        assert_eq!(types, vec!["assault-rifle", "heavy-weapon", "pistol"]);
    }

    #[test]
    fn test_full_extraction_round_trips_as_json() {
        let data = extract_game_data(CHUNK);
        let json = data.to_json().unwrap();
        let restored = GameData::from_json(&json).unwrap();
        assert_eq!(data, restored);
    }
}
