/// Asset path resolution
///
/// Given an image filename (and optionally the category it should live in),
/// resolution returns a usable location string. Local files win: first the
/// reverse index, then a direct probe of the category directory, and only
/// then a CDN URL constructed from filename keyword heuristics. The chain
/// never fails; a name nothing matches still yields the generic CDN URL,
/// and a broken image simply fails to display downstream.

use std::env;
use std::path::{Path, PathBuf};

use crate::state::equipment::{ItemRef, SlotKind, WeaponType};

pub mod index;

pub use index::{ImageIndex, IndexEntry, ManifestEntry};

/// CDN prefix every remote fallback URL starts with.
pub const CDN_BASE: &str = "https://assets-ng.maxroll.gg/bl4-tools/assets/db/assets/";

/// Asset tree location under the install root.
pub const ASSETS_SUBDIR: &str = "resources/assets/equipment";

/// Manifest filename inside the asset tree.
pub const INDEX_FILENAME: &str = "image_index.json";

/// Extensions tried, in order, when probing a category directory for a
/// filename given without one.
pub const PROBE_EXTENSIONS: [&str; 5] = [".webp", ".png", ".jpg", ".jpeg", ".svg"];

/// Known manufacturer name tokens.
const MANUFACTURER_TOKENS: [&str; 11] = [
    "atlas", "cov", "daedalus", "hyperion", "jakobs", "maliwan", "order", "ripper", "tediore",
    "torgue", "vladof",
];

/// Weapon category tokens.
const WEAPON_TOKENS: [&str; 6] = ["assault", "pistol", "smg", "shotgun", "sniper", "heavy"];

/// Manufacturer icon variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManufacturerIcon {
    Logo,
    Banner,
    HeaderLogo,
}

impl ManufacturerIcon {
    fn as_str(&self) -> &'static str {
        match self {
            ManufacturerIcon::Logo => "logo",
            ManufacturerIcon::Banner => "banner",
            ManufacturerIcon::HeaderLogo => "header-logo",
        }
    }
}

/// The resolution component: install root, asset tree and reverse index.
///
/// Constructed once at startup and passed by reference; tests build their
/// own instances with `with_index`.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    base_dir: PathBuf,
    assets_root: PathBuf,
    index: ImageIndex,
}

/// Find the install root: `LOADOUT_ASSETS_DIR` when set, otherwise the
/// directory containing the executable, otherwise the working directory.
pub fn discover_base_dir() -> PathBuf {
    if let Ok(value) = env::var("LOADOUT_ASSETS_DIR") {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl AssetLibrary {
    /// Open the library under an install root, loading the manifest index.
    /// A missing manifest is a warning, not an error.
    pub fn open(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let assets_root = base_dir.join(ASSETS_SUBDIR);
        let index = ImageIndex::load(&assets_root.join(INDEX_FILENAME));
        Self {
            base_dir,
            assets_root,
            index,
        }
    }

    /// Open the library at the discovered install root.
    pub fn discover() -> Self {
        Self::open(discover_base_dir())
    }

    /// Build a library around an index constructed elsewhere (tests).
    pub fn with_index(base_dir: impl Into<PathBuf>, index: ImageIndex) -> Self {
        let base_dir = base_dir.into();
        let assets_root = base_dir.join(ASSETS_SUBDIR);
        Self {
            base_dir,
            assets_root,
            index,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }

    pub fn index(&self) -> &ImageIndex {
        &self.index
    }

    /// Resolve an image to a location string: local path if the file exists,
    /// CDN URL otherwise. Never fails.
    pub fn resolve(&self, filename: &str, category: Option<&str>) -> String {
        let filename_lower = filename.to_lowercase();

        // Stage 1: reverse index, verified on disk
        if let Some(entry) = self.index.get(&filename_lower) {
            let local_path = self.base_dir.join(&entry.path);
            if local_path.exists() {
                return local_path.to_string_lossy().into_owned();
            }
        }

        // Stage 2: direct probe of the category directory
        if let Some(category) = category {
            let category_dir = self.assets_root.join(category);
            if category_dir.exists() {
                if Path::new(filename).extension().is_some() {
                    let test_path = category_dir.join(filename);
                    if test_path.exists() {
                        return test_path.to_string_lossy().into_owned();
                    }
                } else {
                    for ext in PROBE_EXTENSIONS {
                        let test_path = category_dir.join(format!("{}{}", filename, ext));
                        if test_path.exists() {
                            return test_path.to_string_lossy().into_owned();
                        }
                    }
                }
            }
        }

        // Stage 3: keyword heuristics for a CDN path
        let mentions_manufacturer = filename_lower.contains("manufacturer")
            || MANUFACTURER_TOKENS.iter().any(|m| filename_lower.contains(m));
        if mentions_manufacturer
            && (filename_lower.contains("banner")
                || filename_lower.contains("logo")
                || filename_lower.contains("header"))
        {
            return format!("{}icons/manufacturer/{}", CDN_BASE, filename);
        }

        if filename_lower.contains("augment") {
            return format!("{}item-augment/{}", CDN_BASE, filename);
        }

        if WEAPON_TOKENS.iter().any(|w| filename_lower.contains(w)) {
            return format!("{}generic-item-icons/{}", CDN_BASE, filename);
        }

        // Stage 4: generic fallback
        format!("{}{}", CDN_BASE, filename)
    }

    /// Weapon type icon location.
    pub fn weapon_icon(&self, weapon_type: WeaponType) -> String {
        self.resolve(weapon_type.icon_filename(), Some("weapons"))
    }

    /// Manufacturer icon location.
    pub fn manufacturer_icon(&self, manufacturer: &str, icon: ManufacturerIcon) -> String {
        let filename = format!("{}-{}.webp", manufacturer.to_lowercase(), icon.as_str());
        self.resolve(&filename, Some("manufacturers"))
    }

    /// Item augment icon location. Legendary augments share one icon.
    pub fn item_augment_icon(&self, manufacturer: Option<&str>, legendary: bool) -> String {
        let filename = if legendary {
            "legendary.webp".to_string()
        } else if let Some(manufacturer) = manufacturer {
            format!("{}.webp", manufacturer.to_lowercase())
        } else {
            "legendary.webp".to_string()
        };
        self.resolve(&filename, Some("item-augments"))
    }

    /// Slot type icon location for support and auxiliary slots. Weapon
    /// slots draw the occupant's weapon type icon instead.
    pub fn slot_icon(&self, kind: SlotKind) -> Option<String> {
        match kind {
            SlotKind::Weapon(_) => None,
            SlotKind::Support(support) => {
                Some(self.resolve(support.icon_filename(), Some("slots")))
            }
            SlotKind::Auxiliary(aux) => Some(self.resolve(aux.icon_filename(), Some("slots"))),
        }
    }

    /// Icon location for an occupied slot: the weapon type icon for weapon
    /// slots, the slot type icon otherwise.
    pub fn item_icon(&self, kind: SlotKind, item: &ItemRef) -> String {
        match kind {
            SlotKind::Weapon(_) => self.weapon_icon(item.weapon_type),
            _ => self
                .slot_icon(kind)
                .unwrap_or_else(|| self.resolve("repkit.webp", Some("slots"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Fresh temp install root for a test.
    fn temp_base(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!(
            "loadout-editor-test-{}-{}",
            std::process::id(),
            name
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn empty_library() -> AssetLibrary {
        AssetLibrary::with_index("/nonexistent-install-root", ImageIndex::default())
    }

    #[test]
    fn test_index_hit_returns_local_path() {
        let base = temp_base("index-hit");
        let weapons_dir = base.join(ASSETS_SUBDIR).join("weapons");
        fs::create_dir_all(&weapons_dir).unwrap();
        fs::write(weapons_dir.join("assault.webp"), b"webp").unwrap();

        let json = format!(
            r#"{{"weapons": [{{"original": "assault.webp", "path": "{}/weapons/assault.webp"}}]}}"#,
            ASSETS_SUBDIR
        );
        let index = ImageIndex::from_json(&json).unwrap();
        let library = AssetLibrary::with_index(&base, index);

        // Case-insensitive match, and the index wins over any category hint
        let resolved = library.resolve("Assault.webp", None);
        assert!(resolved.ends_with("assault.webp"));
        assert!(!resolved.starts_with(CDN_BASE));
        assert_eq!(library.resolve("Assault.webp", Some("ui")), resolved);
    }

    #[test]
    fn test_index_entry_with_missing_file_falls_through() {
        let json = r#"{"weapons": [{"original": "ghost.webp", "path": "resources/assets/equipment/weapons/ghost.webp"}]}"#;
        let index = ImageIndex::from_json(json).unwrap();
        let library = AssetLibrary::with_index("/nonexistent-install-root", index);

        // Nothing on disk, no keyword match -> generic CDN fallback
        let resolved = library.resolve("ghost.webp", None);
        assert_eq!(resolved, format!("{}ghost.webp", CDN_BASE));
    }

    #[test]
    fn test_category_probe_with_and_without_extension() {
        let base = temp_base("category-probe");
        let weapons_dir = base.join(ASSETS_SUBDIR).join("weapons");
        fs::create_dir_all(&weapons_dir).unwrap();
        fs::write(weapons_dir.join("pistol.webp"), b"webp").unwrap();

        let library = AssetLibrary::with_index(&base, ImageIndex::default());

        let with_ext = library.resolve("pistol.webp", Some("weapons"));
        assert!(with_ext.ends_with("pistol.webp"));
        assert!(!with_ext.starts_with(CDN_BASE));

        // No extension: .webp is the first probe
        let without_ext = library.resolve("pistol", Some("weapons"));
        assert!(without_ext.ends_with("pistol.webp"));
        assert!(!without_ext.starts_with(CDN_BASE));
    }

    #[test]
    fn test_manufacturer_logo_url() {
        let library = empty_library();
        let resolved = library.resolve("jakobs-logo.webp", None);
        assert_eq!(
            resolved,
            format!("{}icons/manufacturer/jakobs-logo.webp", CDN_BASE)
        );
    }

    #[test]
    fn test_manufacturer_token_without_icon_word_is_generic() {
        let library = empty_library();
        // "jakobs" alone is not a banner/logo/header, and not a weapon token
        assert_eq!(
            library.resolve("jakobs.webp", None),
            format!("{}jakobs.webp", CDN_BASE)
        );
    }

    #[test]
    fn test_augment_and_weapon_urls() {
        let library = empty_library();
        assert_eq!(
            library.resolve("repkit-augment-3.webp", None),
            format!("{}item-augment/repkit-augment-3.webp", CDN_BASE)
        );
        assert_eq!(
            library.resolve("shotgun-icon.webp", None),
            format!("{}generic-item-icons/shotgun-icon.webp", CDN_BASE)
        );
    }

    #[test]
    fn test_generic_fallback_is_verbatim() {
        let library = empty_library();
        assert_eq!(
            library.resolve("unknown-thing.png", None),
            format!("{}unknown-thing.png", CDN_BASE)
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let library = empty_library();
        let first = library.resolve("jakobs-banner.webp", Some("manufacturers"));
        let second = library.resolve("jakobs-banner.webp", Some("manufacturers"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_typed_getters() {
        let library = empty_library();
        assert_eq!(
            library.weapon_icon(WeaponType::Smg),
            format!("{}generic-item-icons/smg.webp", CDN_BASE)
        );
        assert_eq!(
            library.manufacturer_icon("Torgue", ManufacturerIcon::Banner),
            format!("{}icons/manufacturer/torgue-banner.webp", CDN_BASE)
        );
        assert_eq!(
            library.item_augment_icon(None, true),
            format!("{}legendary.webp", CDN_BASE)
        );
    }
}
