/// Image organization
///
/// Walks download directories, files each image under the asset category
/// its filename suggests, and writes the manifest the resolution index is
/// built from. Categorization is an ordered predicate chain over a fixed
/// vocabulary; the first chain that matches wins, and anything unmatched
/// lands in `ui`.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::assets::{ManifestEntry, ASSETS_SUBDIR, INDEX_FILENAME};

use super::ScrapeError;

/// File extensions treated as images.
pub const IMAGE_EXTENSIONS: [&str; 6] = [".webp", ".png", ".jpg", ".jpeg", ".svg", ".avif"];

/// Asset categories, in the order their directories are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Weapons,
    Manufacturers,
    ItemAugments,
    Slots,
    Rarity,
    Ui,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Weapons,
        Category::Manufacturers,
        Category::ItemAugments,
        Category::Slots,
        Category::Rarity,
        Category::Ui,
    ];

    /// Directory name under the asset tree.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Weapons => "weapons",
            Category::Manufacturers => "manufacturers",
            Category::ItemAugments => "item-augments",
            Category::Slots => "slots",
            Category::Rarity => "rarity",
            Category::Ui => "ui",
        }
    }
}

lazy_static! {
    static ref AUGMENT_PATTERNS: Vec<Regex> = compile(&["augment", "aug-", "repkit-aug"]);
    static ref SLOT_PATTERNS: Vec<Regex> =
        compile(&[r"class.?mod", "shield", "enhancement", "repkit", "ordnance"]);
    static ref MANUFACTURER_PATTERNS: Vec<Regex> = compile(&[
        "atlas", "cov", "daedalus", "hyperion", "jakobs", "maliwan", "order", "ripper", "tediore",
        "torgue", "vladof",
    ]);
    static ref WEAPON_PATTERNS: Vec<Regex> = compile(&[
        "assault",
        "pistol",
        "smg",
        "shotgun",
        "sniper",
        r"heavy.?weapon",
        "weapon",
        "grenade",
        "repkit",
    ]);
    static ref RARITY_PATTERNS: Vec<Regex> = compile(&[
        "common", "uncommon", "rare", "epic", "legendary", "gray", "green", "blue", "purple",
        "orange",
    ]);
    static ref UI_PATTERNS: Vec<Regex> = compile(&[
        "icon",
        "logo",
        "banner",
        "border",
        "background",
        "chevron",
        "arrow",
        "plus",
        "minus",
        "check",
        "clear",
        "delete",
        "edit",
    ]);
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// The manifest written to `image_index.json`: category -> organized files,
/// in the order they were filed.
pub type Manifest = BTreeMap<String, Vec<ManifestEntry>>;

/// Pick the asset category for a filename. Chains are checked in order of
/// specificity; the default is `ui`.
pub fn categorize(filename: &str) -> Category {
    let filename_lower = filename.to_lowercase();

    let chains: [(&Vec<Regex>, Category); 6] = [
        (&AUGMENT_PATTERNS, Category::ItemAugments),
        (&SLOT_PATTERNS, Category::Slots),
        (&MANUFACTURER_PATTERNS, Category::Manufacturers),
        (&WEAPON_PATTERNS, Category::Weapons),
        (&RARITY_PATTERNS, Category::Rarity),
        (&UI_PATTERNS, Category::Ui),
    ];

    for (patterns, category) in chains {
        if patterns.iter().any(|p| p.is_match(&filename_lower)) {
            return category;
        }
    }

    Category::Ui
}

/// Whether a filename has one of the recognized image extensions.
pub fn is_image_file(filename: &str) -> bool {
    let filename_lower = filename.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| filename_lower.ends_with(ext))
}

/// Copy every image under `download_dirs` into the asset tree at
/// `base_dir`, returning the manifest of what was filed where. Missing
/// download directories and per-file copy failures warn and continue.
pub fn organize_images(
    download_dirs: &[PathBuf],
    base_dir: &Path,
) -> Result<Manifest, ScrapeError> {
    let target_base = base_dir.join(ASSETS_SUBDIR);

    let mut manifest: Manifest = Category::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), Vec::new()))
        .collect();

    for category in Category::ALL {
        fs::create_dir_all(target_base.join(category.as_str()))?;
    }

    for download_dir in download_dirs {
        if !download_dir.exists() {
            eprintln!(
                "⚠️  WARNING: directory not found: {}",
                download_dir.display()
            );
            continue;
        }

        println!("🔍 Scanning: {}", download_dir.display());

        for entry in WalkDir::new(download_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let filename = match path.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };
            if !is_image_file(&filename) {
                continue;
            }

            let category = categorize(&filename);
            let target_dir = target_base.join(category.as_str());
            let target_path = dedup_target(&target_dir, &filename);

            match fs::copy(path, &target_path) {
                Ok(_) => {
                    let relative = target_path
                        .strip_prefix(base_dir)
                        .unwrap_or(&target_path)
                        .to_string_lossy()
                        .replace('\\', "/");
                    manifest
                        .entry(category.as_str().to_string())
                        .or_default()
                        .push(ManifestEntry {
                            original: filename.clone(),
                            path: relative,
                        });
                    println!("  ✅ {} -> {}/", filename, category.as_str());
                }
                Err(e) => eprintln!("  ❌ Failed to copy {}: {}", filename, e),
            }
        }
    }

    Ok(manifest)
}

/// Next free target path: `name.ext`, then `name_1.ext`, `name_2.ext`, ...
fn dedup_target(target_dir: &Path, filename: &str) -> PathBuf {
    let mut target = target_dir.join(filename);
    let mut counter = 1;
    while target.exists() {
        let new_name = match filename.rsplit_once('.') {
            Some((stem, ext)) => format!("{}_{}.{}", stem, counter, ext),
            None => format!("{}_{}", filename, counter),
        };
        target = target_dir.join(new_name);
        counter += 1;
    }
    target
}

/// Write the manifest as pretty JSON next to the organized assets.
pub fn save_index(manifest: &Manifest, base_dir: &Path) -> Result<PathBuf, ScrapeError> {
    let index_path = base_dir.join(ASSETS_SUBDIR).join(INDEX_FILENAME);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&index_path, json)?;
    Ok(index_path)
}
