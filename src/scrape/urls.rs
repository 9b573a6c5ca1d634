/// Icon URL harvesting
///
/// Scans the build planner's bundled JavaScript for `.webp` image URLs.
/// The sources are minified and carry no schema, so extraction is a fixed
/// table of patterns: absolute URLs, CSS url() references, src/srcset
/// attributes, quoted paths, and the known asset path prefixes. Relative
/// matches are joined to the CDN base. The harvested set is diffed against
/// the image index to produce the missing-URL download list.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{ImageIndex, CDN_BASE};

use super::ScrapeError;

/// Planner script directory under the install root.
pub const PLANNER_JS_SUBDIR: &str = "web editors/maxroll.gg-build-planner";

/// Host prefix for root-relative matches.
const CDN_HOST: &str = "https://assets-ng.maxroll.gg";

lazy_static! {
    static ref URL_PATTERNS: Vec<Regex> = [
        r#"(?i)https?://[^\s"'<>]+\.webp"#,
        r#"(?i)url\(["']?([^"')]+\.webp)["']?\)"#,
        r#"(?i)src=["']([^"']+\.webp)["']"#,
        r#"(?i)srcset=["']([^"']+\.webp[^"']*)["']"#,
        r#"(?i)["']([^"']*\.webp)["']"#,
        r#"(?i)icons/manufacturer/[^"']+\.webp"#,
        r#"(?i)item-augment/[^"']+\.webp"#,
        r#"(?i)generic-item-icons/[^"']+\.webp"#,
        r#"(?i)icons/element/[^"']+\.webp"#,
        r#"(?i)icons/characters/[^"']+\.webp"#,
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();
}

/// Extract every `.webp` URL from one script's text, normalized to
/// absolute URLs.
pub fn extract_urls_from_text(content: &str) -> BTreeSet<String> {
    let mut urls = BTreeSet::new();

    for pattern in URL_PATTERNS.iter() {
        for captures in pattern.captures_iter(content) {
            let matched = captures
                .get(1)
                .or_else(|| captures.get(0))
                .map(|m| m.as_str())
                .unwrap_or("");

            if matched.is_empty() || !matched.ends_with(".webp") {
                continue;
            }

            if matched.starts_with("http") {
                urls.insert(matched.to_string());
            } else if let Some(rooted) = matched.strip_prefix('/') {
                urls.insert(format!("{}/{}", CDN_HOST, rooted));
            } else {
                urls.insert(format!("{}{}", CDN_BASE, matched));
            }
        }
    }

    urls
}

/// Extract URLs from one script file. Read failures warn and yield nothing.
pub fn extract_urls_from_file(path: &Path) -> BTreeSet<String> {
    match fs::read_to_string(path) {
        Ok(content) => extract_urls_from_text(&content),
        Err(e) => {
            eprintln!(
                "⚠️  WARNING: error reading {}: {}",
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                e
            );
            BTreeSet::new()
        }
    }
}

/// Extract URLs from every `.js` file directly inside `js_dir`.
pub fn extract_all_urls(js_dir: &Path) -> BTreeSet<String> {
    let mut all_urls = BTreeSet::new();

    if !js_dir.exists() {
        eprintln!(
            "⚠️  WARNING: JavaScript directory not found: {}",
            js_dir.display()
        );
        return all_urls;
    }

    let mut js_files: Vec<PathBuf> = match fs::read_dir(js_dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "js").unwrap_or(false))
            .collect(),
        Err(e) => {
            eprintln!("⚠️  WARNING: could not list {}: {}", js_dir.display(), e);
            return all_urls;
        }
    };
    js_files.sort();

    println!("🔍 Found {} JavaScript files", js_files.len());

    for js_file in js_files {
        let urls = extract_urls_from_file(&js_file);
        println!(
            "  Scanned {}: {} URLs",
            js_file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            urls.len()
        );
        all_urls.extend(urls);
    }

    all_urls
}

/// The lowercased trailing filename of a URL, query string stripped.
pub fn url_filename(url: &str) -> String {
    url.rsplit('/')
        .next()
        .unwrap_or(url)
        .split('?')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// URLs whose filenames the index does not know, sorted.
pub fn missing_urls(urls: &BTreeSet<String>, index: &ImageIndex) -> Vec<String> {
    urls.iter()
        .filter(|url| !index.contains(&url_filename(url)))
        .cloned()
        .collect()
}

/// Write the missing-URL list for the download script.
pub fn save_missing_urls(missing: &[String], target_base: &Path) -> Result<PathBuf, ScrapeError> {
    let output_file = target_base.join("missing_urls.txt");

    let mut contents = String::from(
        "# Missing Image URLs from maxroll.gg\n# Generated automatically - use download script to fetch these\n\n",
    );
    for url in missing {
        contents.push_str(url);
        contents.push('\n');
    }
    fs::write(&output_file, contents)?;

    Ok(output_file)
}

/// Write the full harvested URL list for reference.
pub fn save_all_urls(urls: &BTreeSet<String>, target_base: &Path) -> Result<PathBuf, ScrapeError> {
    let output_file = target_base.join("all_image_urls.txt");

    let mut contents = String::from("# All Image URLs found in maxroll.gg JavaScript files\n\n");
    for url in urls {
        contents.push_str(url);
        contents.push('\n');
    }
    fs::write(&output_file, contents)?;

    Ok(output_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_absolute_and_quoted_urls() {
        let js = r#"
            const a = "https://assets-ng.maxroll.gg/bl4-tools/assets/db/assets/icons/manufacturer/jakobs-logo.webp";
            const b = 'icons/element/fire.webp';
            const c = "/bl4-tools/assets/db/assets/ui/chevron.webp";
            el.src="generic-item-icons/smg.webp";
        "#;
        let urls = extract_urls_from_text(js);

        assert!(urls.contains(
            "https://assets-ng.maxroll.gg/bl4-tools/assets/db/assets/icons/manufacturer/jakobs-logo.webp"
        ));
        assert!(urls.contains(&format!("{}icons/element/fire.webp", CDN_BASE)));
        assert!(urls
            .contains("https://assets-ng.maxroll.gg/bl4-tools/assets/db/assets/ui/chevron.webp"));
        assert!(urls.contains(&format!("{}generic-item-icons/smg.webp", CDN_BASE)));
    }

    #[test]
    fn test_css_url_reference() {
        let js = r#"background: url("item-augment/legendary.webp");"#;
        let urls = extract_urls_from_text(js);
        assert!(urls.contains(&format!("{}item-augment/legendary.webp", CDN_BASE)));
    }

    #[test]
    fn test_non_webp_is_ignored() {
        let js = r#"const a = "icons/manufacturer/jakobs-logo.png";"#;
        assert!(extract_urls_from_text(js).is_empty());
    }

    #[test]
    fn test_url_filename() {
        assert_eq!(
            url_filename("https://cdn.example/a/b/Jakobs-Logo.webp?v=3"),
            "jakobs-logo.webp"
        );
        assert_eq!(url_filename("plain.webp"), "plain.webp");
    }

    #[test]
    fn test_missing_diff_by_filename() {
        let index = ImageIndex::from_json(
            r#"{"manufacturers": [{"original": "Jakobs-Logo.webp", "path": "x/jakobs-logo.webp"}]}"#,
        )
        .unwrap();

        let mut urls = BTreeSet::new();
        urls.insert(format!("{}icons/manufacturer/jakobs-logo.webp", CDN_BASE));
        urls.insert(format!("{}icons/manufacturer/torgue-logo.webp", CDN_BASE));

        let missing = missing_urls(&urls, &index);
        assert_eq!(missing.len(), 1);
        assert!(missing[0].contains("torgue-logo.webp"));
    }
}
