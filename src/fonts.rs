/// Font loading utilities
///
/// Coda is the main text font and Pridi the number font, both fetched from
/// the google/fonts repository by the download-fonts script. Loading is
/// best-effort: whatever files exist under resources/fonts are handed to
/// the application at startup, and missing files only warn.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Main text font family
pub const FONT_MAIN: &str = "Coda";

/// Number font family (weapon badges)
pub const FONT_NUMBER: &str = "Pridi";

/// Font directory under the install root
pub const FONTS_SUBDIR: &str = "resources/fonts";

/// Font files and their direct download URLs (google/fonts mirror).
pub const FONT_URLS: [(&str, &str); 4] = [
    (
        "Coda-Regular.ttf",
        "https://github.com/google/fonts/raw/main/ofl/coda/Coda-Regular.ttf",
    ),
    (
        "Pridi-Regular.ttf",
        "https://github.com/google/fonts/raw/main/ofl/pridi/Pridi-Regular.ttf",
    ),
    (
        "Pridi-Medium.ttf",
        "https://github.com/google/fonts/raw/main/ofl/pridi/Pridi-Medium.ttf",
    ),
    (
        "Pridi-SemiBold.ttf",
        "https://github.com/google/fonts/raw/main/ofl/pridi/Pridi-SemiBold.ttf",
    ),
];

/// Errors from the font downloader.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not write font file: {0}")]
    Io(#[from] std::io::Error),
}

/// The fonts directory under an install root.
pub fn fonts_dir(base_dir: &Path) -> PathBuf {
    base_dir.join(FONTS_SUBDIR)
}

/// Read the bytes of every known font file present on disk, for
/// registration with the GUI at startup. Missing files are warnings.
pub fn load_fonts(base_dir: &Path) -> Vec<Vec<u8>> {
    let dir = fonts_dir(base_dir);
    if !dir.exists() {
        eprintln!("⚠️  WARNING: fonts directory not found: {}", dir.display());
        return Vec::new();
    }

    let mut loaded = Vec::new();
    for (filename, _) in FONT_URLS {
        let path = dir.join(filename);
        if !path.exists() {
            eprintln!("⚠️  WARNING: font not found at {}", path.display());
            continue;
        }
        match std::fs::read(&path) {
            Ok(bytes) => {
                println!("🔤 Loaded font: {}", filename);
                loaded.push(bytes);
            }
            Err(e) => eprintln!("⚠️  WARNING: could not read {}: {}", filename, e),
        }
    }

    loaded
}

/// Build the blocking HTTP client used by the download script.
pub fn download_client() -> Result<reqwest::blocking::Client, FontError> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?)
}

/// Download one font file to `dest`. Returns the byte count written.
pub fn download_font(
    client: &reqwest::blocking::Client,
    url: &str,
    dest: &Path,
) -> Result<usize, FontError> {
    let response = client.get(url).send()?.error_for_status()?;
    let bytes = response.bytes()?;
    std::fs::write(dest, &bytes)?;
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fonts_dir_layout() {
        let dir = fonts_dir(Path::new("/opt/loadout"));
        assert_eq!(dir, PathBuf::from("/opt/loadout/resources/fonts"));
    }

    #[test]
    fn test_load_fonts_missing_dir_is_empty() {
        assert!(load_fonts(Path::new("/nonexistent-install-root")).is_empty());
    }
}
