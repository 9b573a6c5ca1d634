/// Download the editor fonts (Coda and Pridi)
///
/// Fetches the font files from the google/fonts mirror into
/// `resources/fonts/`. Individual failures are reported and skipped.

use std::process::ExitCode;

use loadout_editor::assets::discover_base_dir;
use loadout_editor::fonts;

fn main() -> ExitCode {
    println!("Equipment Editor - Font Download");
    println!("{}", "=".repeat(50));

    let fonts_dir = fonts::fonts_dir(&discover_base_dir());
    if let Err(e) = std::fs::create_dir_all(&fonts_dir) {
        eprintln!("❌ Could not create fonts directory: {}", e);
        return ExitCode::FAILURE;
    }

    let client = match fonts::download_client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Could not build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("\nDownloading fonts from Google Fonts...");
    let mut success_count = 0;

    for (filename, url) in fonts::FONT_URLS {
        println!("  Downloading {}...", filename);
        match fonts::download_font(&client, url, &fonts_dir.join(filename)) {
            Ok(bytes) => {
                println!("    ✅ {} ({} bytes)", filename, bytes);
                success_count += 1;
            }
            Err(e) => eprintln!("    ❌ Failed to download {}: {}", filename, e),
        }
    }

    println!("\nDownloaded {}/{} fonts", success_count, fonts::FONT_URLS.len());

    if success_count == fonts::FONT_URLS.len() {
        println!("\nFont download complete!");
        ExitCode::SUCCESS
    } else {
        eprintln!("\n⚠️  WARNING: Some fonts failed to download. You may need to fetch them manually.");
        eprintln!("Visit: https://fonts.google.com/specimen/Coda");
        eprintln!("Visit: https://fonts.google.com/specimen/Pridi");
        ExitCode::FAILURE
    }
}
