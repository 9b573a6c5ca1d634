/// Extract image URLs from the build planner's JavaScript files
///
/// Harvests every `.webp` URL, diffs against the image index, and writes
/// `missing_urls.txt` (for the download script) plus `all_image_urls.txt`
/// (for reference) into the asset tree.

use std::process::ExitCode;

use loadout_editor::assets::{discover_base_dir, ImageIndex, ASSETS_SUBDIR, INDEX_FILENAME};
use loadout_editor::scrape::urls;

fn main() -> ExitCode {
    println!("Equipment Editor - Image URL Extraction");
    println!("{}", "=".repeat(50));

    let base_dir = discover_base_dir();
    let target_base = base_dir.join(ASSETS_SUBDIR);
    let js_dir = base_dir.join(urls::PLANNER_JS_SUBDIR);

    println!("\nLoading existing image index...");
    let index = ImageIndex::load(&target_base.join(INDEX_FILENAME));
    println!("  Found {} existing images", index.len());

    println!("\nExtracting URLs from JavaScript files...");
    let all_urls = urls::extract_all_urls(&js_dir);
    println!("\n  Total unique URLs found: {}", all_urls.len());

    println!("\nChecking for missing images...");
    let missing = urls::missing_urls(&all_urls, &index);
    println!("  Missing: {} URLs", missing.len());

    if !missing.is_empty() {
        match urls::save_missing_urls(&missing, &target_base) {
            Ok(path) => println!("\nMissing URLs saved to: {}", path.display()),
            Err(e) => {
                eprintln!("❌ Could not save missing URLs: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    match urls::save_all_urls(&all_urls, &target_base) {
        Ok(path) => println!("All URLs saved to: {}", path.display()),
        Err(e) => {
            eprintln!("❌ Could not save URL list: {}", e);
            return ExitCode::FAILURE;
        }
    }

    println!("\nURL extraction complete!");
    ExitCode::SUCCESS
}
