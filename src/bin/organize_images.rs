/// Organize downloaded images into the equipment asset tree
///
/// Takes the download directories to scan as arguments, copies every image
/// into `resources/assets/equipment/<category>/` by filename pattern, and
/// writes `image_index.json` for the resolver.

use std::path::PathBuf;
use std::process::ExitCode;

use loadout_editor::assets::discover_base_dir;
use loadout_editor::scrape::organize;

fn main() -> ExitCode {
    println!("Equipment Editor - Image Organization");
    println!("{}", "=".repeat(50));

    let download_dirs: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if download_dirs.is_empty() {
        eprintln!("Usage: organize_images <download-dir> [<download-dir> ...]");
        return ExitCode::FAILURE;
    }

    let base_dir = discover_base_dir();

    let manifest = match organize::organize_images(&download_dirs, &base_dir) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("❌ Organization failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("\nSummary:");
    let mut total = 0;
    for (category, files) in &manifest {
        total += files.len();
        println!("  {}: {} files", category, files.len());
    }
    println!("\n  Total: {} files organized", total);

    match organize::save_index(&manifest, &base_dir) {
        Ok(index_path) => println!("\nImage index saved to: {}", index_path.display()),
        Err(e) => {
            eprintln!("❌ Could not save image index: {}", e);
            return ExitCode::FAILURE;
        }
    }

    println!("\nImage organization complete!");
    ExitCode::SUCCESS
}
