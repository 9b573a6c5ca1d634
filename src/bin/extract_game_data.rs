/// Extract game data from the build planner's data chunk
///
/// Parses the planner's bundled chunk for weapons, manufacturers, elements,
/// characters and rarity levels, and writes `data/game_data.json` for the
/// editor to load at startup.

use std::process::ExitCode;

use loadout_editor::assets::discover_base_dir;
use loadout_editor::scrape::{game_data, urls};

/// The planner chunk carrying the metadata tables.
const PLANNER_CHUNK: &str = "bl4-chunk-00-e58afd3e.js";

fn main() -> ExitCode {
    println!("Equipment Editor - Game Data Extraction");
    println!("{}", "=".repeat(50));

    let base_dir = discover_base_dir();
    let js_file = base_dir.join(urls::PLANNER_JS_SUBDIR).join(PLANNER_CHUNK);

    if !js_file.exists() {
        eprintln!("❌ JavaScript file not found: {}", js_file.display());
        return ExitCode::FAILURE;
    }

    println!("\nReading {}...", PLANNER_CHUNK);
    let content = match std::fs::read_to_string(&js_file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("❌ Could not read file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Extracting game data...");
    let data = game_data::extract_game_data(&content);

    let output_file = base_dir.join("data").join("game_data.json");
    println!("\nSaving to {}...", output_file.display());

    if let Some(parent) = output_file.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("❌ Could not create data directory: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let json = match data.to_json() {
        Ok(json) => json,
        Err(e) => {
            eprintln!("❌ Could not serialize game data: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = std::fs::write(&output_file, json) {
        eprintln!("❌ Could not write game data: {}", e);
        return ExitCode::FAILURE;
    }

    println!("\nSummary:");
    println!("  Manufacturers: {}", data.manufacturers.len());
    println!("  Elements: {}", data.elements.len());
    println!("  Characters: {}", data.characters.len());
    println!("  Rarities: {}", data.rarities.len());
    println!("  Weapon Types: {}", data.weapon_types.len());

    println!("\nGame data saved to: {}", output_file.display());
    ExitCode::SUCCESS
}
