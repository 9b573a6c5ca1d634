/// Loadout editor library
///
/// Shared between the GUI binary and the offline asset scripts:
/// - Rarity color tables (style)
/// - Image resolution: index, probe, CDN fallback (assets)
/// - Equipment slots and scraped game metadata (state)
/// - Slot clip geometry and the canvas painter (ui)
/// - Extraction script cores (scrape)
/// - Font loading and the download table (fonts)

pub mod assets;
pub mod fonts;
pub mod scrape;
pub mod state;
pub mod style;
pub mod ui;
