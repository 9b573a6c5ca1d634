/// State management module
///
/// This module handles all application state, including:
/// - Equipment slots and the assign/clear transitions (equipment.rs)
/// - Scraped game metadata (data.rs)

pub mod data;
pub mod equipment;
