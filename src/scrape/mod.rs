/// Offline extraction tooling
///
/// The cores of the one-shot scripts: organizing downloaded images into the
/// asset tree (organize.rs), harvesting icon URLs from the build planner's
/// bundled JavaScript (urls.rs) and pulling game metadata out of its data
/// chunk (game_data.rs). Everything here is best-effort text extraction
/// over semi-structured sources; per-file failures warn and skip, only I/O
/// on the outputs is a hard error.

use thiserror::Error;

pub mod game_data;
pub mod organize;
pub mod urls;

/// Errors surfaced by the extraction scripts.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
