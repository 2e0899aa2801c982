//! Tools built on twicas-client: environment loading shared by the
//! binaries, and an axum adapter for TwitCasting webhook deliveries.

use std::path::{Path, PathBuf};

pub mod config;
pub mod server;

/// Where the binaries look for `.env`: the working directory, its parent,
/// then the directory holding the executable.
pub fn dotenv_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".env"), PathBuf::from("../.env")];
    if let Some(dir) = std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(Path::parent)
    {
        candidates.push(dir.join(".env"));
    }
    candidates
}

/// Load the first `.env` in `candidates` that parses. Returns its path.
pub fn load_dotenv(candidates: &[PathBuf]) -> Option<PathBuf> {
    let loaded = candidates
        .iter()
        .find(|path| dotenvy::from_path(path).is_ok())
        .cloned();

    match &loaded {
        Some(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        None => tracing::info!("No .env file found, using system environment variables"),
    }
    loaded
}
