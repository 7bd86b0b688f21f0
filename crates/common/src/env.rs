//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the listener binds.

use std::path::Path;

use tracing::{info, warn};

/// Check that the static frontend directory and its index page exist.
///
/// Missing assets are not fatal: the JSON API keeps working and `GET /`
/// answers 404. Returns whether the index page was found.
pub async fn ensure_env(frontend_dir: &str) -> anyhow::Result<bool> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; index page will 404");
        return Ok(false);
    }
    let index = Path::new(frontend_dir).join("index.html");
    match tokio::fs::metadata(&index).await {
        Ok(meta) if meta.is_file() => {
            info!(index = %index.display(), "serving index page");
            Ok(true)
        }
        Ok(_) => Err(anyhow::anyhow!("{} exists but is not a file", index.display())),
        Err(_) => {
            warn!(index = %index.display(), "index.html missing; index page will 404");
            Ok(false)
        }
    }
}
