//! Environment/runtime helpers
//!
//! Startup checks making sure the data directory and collection files exist.

use std::path::Path;

use tracing::info;

/// Ensure the data directory exists, creating it (and parents) when missing.
pub async fn ensure_data_dir(data_dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;
    Ok(())
}

/// Seed a collection file with an empty JSON array if it does not exist yet.
/// Existing files are left untouched, even if their content is invalid.
/// Returns whether the file was created.
pub async fn seed_collection(path: &Path) -> anyhow::Result<bool> {
    if tokio::fs::try_exists(path).await? {
        return Ok(false);
    }
    tokio::fs::write(path, b"[]")
        .await
        .map_err(|e| anyhow::anyhow!("cannot seed {}: {e}", path.display()))?;
    info!(path = %path.display(), "seeded empty collection file");
    Ok(true)
}
