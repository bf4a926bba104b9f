//! Snapshot file persistence
//!
//! Handles reading/writing the session snapshot to disk with atomic writes.

use std::fs;
use std::path::Path;

use crate::snapshot::errors::SnapshotError;
use crate::snapshot::types::Snapshot;
use crate::snapshot::validation::validate_snapshot_structure;

pub fn ensure_parent_directory(path: &Path) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SnapshotError::IoError { source: e })?;
    }
    Ok(())
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        tracing::warn!(
            event = "core.snapshot.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
            message = "Failed to clean up temp file after operation error"
        );
    }
}

/// Load and validate the snapshot at `path`.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| SnapshotError::IoError { source: e })?;

    let snapshot = serde_json::from_str::<Snapshot>(&content).map_err(|e| {
        tracing::warn!(
            event = "core.snapshot.load_invalid_json",
            file = %path.display(),
            error = %e,
            message = "Failed to parse snapshot JSON"
        );
        SnapshotError::InvalidJson {
            message: e.to_string(),
        }
    })?;

    validate_snapshot_structure(&snapshot)?;

    Ok(snapshot)
}

/// Write the snapshot to `path` atomically (temp file + rename).
///
/// Stamps `saved_at` with the current time before serializing.
pub fn save_snapshot(snapshot: &Snapshot, path: &Path) -> Result<(), SnapshotError> {
    ensure_parent_directory(path)?;

    let mut stamped = snapshot.clone();
    stamped.saved_at = Some(chrono::Utc::now().to_rfc3339());

    let json = serde_json::to_string_pretty(&stamped).map_err(|e| {
        tracing::error!(
            event = "core.snapshot.serialization_failed",
            file = %path.display(),
            error = %e,
            message = "Failed to serialize snapshot to JSON"
        );
        SnapshotError::IoError {
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        }
    })?;

    let temp_file = path.with_extension("json.tmp");

    // Write to temp file
    if let Err(e) = fs::write(&temp_file, &json) {
        cleanup_temp_file(&temp_file, &e);
        return Err(SnapshotError::IoError { source: e });
    }

    // Rename temp file to final location
    if let Err(e) = fs::rename(&temp_file, path) {
        cleanup_temp_file(&temp_file, &e);
        return Err(SnapshotError::IoError { source: e });
    }

    Ok(())
}
