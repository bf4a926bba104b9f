use crate::errors::PanoError;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Session snapshot not found at '{path}'")]
    NotFound { path: std::path::PathBuf },

    #[error("Failed to parse session snapshot: {message}")]
    InvalidJson { message: String },

    #[error("Invalid snapshot structure: {field}")]
    InvalidStructure { field: String },

    #[error("Unknown group id {id} in switch")]
    UnknownGroup { id: u64 },

    #[error("Tab {tab_id} is not a member of group {group_id}")]
    UnknownTab { group_id: u64, tab_id: u64 },

    #[error("IO operation failed: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl PanoError for SnapshotError {
    fn error_code(&self) -> &'static str {
        match self {
            SnapshotError::NotFound { .. } => "SNAPSHOT_NOT_FOUND",
            SnapshotError::InvalidJson { .. } => "SNAPSHOT_INVALID_JSON",
            SnapshotError::InvalidStructure { .. } => "SNAPSHOT_INVALID_STRUCTURE",
            SnapshotError::UnknownGroup { .. } => "SNAPSHOT_UNKNOWN_GROUP",
            SnapshotError::UnknownTab { .. } => "SNAPSHOT_UNKNOWN_TAB",
            SnapshotError::IoError { .. } => "SNAPSHOT_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            SnapshotError::NotFound { .. }
                | SnapshotError::InvalidJson { .. }
                | SnapshotError::InvalidStructure { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_error_display() {
        let error = SnapshotError::NotFound {
            path: std::path::PathBuf::from("/tmp/session.json"),
        };
        assert_eq!(
            error.to_string(),
            "Session snapshot not found at '/tmp/session.json'"
        );
        assert_eq!(error.error_code(), "SNAPSHOT_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_unknown_group_error() {
        let error = SnapshotError::UnknownGroup { id: 42 };
        assert_eq!(error.to_string(), "Unknown group id 42 in switch");
        assert_eq!(error.error_code(), "SNAPSHOT_UNKNOWN_GROUP");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_invalid_structure_error() {
        let error = SnapshotError::InvalidStructure {
            field: "duplicate group id 3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid snapshot structure: duplicate group id 3"
        );
        assert!(error.is_user_error());
    }
}
