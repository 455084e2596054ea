use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenListError {
    #[error("Error processing {file}: {message}")] RecordParse {
        file: String,
        message: String,
    },

    #[error("Failed to read {path}: {source}")] ReadFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to list {path}: {source}")] ListDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")] WriteFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")] Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")] Io(#[from] std::io::Error),
}
