/// File access for token records and the published list.
///
/// Each read is a blocking, scoped acquisition: open, read fully, release.
/// No file stays open across iterations.
use std::fs;
use std::path::{ Path, PathBuf };

use serde_json::Value;

use crate::errors::TokenListError;
use crate::global::RECORD_EXTENSION;
use crate::tokens::types::{ TokenList, TokenRecord };

/// Enumerate the record files of the tokens directory.
///
/// Only regular files with the record extension are returned; ordering is
/// whatever the directory enumeration yields.
pub fn list_record_files(dir: &Path) -> Result<Vec<PathBuf>, TokenListError> {
    let entries = fs::read_dir(dir).map_err(|e| TokenListError::ListDir {
        path: dir.display().to_string(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TokenListError::ListDir {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().map(|ext| ext == RECORD_EXTENSION).unwrap_or(false) {
            files.push(path);
        }
    }

    Ok(files)
}

/// File name used when reporting progress and errors for a path.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_file(path: &Path) -> Result<String, TokenListError> {
    fs::read_to_string(path).map_err(|e| TokenListError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load a record as a typed [`TokenRecord`] for aggregation.
pub fn load_record(path: &Path) -> Result<TokenRecord, TokenListError> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| TokenListError::RecordParse {
        file: file_label(path),
        message: e.to_string(),
    })
}

/// Load a record as raw JSON for schema validation.
pub fn load_record_value(path: &Path) -> Result<Value, TokenListError> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| TokenListError::RecordParse {
        file: file_label(path),
        message: e.to_string(),
    })
}

/// Load the published list as raw JSON for schema validation.
pub fn load_list_value(path: &Path) -> Result<Value, TokenListError> {
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| TokenListError::RecordParse {
        file: file_label(path),
        message: e.to_string(),
    })
}

/// Serialize the list as indented JSON and overwrite the output path.
pub fn write_token_list(path: &Path, list: &TokenList) -> Result<(), TokenListError> {
    let json = serde_json::to_string_pretty(list)?;
    fs::write(path, json).map_err(|e| TokenListError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })
}
