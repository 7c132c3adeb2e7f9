use crate::error::{BddGenError, Result};
use crate::models::collection::{Collection, RawCollection};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load a Postman collection from a file
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<Collection> {
    let path = path.as_ref();

    if path.is_dir() {
        return Err(BddGenError::NotAFile(path.to_path_buf()));
    }

    // Read the file
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => BddGenError::NotFound(path.to_path_buf()),
        _ => BddGenError::IoError(e),
    })?;

    // Parse JSON
    let raw: RawCollection =
        serde_json::from_str(&content).map_err(|e| BddGenError::MalformedInput {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let collection = Collection::from_raw(raw).map_err(|reason| BddGenError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    })?;

    tracing::info!(
        path = %path.display(),
        name = collection.name.as_deref().unwrap_or("<unnamed>"),
        endpoints = collection.endpoint_count(),
        "Loaded collection"
    );

    Ok(collection)
}
