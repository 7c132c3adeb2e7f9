use crate::error::{BddGenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output root, relative to the working directory
pub const DEFAULT_OUTPUT_ROOT: &str = "test/features";

/// Output directories for the three artifact kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub specs_dir: PathBuf,
    pub steps_dir: PathBuf,
    pub services_dir: PathBuf,
}

impl OutputLayout {
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            specs_dir: root.join("specs"),
            steps_dir: root.join("steps"),
            services_dir: root.join("services"),
        }
    }

    pub fn dirs(&self) -> [&Path; 3] {
        [&self.specs_dir, &self.steps_dir, &self.services_dir]
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::under(DEFAULT_OUTPUT_ROOT)
    }
}

/// Create the output directories if they are missing. Existing contents are
/// left alone.
pub fn ensure_directories(layout: &OutputLayout) -> Result<()> {
    for dir in layout.dirs() {
        fs::create_dir_all(dir).map_err(|source| BddGenError::Scaffold {
            path: dir.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %dir.display(), "Output directory ready");
    }
    Ok(())
}
