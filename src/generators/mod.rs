//! Generators for BDD artifacts
//!
//! Every generator receives the endpoints of a collection one by one, in
//! walk order, and writes its artifacts into its own output directory.

pub mod descriptor;
pub mod locale;
pub mod scenario;
pub mod service;
pub mod steps;

pub use descriptor::{
    EndpointDescriptor, GroupNaming, StepTexts, capitalize, describe_collection, slugify,
};
pub use locale::Locale;
pub use scenario::ScenarioGenerator;
pub use service::{ServiceGenerator, ServiceWriteMode};
pub use steps::StepGenerator;

use crate::error::{BddGenError, Result};
use indexmap::IndexSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Settings injected into generated service classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Default value of the `base_url` constructor argument
    pub base_url: String,
    /// Path appended to the base URL by every service method
    pub path_suffix: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            path_suffix: "/2020".to_string(),
        }
    }
}

/// Configuration options for generators
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub locale: Locale,
    pub group_naming: GroupNaming,
    pub service_mode: ServiceWriteMode,
    pub service: ServiceConfig,
}

/// Files touched by one generator, in write order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub artifacts: IndexSet<PathBuf>,
}

impl GenerationReport {
    pub fn record(&mut self, path: PathBuf) {
        self.artifacts.insert(path);
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Trait for artifact generators driven endpoint by endpoint
pub trait ArtifactGenerator {
    /// Short human-readable name used in progress output
    fn label(&self) -> &'static str;

    /// Handle one endpoint
    fn on_endpoint(&mut self, endpoint: &EndpointDescriptor) -> Result<()>;

    /// Flush anything accumulated and report what was written
    fn finish(&mut self) -> Result<GenerationReport>;
}

/// Feed every descriptor to `generator`, stopping at the first error.
pub fn run_generator<G: ArtifactGenerator + ?Sized>(
    generator: &mut G,
    descriptors: &[EndpointDescriptor],
) -> Result<GenerationReport> {
    for descriptor in descriptors {
        generator.on_endpoint(descriptor)?;
    }
    let report = generator.finish()?;
    tracing::info!(
        generator = generator.label(),
        artifacts = report.len(),
        "Generator finished"
    );
    Ok(report)
}

/// Single-quoted Python string literal holding `value` verbatim
pub fn python_str(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Text that reads back as `value` inside a single-quoted Python f-string
pub fn python_fstring_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('{', "{{")
        .replace('}', "}}")
}

pub(crate) fn write_artifact(path: &Path, content: &str) -> Result<()> {
    tracing::debug!(path = %path.display(), "Writing artifact");
    fs::write(path, content).map_err(|source| BddGenError::GenerationFailure {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn append_artifact(path: &Path, content: &str) -> Result<()> {
    tracing::debug!(path = %path.display(), "Appending to artifact");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|source| BddGenError::GenerationFailure {
            path: path.to_path_buf(),
            source,
        })
}
