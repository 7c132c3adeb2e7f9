//! Generate command implementation
//!
//! Scaffolds feature files, step definitions and service classes from a
//! Postman collection.

use crate::error::Result;
use crate::generators::{
    ArtifactGenerator, EndpointDescriptor, GenerateOptions, GenerationReport, ScenarioGenerator,
    ServiceGenerator, StepGenerator, describe_collection, run_generator,
};
use crate::loader::{load_collection, prompt_collection_path, validate_collection_path};
use crate::scaffold::{OutputLayout, ensure_directories};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Arguments for the generate command
#[derive(Debug, Clone)]
pub struct GenerateCommandArgs<'a> {
    /// Collection to read; prompted for when absent
    pub collection_path: Option<&'a Path>,
    /// Root of the specs/steps/services directories
    pub output_root: &'a Path,
    pub options: GenerateOptions,
}

/// What a generation run produced
#[derive(Debug, Clone, Default)]
pub struct GenerationSummary {
    pub collection_path: PathBuf,
    pub endpoints: usize,
    pub scenarios: GenerationReport,
    pub steps: GenerationReport,
    pub services: GenerationReport,
}

/// Execute the generate command
pub fn execute_generate(args: GenerateCommandArgs<'_>) -> Result<GenerationSummary> {
    println!("\n{}", "=== Postman Collection BDD Generator ===".bold());

    let collection_path = match args.collection_path {
        Some(path) => validate_collection_path(&path.to_string_lossy())?,
        None => prompt_collection_path()?,
    };
    println!(
        "\n{} Loading collection from: {}",
        "→".blue(),
        collection_path.display()
    );

    let collection = load_collection(&collection_path)?;
    println!("{} Collection loaded", "✓".green());

    let layout = OutputLayout::under(args.output_root);
    ensure_directories(&layout)?;
    println!("{} Output directories ready", "✓".green());

    let descriptors = describe_collection(&collection, &args.options)?;

    let mut scenarios = ScenarioGenerator::new(&layout.specs_dir, args.options.locale);
    let scenarios = run_stage(&mut scenarios, &descriptors, "Feature files (.feature) generated")?;

    let mut steps = StepGenerator::new(&layout.steps_dir);
    let steps = run_stage(&mut steps, &descriptors, "Step definition files generated")?;

    let mut services = ServiceGenerator::new(
        &layout.services_dir,
        args.options.locale,
        args.options.service.clone(),
        args.options.service_mode,
    );
    let services = run_stage(&mut services, &descriptors, "Service classes generated")?;

    println!(
        "\n{} Test generation completed: {} endpoint(s)",
        "✓".green(),
        descriptors.len()
    );

    Ok(GenerationSummary {
        collection_path,
        endpoints: descriptors.len(),
        scenarios,
        steps,
        services,
    })
}

fn run_stage<G: ArtifactGenerator>(
    generator: &mut G,
    descriptors: &[EndpointDescriptor],
    done_message: &str,
) -> Result<GenerationReport> {
    let report = run_generator(generator, descriptors)?;
    println!(
        "{} {} ({} file(s))",
        "✓".green(),
        done_message,
        report.len()
    );
    Ok(report)
}
