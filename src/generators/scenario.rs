//! Gherkin feature file generator
//!
//! Writes one `<slug>.feature` per endpoint. Endpoints sharing a slug
//! overwrite each other, the last one in walk order wins.

use super::{ArtifactGenerator, EndpointDescriptor, GenerationReport, Locale, write_artifact};
use crate::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScenarioGenerator {
    output_dir: PathBuf,
    locale: Locale,
    report: GenerationReport,
}

impl ScenarioGenerator {
    pub fn new(output_dir: impl Into<PathBuf>, locale: Locale) -> Self {
        Self {
            output_dir: output_dir.into(),
            locale,
            report: GenerationReport::default(),
        }
    }

    /// Render the feature file for one endpoint
    pub fn render(&self, endpoint: &EndpointDescriptor) -> String {
        let locale = self.locale;
        let mut lines = vec![
            format!("#language:{}", locale.code()),
            format!("{}: {}", locale.feature_keyword(), endpoint.name),
            format!("    {}", locale.role_line(&endpoint.name)),
            format!("    {}", locale.goal_line(&endpoint.group_name)),
            format!("    {}", locale.benefit_line(&endpoint.name)),
            String::new(),
            format!("    @{}", endpoint.name),
            format!("    {}: {}", locale.scenario_keyword(), endpoint.name),
        ];

        lines.push(format!(
            "        {} {}",
            locale.given_keyword(),
            endpoint.steps.given
        ));
        lines.push(format!(
            "        {} {}",
            locale.when_keyword(),
            endpoint.steps.when
        ));
        lines.push(format!(
            "        {} {}",
            locale.then_keyword(),
            endpoint.steps.then
        ));

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}

impl ArtifactGenerator for ScenarioGenerator {
    fn label(&self) -> &'static str {
        "scenarios"
    }

    fn on_endpoint(&mut self, endpoint: &EndpointDescriptor) -> Result<()> {
        let path = self.output_dir.join(endpoint.feature_file_name());
        write_artifact(&path, &self.render(endpoint))?;
        self.report.record(path);
        Ok(())
    }

    fn finish(&mut self) -> Result<GenerationReport> {
        Ok(std::mem::take(&mut self.report))
    }
}
