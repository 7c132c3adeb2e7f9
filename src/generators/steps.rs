//! behave step definition generator

use super::{ArtifactGenerator, EndpointDescriptor, GenerationReport, python_str, write_artifact};
use crate::error::Result;
use std::path::PathBuf;

/// Status code the generated `then` step expects
const EXPECTED_STATUS: u16 = 200;

#[derive(Debug, Clone)]
pub struct StepGenerator {
    output_dir: PathBuf,
    report: GenerationReport,
}

impl StepGenerator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            report: GenerationReport::default(),
        }
    }

    /// Render the step definitions for one endpoint.
    ///
    /// Step patterns are the descriptor's texts as Python literals, so their
    /// values match the scenario lines byte for byte.
    pub fn render(&self, endpoint: &EndpointDescriptor) -> String {
        let class = endpoint.service_class();

        let lines = [
            "from behave import *".to_string(),
            format!(
                "from services.{} import {}",
                endpoint.service_module(),
                class
            ),
            String::new(),
            format!("service = {}()", class),
            String::new(),
            format!("@given({})", python_str(&endpoint.steps.given)),
            "def setup_request(context):".to_string(),
            "    context.payload = {}".to_string(),
            String::new(),
            format!("@when({})", python_str(&endpoint.steps.when)),
            "def send_request(context):".to_string(),
            format!(
                "    context.response = service.{}(context.payload)",
                endpoint.slug
            ),
            String::new(),
            format!("@then({})", python_str(&endpoint.steps.then)),
            "def validate_response(context):".to_string(),
            format!(
                "    assert context.response.status_code == {}",
                EXPECTED_STATUS
            ),
        ];

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }
}

impl ArtifactGenerator for StepGenerator {
    fn label(&self) -> &'static str {
        "steps"
    }

    fn on_endpoint(&mut self, endpoint: &EndpointDescriptor) -> Result<()> {
        let path = self.output_dir.join(endpoint.steps_file_name());
        write_artifact(&path, &self.render(endpoint))?;
        self.report.record(path);
        Ok(())
    }

    fn finish(&mut self) -> Result<GenerationReport> {
        Ok(std::mem::take(&mut self.report))
    }
}
