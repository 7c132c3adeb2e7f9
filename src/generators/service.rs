//! Python service class generator
//!
//! One service file per group slug, one method per endpoint. The base URL
//! and logger are constructor arguments of the generated class.

use super::{
    ArtifactGenerator, EndpointDescriptor, GenerationReport, Locale, ServiceConfig,
    append_artifact, python_fstring_text, python_str, write_artifact,
};
use crate::error::Result;
use clap::ValueEnum;
use indexmap::IndexMap;
use std::path::PathBuf;

/// How service files are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ServiceWriteMode {
    /// Collect methods per group and write each file once, replacing it
    #[default]
    Render,
    /// Append a class block per endpoint to the existing file
    Append,
}

#[derive(Debug, Clone)]
struct ServiceGroup {
    class: String,
    methods: Vec<EndpointDescriptor>,
}

#[derive(Debug, Clone)]
pub struct ServiceGenerator {
    output_dir: PathBuf,
    locale: Locale,
    config: ServiceConfig,
    mode: ServiceWriteMode,
    /// Pending groups keyed by file name, in first-seen order
    groups: IndexMap<String, ServiceGroup>,
    report: GenerationReport,
}

impl ServiceGenerator {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        locale: Locale,
        config: ServiceConfig,
        mode: ServiceWriteMode,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            locale,
            config,
            mode,
            groups: IndexMap::new(),
            report: GenerationReport::default(),
        }
    }

    /// Render a complete service module holding `methods`
    pub fn render<'a, I>(&self, class: &str, methods: I) -> String
    where
        I: IntoIterator<Item = &'a EndpointDescriptor>,
    {
        let mut lines = vec![
            "import logging".to_string(),
            "from typing import Any, Dict, Optional".to_string(),
            String::new(),
            "import requests".to_string(),
            String::new(),
            String::new(),
            format!("class {}:", class),
            format!(
                "    def __init__(self, base_url: str = {}, logger: Optional[logging.Logger] = None) -> None:",
                python_str(&self.config.base_url)
            ),
            "        self.base_url = base_url".to_string(),
            "        self.logger = logger or logging.getLogger(__name__)".to_string(),
        ];

        for endpoint in methods {
            lines.push(String::new());
            lines.extend(self.render_method(endpoint));
        }

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }

    fn render_method(&self, endpoint: &EndpointDescriptor) -> Vec<String> {
        let method = endpoint.method.to_lowercase();

        vec![
            format!(
                "    def {}(self, payload: Optional[Dict[str, Any]] = None) -> requests.Response:",
                endpoint.slug
            ),
            "        '''".to_string(),
            format!(
                "        {}",
                self.locale.service_doc_summary(&method, &endpoint.slug)
            ),
            String::new(),
            "        Args:".to_string(),
            format!("            payload: {}", self.locale.service_doc_payload()),
            String::new(),
            "        Returns:".to_string(),
            "            Response object from the API call".to_string(),
            String::new(),
            "        Raises:".to_string(),
            format!("            Exception: {}", self.locale.service_doc_raises()),
            "        '''".to_string(),
            "        try:".to_string(),
            format!(
                "            response = requests.{}(f'{{self.base_url}}{}', json=payload)",
                method,
                python_fstring_text(&self.config.path_suffix)
            ),
            "            print(response.text)".to_string(),
            "            return response".to_string(),
            "        except Exception as error:".to_string(),
            "            self.logger.error(error)".to_string(),
            "            raise".to_string(),
        ]
    }
}

impl ArtifactGenerator for ServiceGenerator {
    fn label(&self) -> &'static str {
        "services"
    }

    fn on_endpoint(&mut self, endpoint: &EndpointDescriptor) -> Result<()> {
        match self.mode {
            ServiceWriteMode::Append => {
                let path = self.output_dir.join(endpoint.service_file_name());
                let block = self.render(&endpoint.service_class(), [endpoint]);
                append_artifact(&path, &block)?;
                self.report.record(path);
            }
            ServiceWriteMode::Render => {
                self.groups
                    .entry(endpoint.service_file_name())
                    .or_insert_with(|| ServiceGroup {
                        class: endpoint.service_class(),
                        methods: Vec::new(),
                    })
                    .methods
                    .push(endpoint.clone());
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<GenerationReport> {
        let groups = std::mem::take(&mut self.groups);
        for (file_name, group) in &groups {
            let path = self.output_dir.join(file_name);
            write_artifact(&path, &self.render(&group.class, &group.methods))?;
            self.report.record(path);
        }
        Ok(std::mem::take(&mut self.report))
    }
}
