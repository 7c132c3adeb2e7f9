//! Per-endpoint identifiers and texts shared by every generator

use super::{GenerateOptions, Locale};
use crate::error::Result;
use crate::models::{Collection, Endpoint, Group};
use crate::walker::walk_with_ancestors;
use clap::ValueEnum;

/// Where the service group of an endpoint is named from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GroupNaming {
    /// The endpoint's own name (one service per endpoint name)
    #[default]
    Endpoint,
    /// The nearest enclosing folder, falling back to the endpoint's name
    Folder,
}

/// Lowercase and replace spaces with underscores.
///
/// No other characters are touched, so the result is not guaranteed to be a
/// valid identifier or file name.
pub fn slugify(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Step sentences without their Gherkin keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTexts {
    pub given: String,
    pub when: String,
    pub then: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// Raw endpoint name
    pub name: String,
    /// HTTP method as written in the collection
    pub method: String,
    /// Raw URL or the locale's placeholder
    pub url: String,
    pub slug: String,
    /// Display name of the service group
    pub group_name: String,
    pub group_slug: String,
    pub steps: StepTexts,
}

impl EndpointDescriptor {
    pub fn new(
        endpoint: &Endpoint,
        ancestors: &[&Group],
        locale: Locale,
        group_naming: GroupNaming,
    ) -> Self {
        let url = endpoint
            .url
            .clone()
            .unwrap_or_else(|| locale.missing_url().to_string());

        let group_name = match group_naming {
            GroupNaming::Endpoint => endpoint.name.clone(),
            GroupNaming::Folder => ancestors
                .iter()
                .rev()
                .find_map(|group| group.name.clone())
                .unwrap_or_else(|| endpoint.name.clone()),
        };

        let steps = StepTexts {
            given: locale.given_text(),
            when: locale.when_text(&endpoint.method, &url),
            then: locale.then_text(),
        };

        Self {
            name: endpoint.name.clone(),
            method: endpoint.method.clone(),
            slug: slugify(&endpoint.name),
            group_slug: slugify(&group_name),
            group_name,
            url,
            steps,
        }
    }

    pub fn feature_file_name(&self) -> String {
        format!("{}.feature", self.slug)
    }

    pub fn steps_file_name(&self) -> String {
        format!("{}_steps.py", self.slug)
    }

    /// Python module holding the service class, without extension
    pub fn service_module(&self) -> String {
        format!("{}_service", self.group_slug)
    }

    pub fn service_file_name(&self) -> String {
        format!("{}.py", self.service_module())
    }

    pub fn service_class(&self) -> String {
        format!("{}Service", capitalize(&self.group_slug))
    }
}

/// Build one descriptor per endpoint, in walk order.
pub fn describe_collection(
    collection: &Collection,
    options: &GenerateOptions,
) -> Result<Vec<EndpointDescriptor>> {
    let mut descriptors = Vec::with_capacity(collection.endpoint_count());

    walk_with_ancestors(&collection.items, |endpoint, ancestors| {
        let descriptor =
            EndpointDescriptor::new(endpoint, ancestors, options.locale, options.group_naming);
        tracing::debug!(
            endpoint = %descriptor.name,
            slug = %descriptor.slug,
            group = %descriptor.group_slug,
            "Described endpoint"
        );
        descriptors.push(descriptor);
        Ok(())
    })?;

    Ok(descriptors)
}
