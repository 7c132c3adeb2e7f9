use crate::generators::{EndpointDescriptor, GenerateOptions};
use crate::models::{Collection, Group, Item};
use crate::{Result, loader};
use colored::*;
use std::path::Path;

/// One row of the collection tree, in walk order
#[derive(Debug, Clone)]
pub enum ListEntry {
    Folder {
        depth: usize,
        name: Option<String>,
    },
    Endpoint {
        depth: usize,
        descriptor: EndpointDescriptor,
    },
}

pub fn execute_list(collection_path: &Path, options: &GenerateOptions) -> Result<Vec<ListEntry>> {
    println!("{}", "Loading collection...".bright_blue());
    println!("  Path: {}", collection_path.display());

    let collection = loader::load_collection(collection_path)?;

    println!("\n{}", "✓ Collection loaded successfully".green());
    if let Some(ref name) = collection.name {
        println!("  Name: {}", name.bold());
    }
    println!();

    let entries = list_entries(&collection, options);
    if entries.is_empty() {
        println!("{}", "No requests found".yellow());
        return Ok(entries);
    }

    for entry in &entries {
        print_entry(entry);
    }

    println!();
    println!(
        "{}",
        format!("Endpoints: {}", collection.endpoint_count()).bold()
    );

    Ok(entries)
}

/// Flatten the collection tree into folder and endpoint rows
pub fn list_entries(collection: &Collection, options: &GenerateOptions) -> Vec<ListEntry> {
    let mut entries = Vec::new();
    let mut ancestors = Vec::new();
    collect_entries(&collection.items, &mut ancestors, options, &mut entries);
    entries
}

fn collect_entries<'a>(
    items: &'a [Item],
    ancestors: &mut Vec<&'a Group>,
    options: &GenerateOptions,
    entries: &mut Vec<ListEntry>,
) {
    let depth = ancestors.len();

    for item in items {
        match item {
            Item::Group(group) => {
                entries.push(ListEntry::Folder {
                    depth,
                    name: group.name.clone(),
                });
                ancestors.push(group);
                collect_entries(&group.items, ancestors, options, entries);
                ancestors.pop();
            }
            Item::Endpoint(endpoint) => {
                let descriptor = EndpointDescriptor::new(
                    endpoint,
                    ancestors.as_slice(),
                    options.locale,
                    options.group_naming,
                );
                entries.push(ListEntry::Endpoint { depth, descriptor });
            }
        }
    }
}

fn print_entry(entry: &ListEntry) {
    match entry {
        ListEntry::Folder { depth, name } => {
            println!(
                "{}{} {}",
                "  ".repeat(depth + 1),
                "Folder:".bright_cyan(),
                name.as_deref().unwrap_or("<unnamed>").bold()
            );
        }
        ListEntry::Endpoint { depth, descriptor } => {
            let indent = "  ".repeat(depth + 1);
            println!(
                "{}{} {} {}",
                indent,
                descriptor.method.bright_yellow(),
                descriptor.name.cyan(),
                descriptor.url
            );
            println!(
                "{}  -> {} / {}.{}",
                indent,
                descriptor.feature_file_name(),
                descriptor.service_class(),
                descriptor.slug
            );
        }
    }
}
