use postman_bdd::BddGenError;
use postman_bdd::commands::{ListEntry, execute_list};
use postman_bdd::generators::{GenerateOptions, GroupNaming, Locale};
use std::path::Path;

fn outline(entries: &[ListEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| match entry {
            ListEntry::Folder { depth, name } => {
                format!("{}{}/", "  ".repeat(*depth), name.as_deref().unwrap_or("?"))
            }
            ListEntry::Endpoint { depth, descriptor } => format!(
                "{}{} {} -> {}.{}",
                "  ".repeat(*depth),
                descriptor.method,
                descriptor.name,
                descriptor.service_class(),
                descriptor.slug
            ),
        })
        .collect()
}

#[test]
fn lists_nested_collection_in_walk_order() {
    let entries = execute_list(
        Path::new("tests/fixtures/nested.postman_collection.json"),
        &GenerateOptions::default(),
    )
    .unwrap();

    assert_eq!(
        outline(&entries),
        vec![
            "GET List Pets -> List_petsService.list_pets",
            "pets/",
            "  POST Create Pet -> Create_petService.create_pet",
            "  admin/",
            "    DELETE Purge Pets -> Purge_petsService.purge_pets",
            "  empty folder/",
            "GET Health -> HealthService.health",
        ]
    );
}

#[test]
fn folder_naming_and_locale_flow_into_listed_descriptors() {
    let options = GenerateOptions {
        locale: Locale::En,
        group_naming: GroupNaming::Folder,
        ..Default::default()
    };
    let entries = execute_list(
        Path::new("tests/fixtures/nested.postman_collection.json"),
        &options,
    )
    .unwrap();

    let purge = entries
        .iter()
        .find_map(|entry| match entry {
            ListEntry::Endpoint { descriptor, .. } if descriptor.slug == "purge_pets" => {
                Some(descriptor)
            }
            _ => None,
        })
        .unwrap();
    assert_eq!(purge.service_class(), "AdminService");
    assert_eq!(purge.url, "URL not specified");
}

#[test]
fn listing_a_missing_collection_fails() {
    let result = execute_list(
        Path::new("tests/fixtures/does_not_exist.postman_collection.json"),
        &GenerateOptions::default(),
    );
    assert!(matches!(result, Err(BddGenError::NotFound(_))));
}
