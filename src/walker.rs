//! Depth-first traversal of the collection tree
//!
//! Groups are never visited themselves; the handler only sees endpoints, in
//! pre-order, left to right, exactly as they appear in the source document.

use crate::error::Result;
use crate::models::{Endpoint, Group, Item};

/// Visit every endpoint under `items`.
///
/// The first error returned by `visit` stops the walk and is propagated.
pub fn walk<'a, F>(items: &'a [Item], mut visit: F) -> Result<()>
where
    F: FnMut(&'a Endpoint) -> Result<()>,
{
    walk_with_ancestors(items, |endpoint, _| visit(endpoint))
}

/// Like [`walk`], but the handler also receives the enclosing groups,
/// outermost first.
pub fn walk_with_ancestors<'a, F>(items: &'a [Item], mut visit: F) -> Result<()>
where
    F: FnMut(&'a Endpoint, &[&'a Group]) -> Result<()>,
{
    let mut ancestors = Vec::new();
    walk_inner(items, &mut ancestors, &mut visit)
}

fn walk_inner<'a, F>(items: &'a [Item], ancestors: &mut Vec<&'a Group>, visit: &mut F) -> Result<()>
where
    F: FnMut(&'a Endpoint, &[&'a Group]) -> Result<()>,
{
    for item in items {
        match item {
            Item::Endpoint(endpoint) => visit(endpoint, ancestors.as_slice())?,
            Item::Group(group) => {
                ancestors.push(group);
                let result = walk_inner(&group.items, ancestors, visit);
                ancestors.pop();
                result?;
            }
        }
    }
    Ok(())
}

/// Number of endpoints at any depth
pub fn count_endpoints(items: &[Item]) -> usize {
    items
        .iter()
        .map(|item| match item {
            Item::Endpoint(_) => 1,
            Item::Group(group) => count_endpoints(&group.items),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BddGenError;

    fn endpoint(name: &str) -> Item {
        Item::Endpoint(Endpoint::new(name, "GET", None))
    }

    fn group(name: &str, items: Vec<Item>) -> Item {
        Item::Group(Group::new(Some(name), items))
    }

    #[test]
    fn test_walk_is_preorder_left_to_right() {
        let items = vec![
            endpoint("A"),
            group("G", vec![endpoint("B"), endpoint("C")]),
            endpoint("D"),
        ];

        let mut visited = Vec::new();
        walk(&items, |e| {
            visited.push(e.name.clone());
            Ok(())
        })
        .unwrap();

        assert_eq!(visited, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_walk_skips_empty_groups() {
        let items = vec![group("empty", vec![]), group("outer", vec![group("inner", vec![])])];

        let mut count = 0;
        walk(&items, |_| {
            count += 1;
            Ok(())
        })
        .unwrap();

        assert_eq!(count, 0);
        assert_eq!(count_endpoints(&items), 0);
    }

    #[test]
    fn test_walk_with_ancestors_reports_group_chain() {
        let items = vec![
            endpoint("top"),
            group(
                "outer",
                vec![group("inner", vec![endpoint("deep")]), endpoint("shallow")],
            ),
        ];

        let mut seen = Vec::new();
        walk_with_ancestors(&items, |e, ancestors| {
            let chain: Vec<_> = ancestors
                .iter()
                .map(|g| g.name.clone().unwrap_or_default())
                .collect();
            seen.push((e.name.clone(), chain));
            Ok(())
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![
                ("top".to_string(), vec![]),
                (
                    "deep".to_string(),
                    vec!["outer".to_string(), "inner".to_string()]
                ),
                ("shallow".to_string(), vec!["outer".to_string()]),
            ]
        );
    }

    #[test]
    fn test_walk_stops_at_first_error() {
        let items = vec![
            endpoint("A"),
            group("G", vec![endpoint("B"), endpoint("C")]),
        ];

        let mut visited = Vec::new();
        let result = walk(&items, |e| {
            visited.push(e.name.clone());
            if e.name == "B" {
                return Err(BddGenError::Prompt("boom".to_string()));
            }
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(visited, vec!["A", "B"]);
    }

    #[test]
    fn test_count_endpoints_nested() {
        let items = vec![
            endpoint("A"),
            group("G", vec![endpoint("B"), group("H", vec![endpoint("C")])]),
        ];
        assert_eq!(count_endpoints(&items), 3);
    }
}
