use serde::Deserialize;

/// Postman collection root object as it appears on disk
/// https://schema.postman.com/collection/json/v2.1.0/draft-07/docs/index.html
#[derive(Debug, Clone, Deserialize)]
pub struct RawCollection {
    /// Collection metadata
    #[serde(default)]
    pub info: Option<RawInfo>,

    /// Top-level folders and requests
    pub item: Vec<RawItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawInfo {
    /// Display name of the collection
    #[serde(default)]
    pub name: Option<String>,
}

/// A node of the collection tree before it is classified
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub name: Option<String>,

    /// Nested nodes (folders only)
    #[serde(default)]
    pub item: Option<Vec<RawItem>>,

    /// Request definition (requests only)
    #[serde(default)]
    pub request: Option<RawRequest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRequest {
    Detailed {
        #[serde(default)]
        method: Option<String>,
        #[serde(default)]
        url: Option<RawUrl>,
    },
    /// Shorthand request given as a bare URL string, which carries no method
    Shorthand(String),
}

impl RawRequest {
    pub fn method(&self) -> Option<&str> {
        match self {
            RawRequest::Detailed { method, .. } => method.as_deref(),
            RawRequest::Shorthand(_) => None,
        }
    }

    pub fn raw_url(&self) -> Option<&str> {
        match self {
            RawRequest::Detailed { url: Some(url), .. } => url.raw(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawUrl {
    Plain(String),
    Structured {
        #[serde(default)]
        raw: Option<String>,
    },
}

impl RawUrl {
    pub fn raw(&self) -> Option<&str> {
        match self {
            RawUrl::Plain(raw) => Some(raw),
            RawUrl::Structured { raw } => raw.as_deref(),
        }
    }
}

/// Parsed collection, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub name: Option<String>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Group(Group),
    Endpoint(Endpoint),
}

/// Folder node: only holds children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: Option<String>,
    pub items: Vec<Item>,
}

/// Request node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Display name, also the basis for every generated identifier
    pub name: String,

    /// HTTP verb as written in the collection
    pub method: String,

    /// Raw URL, if the collection has one
    pub url: Option<String>,
}

impl Endpoint {
    pub fn new(name: impl Into<String>, method: impl Into<String>, url: Option<&str>) -> Self {
        Self {
            name: name.into(),
            method: method.into(),
            url: url.map(str::to_string),
        }
    }
}

impl Group {
    pub fn new(name: Option<&str>, items: Vec<Item>) -> Self {
        Self {
            name: name.map(str::to_string),
            items,
        }
    }
}

impl Collection {
    /// Classify the raw tree into groups and endpoints.
    ///
    /// A node whose request carries a method is an endpoint, even if it also
    /// has children. Otherwise a node with an `item` array is a group. Nodes
    /// that are neither are dropped.
    pub fn from_raw(raw: RawCollection) -> Result<Self, String> {
        Ok(Self {
            name: raw.info.and_then(|info| info.name),
            items: classify_items(raw.item)?,
        })
    }

    pub fn endpoint_count(&self) -> usize {
        crate::walker::count_endpoints(&self.items)
    }
}

fn classify_items(raw_items: Vec<RawItem>) -> Result<Vec<Item>, String> {
    let mut items = Vec::with_capacity(raw_items.len());

    for raw in raw_items {
        let method = raw
            .request
            .as_ref()
            .and_then(|r| r.method())
            .map(str::to_string);

        if let Some(method) = method {
            let name = raw
                .name
                .ok_or_else(|| format!("request with method {} has no name", method))?;
            let url = raw.request.as_ref().and_then(|r| r.raw_url());
            items.push(Item::Endpoint(Endpoint::new(name, method, url)));
        } else if let Some(children) = raw.item {
            items.push(Item::Group(Group {
                name: raw.name,
                items: classify_items(children)?,
            }));
        } else {
            tracing::debug!(
                name = raw.name.as_deref().unwrap_or("<unnamed>"),
                "Skipping node that is neither a folder nor a request with a method"
            );
        }
    }

    Ok(items)
}
