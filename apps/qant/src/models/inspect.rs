//! Inspection schema: the subset of `quarto inspect` output qant reads.
//!
//! Expected shape:
//! `{ "files": { "<path>": { "metadata": { "categories": ["..."] } } } }`
//! where `metadata` and `categories` are optional (absent or `null`).
//! Unknown fields are ignored. File order follows the JSON key order.
//! Numeric and boolean categories are compared by their JSON spelling.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Files reported by the inspector, in output order.
pub struct InspectionResult {
    pub files: Vec<InspectedFile>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedFile {
    pub path: String,
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// Front matter fields relevant to category validation.
pub struct Metadata {
    #[serde(default, deserialize_with = "scalar_categories")]
    pub categories: Option<Vec<String>>,
}

/// Accept strings, numbers and booleans; `null` items are dropped.
fn scalar_categories<'de, D>(de: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(items) = Option::<Vec<Json>>::deserialize(de)? else {
        return Ok(None);
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Json::String(s) => out.push(s),
            Json::Number(n) => out.push(n.to_string()),
            Json::Bool(b) => out.push(b.to_string()),
            Json::Null => {}
            other => {
                return Err(D::Error::custom(format!(
                    "expected a scalar category, found {}",
                    other
                )))
            }
        }
    }
    Ok(Some(out))
}

#[derive(Deserialize)]
struct FileEntry {
    #[serde(default)]
    metadata: Option<Metadata>,
}

impl InspectedFile {
    /// Declared categories, empty when metadata or the field is absent.
    pub fn categories(&self) -> &[String] {
        self.metadata
            .as_ref()
            .and_then(|m| m.categories.as_deref())
            .unwrap_or(&[])
    }
}

impl InspectionResult {
    /// Parse inspector stdout. The error string describes what was wrong.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let root: Json =
            serde_json::from_str(text).map_err(|e| format!("output is not valid JSON: {}", e))?;
        let files = match root.get("files") {
            Some(Json::Object(map)) => map,
            Some(_) => return Err("'files' is not an object".to_string()),
            None => return Err("missing 'files' object".to_string()),
        };
        let mut out = Vec::with_capacity(files.len());
        for (path, entry) in files {
            let parsed = FileEntry::deserialize(entry)
                .map_err(|e| format!("invalid entry for '{}': {}", path, e))?;
            out.push(InspectedFile {
                path: path.clone(),
                metadata: parsed.metadata,
            });
        }
        Ok(Self { files: out })
    }
}

#[cfg(test)]
impl InspectedFile {
    /// File with metadata present; `None` leaves out the categories field.
    pub(crate) fn new(path: impl Into<String>, categories: Option<Vec<&str>>) -> Self {
        Self {
            path: path.into(),
            metadata: Some(Metadata {
                categories: categories.map(|c| c.into_iter().map(String::from).collect()),
            }),
        }
    }
}
