//! Sheet source port trait
//!
//! Defines the interface for loading a table from a spreadsheet feed,
//! plus the wire shape of the gviz response.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SourceError;

/// Helper to deserialize anything unexpected (null, wrong type) as default
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Per-element variant: a malformed entry becomes its default in place,
/// keeping the other entries and their positions
fn deserialize_lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(entries) = value else {
        return Ok(Vec::new());
    };

    Ok(entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).unwrap_or_default())
        .collect())
}

/// Everything needed to address one sheet tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRequest {
    pub sheet_id: String,
    pub sheet_name: String,
}

/// Top-level gviz response (the argument passed to `setResponse`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GvizResponse {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub errors: Vec<GvizIssue>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub table: Option<GvizTable>,
}

/// Error or warning entry reported by gviz
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GvizIssue {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub detailed_message: Option<String>,
}

/// Gviz data table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GvizTable {
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub cols: Vec<GvizColumn>,
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub rows: Vec<GvizRow>,
}

/// Column descriptor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GvizColumn {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub label: Option<String>,
}

/// Row descriptor; missing cells are `None`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GvizRow {
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub c: Vec<Option<GvizCell>>,
}

/// Single cell: raw value `v` and optional formatted value `f`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GvizCell {
    #[serde(default)]
    pub v: serde_json::Value,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub f: Option<String>,
}

impl GvizRow {
    pub fn cell(&self, index: usize) -> Option<&GvizCell> {
        self.c.get(index).and_then(|cell| cell.as_ref())
    }
}

/// Port for loading sheet data
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Load one tab of a sheet. Each call issues exactly one request.
    async fn load(&self, request: &SheetRequest) -> Result<GvizResponse, SourceError>;
}
