//! Query result models.
//!
//! These mirror the JSON a BI backend returns for a card query:
//! `{ "data": { "cols": [...], "rows": [...] }, "row_count": ..., "json_query": ... }`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::error::{DataError, StorageError};

/// Query response envelope.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Dataset {
    pub data: ResultSet,
    #[serde(default)]
    pub row_count: Option<usize>,
    /// The query that produced this result, as echoed back by the backend.
    #[serde(default)]
    pub json_query: Option<DatasetQuery>,
}

/// Column/row data returned by a query.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ResultSet {
    pub cols: Vec<Column>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "default_base_type")]
    pub base_type: String,
    #[serde(default, alias = "special_type")]
    pub semantic_type: Option<String>,
    #[serde(default)]
    pub fk_target_field_id: Option<u64>,
}

fn default_base_type() -> String {
    "type/*".to_string()
}

/// Saved question the result belongs to. Only the parts the table needs.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Card {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dataset_query: DatasetQuery,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DatasetQuery {
    #[serde(default)]
    pub query: Option<StructuredQuery>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StructuredQuery {
    #[serde(default)]
    pub limit: Option<u64>,
}

impl Column {
    pub fn new(name: &str, base_type: &str) -> Self {
        Self {
            name: name.to_string(),
            display_name: name.to_string(),
            base_type: base_type.to_string(),
            semantic_type: None,
            fk_target_field_id: None,
        }
    }

    pub fn with_semantic_type(mut self, semantic_type: &str) -> Self {
        self.semantic_type = Some(semantic_type.to_string());
        self
    }

    /// Display name, falling back to the raw name when the backend sent none.
    pub fn title(&self) -> &str {
        if self.display_name.is_empty() {
            &self.name
        } else {
            &self.display_name
        }
    }
}

impl ResultSet {
    pub fn new(cols: Vec<Column>, rows: Vec<Vec<Value>>) -> Self {
        Self { cols, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `(row, column)`. Ragged or out-of-range positions read as null.
    pub fn cell(&self, row: usize, column: usize) -> &Value {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&Value::Null)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.cols
            .iter()
            .position(|c| c.name == name || c.display_name == name)
    }
}

impl Dataset {
    pub fn new(data: ResultSet) -> Self {
        Self {
            data,
            row_count: None,
            json_query: None,
        }
    }

    /// Load a query response from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let display_path = path.to_string_lossy().to_string();
        if !path.exists() {
            return Err(DataError::FileNotFound { path: display_path }.into());
        }
        let content = fs::read_to_string(path).map_err(|source| StorageError::FileIo {
            path: display_path.clone(),
            source,
        })?;
        let dataset = Self::from_json(&content).map_err(|e| DataError::InvalidJson {
            path: display_path,
            message: e.to_string(),
        })?;
        log::info!(
            "Loaded {} rows x {} columns from {}",
            dataset.data.row_count(),
            dataset.data.cols.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse a query response. A bare `{ "cols", "rows" }` object is accepted too.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        if value.get("data").is_some() {
            serde_json::from_value(value)
        } else {
            serde_json::from_value(value).map(Self::new)
        }
    }

    /// Card describing the query that produced this result.
    pub fn card(&self) -> Card {
        Card {
            name: None,
            dataset_query: self.json_query.clone().unwrap_or_default(),
        }
    }
}

impl Card {
    pub fn with_limit(limit: Option<u64>) -> Self {
        Self {
            name: None,
            dataset_query: DatasetQuery {
                query: Some(StructuredQuery { limit }),
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Explicit row limit requested by the query, if any.
    pub fn row_limit(&self) -> Option<u64> {
        self.dataset_query.query.as_ref().and_then(|q| q.limit)
    }
}
