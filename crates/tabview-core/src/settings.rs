//! Per-column display settings and conditional highlighting, loaded from TOML.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;
use crate::error::{ConfigError, StorageError};
use crate::model::Column;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ColumnSettings {
    /// Render numeric cells as a bar scaled to the column's extent.
    pub show_mini_bar: bool,
    pub column_title: Option<String>,
    pub decimals: Option<usize>,
    /// Decimal separator followed by grouping separator, e.g. `".,"`.
    pub number_separators: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub currency: Option<String>,
    pub scale: Option<f64>,
    /// chrono format string for temporal values.
    pub date_style: Option<String>,
    pub view_as: Option<ViewAs>,
    /// URL template; `{{value}}` is replaced by the cell value.
    pub link_template: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewAs {
    Auto,
    Link,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HighlightRule {
    pub column: String,
    pub operator: String,
    pub value: Value,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "=" | "==" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Le),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Ge),
            _ => None,
        }
    }

    fn holds(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (Operator::Eq, Some(o)) => o == Ordering::Equal,
            (Operator::Ne, Some(o)) => o != Ordering::Equal,
            (Operator::Ne, None) => true,
            (Operator::Lt, Some(o)) => o == Ordering::Less,
            (Operator::Le, Some(o)) => o != Ordering::Greater,
            (Operator::Gt, Some(o)) => o == Ordering::Greater,
            (Operator::Ge, Some(o)) => o != Ordering::Less,
            (_, None) => false,
        }
    }
}

/// Column settings lookup plus highlight rules.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct TableSettings {
    pub columns: HashMap<String, ColumnSettings>,
    pub highlight: Vec<HighlightRule>,
    #[serde(skip)]
    fallback: ColumnSettings,
}

impl TableSettings {
    /// Load settings from `path`, or from the default location when `None`.
    /// A missing file yields empty settings.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let settings_path = match path {
            Some(p) => p,
            None => Self::settings_file_path()?,
        };

        if !settings_path.exists() {
            log::debug!("No settings at {}, using defaults", settings_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&settings_path).map_err(|source| StorageError::FileIo {
            path: settings_path.to_string_lossy().to_string(),
            source,
        })?;

        let settings = Self::from_toml(&content)?;
        log::info!(
            "Loaded settings for {} columns from {}",
            settings.columns.len(),
            settings_path.display()
        );
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: TableSettings =
            toml::from_str(content).map_err(|e| StorageError::SettingsParseError {
                message: e.to_string(),
            })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        for (i, rule) in self.highlight.iter().enumerate() {
            if Operator::parse(&rule.operator).is_none() {
                return Err(ConfigError::InvalidValue {
                    field: format!("highlight[{}].operator", i),
                    value: rule.operator.clone(),
                    reason: "use one of = != < <= > >=".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn settings_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(Self::settings_file_in(&config_dir))
    }

    fn settings_file_in(config_dir: &Path) -> PathBuf {
        config_dir.join("tabview").join("settings.toml")
    }

    /// Settings for `column`, keyed by column name. Unknown columns get defaults.
    pub fn column(&self, column: &Column) -> &ColumnSettings {
        self.columns.get(&column.name).unwrap_or(&self.fallback)
    }

    pub fn set_column(&mut self, name: &str, settings: ColumnSettings) {
        self.columns.insert(name.to_string(), settings);
    }

    /// First highlight rule matching `value` in `column_name`. Rules match on
    /// the value alone; the row index is not consulted.
    pub fn background_color(
        &self,
        value: &Value,
        _row_index: usize,
        column_name: &str,
    ) -> Option<&str> {
        if value.is_null() {
            return None;
        }
        self.highlight
            .iter()
            .filter(|rule| rule.column == column_name)
            .find(|rule| {
                Operator::parse(&rule.operator)
                    .is_some_and(|op| op.holds(compare_values(value, &rule.value)))
            })
            .map(|rule| rule.color.as_str())
    }
}

fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}
