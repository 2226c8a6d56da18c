//! Value formatting for table cells.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::model::Column;
use crate::schema;
use crate::settings::{ColumnSettings, ViewAs};

const DEFAULT_DATE_STYLE: &str = "%B %-d, %Y";
const DEFAULT_DATETIME_STYLE: &str = "%B %-d, %Y, %-I:%M %p";
const DEFAULT_MAX_FRACTION_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormatOptions {
    /// Allow links and digit grouping. Plain output is used for exports.
    pub rich: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormattedValue {
    Text(String),
    Link { text: String, url: String },
}

impl FormattedValue {
    pub fn text(&self) -> &str {
        match self {
            FormattedValue::Text(text) | FormattedValue::Link { text, .. } => text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, FormattedValue::Link { .. })
    }
}

pub fn format_value(
    value: &Value,
    column: &Column,
    settings: &ColumnSettings,
    options: FormatOptions,
) -> FormattedValue {
    let text = match value {
        Value::Null => "-".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => format_number(f, column, settings, options),
            None => n.to_string(),
        },
        Value::String(s) if schema::is_temporal(column) => format_temporal(s, settings),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    if options.rich && !value.is_null() {
        if let Some(url) = link_url(value, column, settings) {
            return FormattedValue::Link { text, url };
        }
    }
    FormattedValue::Text(text)
}

fn link_url(value: &Value, column: &Column, settings: &ColumnSettings) -> Option<String> {
    let raw = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if let Some(template) = &settings.link_template {
        return Some(template.replace("{{value}}", &raw));
    }
    let wants_link = settings.view_as == Some(ViewAs::Link) || schema::is_url(column);
    if wants_link && (raw.starts_with("http://") || raw.starts_with("https://")) {
        Some(raw)
    } else {
        None
    }
}

fn format_number(
    value: f64,
    column: &Column,
    settings: &ColumnSettings,
    options: FormatOptions,
) -> String {
    if schema::is_id(column) {
        return trim_fraction(&format!("{}", value));
    }

    let value = value * settings.scale.unwrap_or(1.0);
    let body = match settings.decimals {
        Some(d) => format!("{:.*}", d, value.abs()),
        None => trim_fraction(&format!("{:.*}", DEFAULT_MAX_FRACTION_DIGITS, value.abs())),
    };

    let mut separators = settings.number_separators.as_deref().unwrap_or(".,").chars();
    let decimal_sep = separators.next().unwrap_or('.');
    let group_sep = if options.rich { separators.next() } else { None };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };
    let mut out = String::new();
    if value < 0.0 && body.bytes().any(|b| b != b'0' && b != b'.') {
        out.push('-');
    }
    if let Some(symbol) = settings.currency.as_deref().map(currency_symbol) {
        out.push_str(&symbol);
    }
    if let Some(prefix) = &settings.prefix {
        out.push_str(prefix);
    }
    out.push_str(&group_digits(int_part, group_sep));
    if let Some(frac) = frac_part {
        out.push(decimal_sep);
        out.push_str(frac);
    }
    if let Some(suffix) = &settings.suffix {
        out.push_str(suffix);
    }
    out
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

fn group_digits(int_part: &str, separator: Option<char>) -> String {
    let Some(sep) = separator else {
        return int_part.to_string();
    };
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

fn currency_symbol(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        other => format!("{} ", other),
    }
}

fn format_temporal(s: &str, settings: &ColumnSettings) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        let style = settings.date_style.as_deref().unwrap_or(DEFAULT_DATETIME_STYLE);
        return dt.format(style).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        let style = settings.date_style.as_deref().unwrap_or(DEFAULT_DATETIME_STYLE);
        return dt.format(style).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let style = settings.date_style.as_deref().unwrap_or(DEFAULT_DATE_STYLE);
        return d.format(style).to_string();
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{TYPE_FK, TYPE_PK};
    use serde_json::json;

    const RICH: FormatOptions = FormatOptions { rich: true };
    const PLAIN: FormatOptions = FormatOptions { rich: false };

    fn fmt(value: Value, column: &Column, settings: &ColumnSettings) -> String {
        format_value(&value, column, settings, RICH).text().to_string()
    }

    #[test]
    fn test_number_defaults() {
        let col = Column::new("TOTAL", "type/Float");
        let s = ColumnSettings::default();
        assert_eq!(fmt(json!(1234567.891), &col, &s), "1,234,567.89");
        assert_eq!(fmt(json!(12.5), &col, &s), "12.5");
        assert_eq!(fmt(json!(-1000), &col, &s), "-1,000");
        assert_eq!(fmt(json!(0), &col, &s), "0");
    }

    #[test]
    fn test_plain_output_has_no_grouping() {
        let col = Column::new("TOTAL", "type/Float");
        let s = ColumnSettings::default();
        let out = format_value(&json!(1234567), &col, &s, PLAIN);
        assert_eq!(out, FormattedValue::Text("1234567".to_string()));
    }

    #[test]
    fn test_number_settings() {
        let col = Column::new("TOTAL", "type/Float");
        let s = ColumnSettings {
            decimals: Some(2),
            currency: Some("USD".to_string()),
            suffix: Some(" total".to_string()),
            ..Default::default()
        };
        assert_eq!(fmt(json!(1500), &col, &s), "$1,500.00 total");

        let euro = ColumnSettings {
            decimals: Some(1),
            number_separators: Some(",.".to_string()),
            ..Default::default()
        };
        assert_eq!(fmt(json!(1234.56), &col, &euro), "1.234,6");

        let percent = ColumnSettings {
            scale: Some(100.0),
            suffix: Some("%".to_string()),
            ..Default::default()
        };
        assert_eq!(fmt(json!(0.256), &col, &percent), "25.6%");
    }

    #[test]
    fn test_identifiers_are_not_grouped() {
        let pk = Column::new("ID", "type/BigInteger").with_semantic_type(TYPE_PK);
        let fk = Column::new("USER_ID", "type/Integer").with_semantic_type(TYPE_FK);
        let s = ColumnSettings::default();
        assert_eq!(fmt(json!(12345), &pk, &s), "12345");
        assert_eq!(fmt(json!(9876), &fk, &s), "9876");
    }

    #[test]
    fn test_temporal_values() {
        let col = Column::new("CREATED_AT", "type/DateTime");
        let s = ColumnSettings::default();
        assert_eq!(
            fmt(json!("2024-03-05T14:07:00Z"), &col, &s),
            "March 5, 2024, 2:07 PM"
        );
        let date = Column::new("DAY", "type/Date");
        assert_eq!(fmt(json!("2024-03-05"), &date, &s), "March 5, 2024");

        let styled = ColumnSettings {
            date_style: Some("%Y/%m/%d".to_string()),
            ..Default::default()
        };
        assert_eq!(fmt(json!("2024-03-05"), &date, &styled), "2024/03/05");
        assert_eq!(fmt(json!("not a date"), &date, &s), "not a date");
    }

    #[test]
    fn test_links() {
        let url_col = Column::new("SITE", "type/Text").with_semantic_type("type/URL");
        let s = ColumnSettings::default();
        let out = format_value(&json!("https://example.com"), &url_col, &s, RICH);
        assert!(out.is_link());

        // Plain output never links.
        let out = format_value(&json!("https://example.com"), &url_col, &s, PLAIN);
        assert!(!out.is_link());

        let text_col = Column::new("NAME", "type/Text");
        let out = format_value(&json!("https://example.com"), &text_col, &s, RICH);
        assert!(!out.is_link());

        let template = ColumnSettings {
            link_template: Some("https://crm.test/users/{{value}}".to_string()),
            ..Default::default()
        };
        let out = format_value(&json!(42), &Column::new("N", "type/Integer"), &template, RICH);
        assert_eq!(
            out,
            FormattedValue::Link {
                text: "42".to_string(),
                url: "https://crm.test/users/42".to_string()
            }
        );
    }

    #[test]
    fn test_other_values() {
        let col = Column::new("X", "type/*");
        let s = ColumnSettings::default();
        assert_eq!(fmt(json!(true), &col, &s), "true");
        assert_eq!(fmt(json!([1, 2]), &col, &s), "[1,2]");
        assert_eq!(fmt(Value::Null, &col, &s), "-");
    }
}
