//! Table normalization
//!
//! Turns a gviz table into feed items: resolves the header row, maps
//! localized column names onto canonical fields and drops untitled rows.

use std::collections::HashMap;

use crate::domain::entities::FeedItem;
use crate::domain::ports::{GvizCell, GvizRow, GvizTable};

/// Header aliases, keyed by normalized label
const KEY_ALIASES: &[(&str, &str)] = &[
    ("id", "id"),
    ("slug", "id"),
    ("identifier", "id"),
    ("date", "date"),
    ("datum", "date"),
    ("title", "title"),
    ("rubrik", "title"),
    ("titel", "title"),
    ("summary", "summary"),
    ("sammanfattning", "summary"),
    ("sammandrag", "summary"),
    ("body", "body"),
    ("text", "body"),
    ("innehall", "body"),
    ("beskrivning", "body"),
    ("link", "link"),
    ("lank", "link"),
    ("url", "link"),
];

/// Normalize a table into feed items, keeping row order.
pub fn table_to_items(table: &GvizTable) -> Vec<FeedItem> {
    let labelled: Vec<String> = table
        .cols
        .iter()
        .map(|col| normalize_key(col.label.as_deref().unwrap_or_default()))
        .collect();

    let (keys, rows): (Vec<String>, &[GvizRow]) = match table.rows.split_first() {
        Some((header, rest)) if labelled.iter().all(String::is_empty) => {
            let keys = header
                .c
                .iter()
                .map(|cell| normalize_key(&cell_value(cell.as_ref())))
                .collect();
            (keys, rest)
        }
        _ => (labelled, table.rows.as_slice()),
    };

    rows.iter()
        .map(|row| row_to_item(&keys, row))
        .filter(|item| !item.title.is_empty())
        .collect()
}

fn row_to_item(keys: &[String], row: &GvizRow) -> FeedItem {
    let mut fields: HashMap<&str, String> = HashMap::new();

    for (index, key) in keys.iter().enumerate() {
        if key.is_empty() {
            continue;
        }
        fields.insert(canonical_key(key), cell_value(row.cell(index)));
    }

    let mut take = |name: &str| fields.remove(name).unwrap_or_default();
    let id = take("id");
    let date = take("date");
    let title = take("title");
    let summary = take("summary");
    let body = take("body");
    let link = take("link");

    FeedItem {
        id,
        date,
        title,
        body: if body.is_empty() { summary.clone() } else { body },
        summary,
        link,
    }
}

/// Lowercase, trim, drop all whitespace and fold Swedish vowels.
pub fn normalize_key(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'å' | 'ä' => 'a',
            'ö' => 'o',
            other => other,
        })
        .collect()
}

/// Map a normalized key onto its canonical field name; unknown keys pass through.
pub fn canonical_key(key: &str) -> &str {
    KEY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(key)
}

/// Read a cell: formatted text first, then the raw value.
pub fn cell_value(cell: Option<&GvizCell>) -> String {
    let Some(cell) = cell else {
        return String::new();
    };

    if let Some(formatted) = cell.f.as_deref().map(str::trim) {
        if !formatted.is_empty() {
            return formatted.to_string();
        }
    }

    match &cell.v {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
