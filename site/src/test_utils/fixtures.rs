//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::config::NewsConfig;
use crate::domain::entities::FeedItem;
use crate::domain::ports::{GvizCell, GvizColumn, GvizRow, GvizTable};

/// News config pointing at a test sheet
pub fn test_news_config() -> NewsConfig {
    NewsConfig {
        sheet_id: Some("test-sheet".to_string()),
        ..Default::default()
    }
}

/// Create a feed item with only a title
pub fn test_item(title: &str) -> FeedItem {
    FeedItem {
        title: title.to_string(),
        ..Default::default()
    }
}

/// Items titled "News 1" through "News n", each with a summary
pub fn test_items(n: usize) -> Vec<FeedItem> {
    (1..=n)
        .map(|i| FeedItem {
            summary: format!("Summary {}", i),
            ..test_item(&format!("News {}", i))
        })
        .collect()
}

/// Column with a label
pub fn column(label: &str) -> GvizColumn {
    GvizColumn {
        label: Some(label.to_string()),
    }
}

/// String cell without a formatted value
pub fn cell(value: &str) -> Option<GvizCell> {
    Some(GvizCell {
        v: serde_json::Value::String(value.to_string()),
        f: None,
    })
}

pub fn row(cells: Vec<Option<GvizCell>>) -> GvizRow {
    GvizRow { c: cells }
}

pub fn table(cols: Vec<GvizColumn>, rows: Vec<GvizRow>) -> GvizTable {
    GvizTable { cols, rows }
}

/// Table with Rubrik/Sammanfattning columns and rows "News 1".."News n"
pub fn titled_table(n: usize) -> GvizTable {
    table(
        vec![column("Rubrik"), column("Sammanfattning")],
        (1..=n)
            .map(|i| {
                row(vec![
                    cell(&format!("News {}", i)),
                    cell(&format!("Summary {}", i)),
                ])
            })
            .collect(),
    )
}
