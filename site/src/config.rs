use std::env;
use std::time::Duration;

/// Default tab name when none is configured
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Default bound on a single feed load
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 8000;

/// Default gviz endpoint prefix
pub const DEFAULT_GVIZ_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Settings for the news feed, passed explicitly to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsConfig {
    /// Spreadsheet id; the feature is off without one
    pub sheet_id: Option<String>,
    pub sheet_name: String,
    /// Upper bound on list cards; `None` renders every item
    pub max_items: Option<usize>,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            sheet_id: None,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            max_items: None,
        }
    }
}

impl NewsConfig {
    /// The sheet id, if set to something other than whitespace
    pub fn sheet_id(&self) -> Option<&str> {
        self.sheet_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[derive(Clone)]
pub struct Config {
    pub news: NewsConfig,
    pub gviz_base_url: String,
    pub load_timeout: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            news: NewsConfig {
                sheet_id: env::var("NEWS_SHEET_ID").ok(),
                sheet_name: env::var("NEWS_SHEET_NAME")
                    .ok()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
                max_items: env::var("NEWS_MAX_ITEMS")
                    .ok()
                    .and_then(|v| parse_max_items(&v)),
            },
            gviz_base_url: env::var("GVIZ_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GVIZ_BASE_URL.to_string()),
            load_timeout: Duration::from_millis(
                env::var("NEWS_LOAD_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_LOAD_TIMEOUT_MS),
            ),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}

/// Non-numeric values mean "no limit"
fn parse_max_items(value: &str) -> Option<usize> {
    value.trim().parse().ok()
}
