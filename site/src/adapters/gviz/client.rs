//! Google Sheets gviz client implementation

use std::sync::OnceLock;

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use reqwest::Client;
use urlencoding::encode;

use crate::domain::ports::{GvizResponse, SheetRequest, SheetSource};
use crate::error::SourceError;

/// Name of the hook the gviz payload calls with its response
pub const RESPONSE_HOOK: &str = "google.visualization.Query.setResponse";

/// Longest error body kept on a status error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Implementation of the sheet source over the gviz `out:json` endpoint
pub struct GvizClient {
    http: Client,
    base_url: String,
}

impl GvizClient {
    pub fn new(base_url: String) -> Result<Self, SourceError> {
        let http = Client::builder()
            .user_agent(concat!("news-feed-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the query URL with a cache-defeating `cb` parameter.
    fn sheet_url(&self, request: &SheetRequest, cache_buster: i64) -> String {
        format!(
            "{}/{}/gviz/tq?tqx=out:json&sheet={}&cb={}",
            self.base_url,
            request.sheet_id,
            encode(&request.sheet_name),
            cache_buster
        )
    }
}

#[async_trait]
impl SheetSource for GvizClient {
    async fn load(&self, request: &SheetRequest) -> Result<GvizResponse, SourceError> {
        let url = self.sheet_url(request, Utc::now().timestamp_millis());
        tracing::debug!(sheet_id = %request.sheet_id, sheet = %request.sheet_name, "Loading sheet");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        parse_payload(&body)
    }
}

/// Truncate a string with ellipsis, on a char boundary
fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}

fn hook_call() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)google\.visualization\.Query\.setResponse\s*\((.*)\)\s*;?\s*$")
            .expect("valid hook regex")
    })
}

/// Extract the argument of the `setResponse(...)` call and decode it.
pub fn parse_payload(body: &str) -> Result<GvizResponse, SourceError> {
    let captures = hook_call()
        .captures(body)
        .ok_or_else(|| SourceError::Payload(format!("missing {} call", RESPONSE_HOOK)))?;

    let json = captures.get(1).map(|m| m.as_str()).unwrap_or_default();

    serde_json::from_str(json).map_err(|e| SourceError::Payload(e.to_string()))
}
