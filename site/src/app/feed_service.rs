//! Feed service
//!
//! Loads the configured sheet once per page render and turns the outcome
//! into markup for whichever targets the page carries.

use std::sync::Arc;
use std::time::Duration;

use crate::app::normalize::table_to_items;
use crate::config::NewsConfig;
use crate::domain::entities::FeedItem;
use crate::domain::ports::{GvizResponse, GvizTable, SheetRequest, SheetSource};
use crate::error::{AppError, LoadFailure};
use crate::feed::renderer::{
    render_detail, render_empty, render_list, DETAIL_NOT_FOUND_MESSAGE, LIST_EMPTY_MESSAGE,
};

/// Which targets a page carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageTargets {
    pub list: bool,
    pub detail: bool,
}

impl PageTargets {
    pub fn list() -> Self {
        Self {
            list: true,
            detail: false,
        }
    }

    pub fn detail() -> Self {
        Self {
            list: false,
            detail: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.list && !self.detail
    }
}

/// Replacement markup per target; `None` leaves the target untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    pub list: Option<String>,
    pub detail: Option<String>,
}

/// Result of one timed load
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(GvizTable),
    Failed(LoadFailure),
}

/// Build the sheet request, or `None` when no sheet is configured
pub fn sheet_request(config: &NewsConfig) -> Option<SheetRequest> {
    config.sheet_id().map(|sheet_id| SheetRequest {
        sheet_id: sheet_id.to_string(),
        sheet_name: config.sheet_name.clone(),
    })
}

/// Service for loading and rendering the news feed
pub struct FeedService<S>
where
    S: SheetSource,
{
    source: Arc<S>,
    timeout: Duration,
}

impl<S> FeedService<S>
where
    S: SheetSource,
{
    pub fn new(source: Arc<S>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// Load a sheet, producing exactly one outcome.
    ///
    /// The load future is dropped when the timer fires, cancelling the request.
    pub async fn load(&self, request: &SheetRequest) -> LoadOutcome {
        match tokio::time::timeout(self.timeout, self.source.load(request)).await {
            Ok(Ok(response)) => LoadOutcome::Loaded(table_of(response)),
            Ok(Err(e)) => {
                tracing::warn!(sheet_id = %request.sheet_id, "Sheet load failed: {}", e);
                LoadOutcome::Failed(LoadFailure::Source(e))
            }
            Err(_) => {
                tracing::warn!(
                    sheet_id = %request.sheet_id,
                    "Sheet load timed out after {:?}",
                    self.timeout
                );
                LoadOutcome::Failed(LoadFailure::Timeout(self.timeout))
            }
        }
    }

    /// Load and normalize items, truncated to `max_items`
    pub async fn load_items(&self, config: &NewsConfig) -> Result<Vec<FeedItem>, AppError> {
        let request = sheet_request(config).ok_or(AppError::NotConfigured)?;

        match self.load(&request).await {
            LoadOutcome::Loaded(table) => {
                let mut items = table_to_items(&table);
                if let Some(max) = config.max_items {
                    items.truncate(max);
                }
                Ok(items)
            }
            LoadOutcome::Failed(failure) => Err(failure.into()),
        }
    }

    /// Render the targets a page carries.
    ///
    /// Returns `None` without loading anything when the page has no target
    /// or no sheet is configured.
    pub async fn render(
        &self,
        config: &NewsConfig,
        targets: PageTargets,
        id: Option<&str>,
    ) -> Option<RenderedPage> {
        if targets.is_empty() {
            tracing::debug!("No news target on page, skipping");
            return None;
        }
        let Some(request) = sheet_request(config) else {
            tracing::debug!("No sheet configured, skipping");
            return None;
        };

        let page = match self.load(&request).await {
            LoadOutcome::Loaded(table) => {
                let items = table_to_items(&table);
                tracing::debug!(count = items.len(), "Rendering news items");

                if targets.detail {
                    RenderedPage {
                        list: None,
                        detail: Some(render_detail(&items, id)),
                    }
                } else {
                    RenderedPage {
                        list: Some(render_list(&items, config.max_items)),
                        detail: None,
                    }
                }
            }
            LoadOutcome::Failed(_) => RenderedPage {
                list: targets.list.then(|| render_empty(LIST_EMPTY_MESSAGE)),
                detail: targets
                    .detail
                    .then(|| render_empty(DETAIL_NOT_FOUND_MESSAGE)),
            },
        };

        Some(page)
    }
}

/// Table of a response; gviz error statuses yield an empty table
fn table_of(response: GvizResponse) -> GvizTable {
    if response.status.as_deref() == Some("error") {
        let reasons: Vec<String> = response
            .errors
            .iter()
            .map(|e| {
                e.detailed_message
                    .clone()
                    .or_else(|| e.message.clone())
                    .or_else(|| e.reason.clone())
                    .unwrap_or_default()
            })
            .collect();
        tracing::warn!("Sheet returned error status: {}", reasons.join("; "));
    }

    response.table.unwrap_or_default()
}
