//! News handlers
//!
//! Page endpoints carrying the list and detail targets, plus a JSON view
//! of the normalized items.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::app::{PageTargets, RenderedPage};
use crate::domain::ports::SheetSource;
use crate::error::AppError;
use crate::feed::{detail_page, list_page};
use crate::AppState;

/// First `id` in the query string; later repeats are ignored
fn first_id(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
}

/// GET /
///
/// Start page with the news list.
pub async fn list_news<S: SheetSource + 'static>(State(state): State<AppState<S>>) -> Html<String> {
    let rendered = state
        .feed_service
        .render(&state.config.news, PageTargets::list(), None)
        .await
        .unwrap_or_default();

    Html(list_page(&fragment(rendered.list)))
}

/// GET /news.html?id=...
///
/// Detail page for a single item.
pub async fn news_detail<S: SheetSource + 'static>(
    State(state): State<AppState<S>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let RenderedPage { detail, .. } = state
        .feed_service
        .render(
            &state.config.news,
            PageTargets::detail(),
            first_id(&pairs),
        )
        .await
        .unwrap_or_default();

    Html(detail_page(&fragment(detail)))
}

/// GET /api/news
///
/// Normalized items as JSON, truncated to the configured maximum.
pub async fn list_news_json<S: SheetSource + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Response, AppError> {
    let items = state.feed_service.load_items(&state.config.news).await?;

    Ok((
        [(header::CACHE_CONTROL, "no-store")],
        Json(items),
    )
        .into_response())
}

/// Untouched targets stay empty
fn fragment(markup: Option<String>) -> String {
    markup.unwrap_or_default()
}
