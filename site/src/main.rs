//! News feed site
//!
//! Serves the news pages of a website. The news items live in a Google
//! Sheet; every page render loads the sheet through the gviz endpoint,
//! normalizes its rows and fills the page's list or detail target.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;

use adapters::GvizClient;
use app::FeedService;
use config::Config;
use domain::ports::SheetSource;

/// Application state shared across all handlers
pub struct AppState<S: SheetSource> {
    pub feed_service: Arc<FeedService<S>>,
    pub config: Config,
}

impl<S: SheetSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router over any sheet source
pub fn build_router<S: SheetSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::list_news::<S>))
        .route("/news.html", get(handlers::news_detail::<S>))
        .route("/api/news", get(handlers::list_news_json::<S>))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,news_feed_site=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting news feed site...");

    let config = Config::from_env();
    match config.news.sheet_id() {
        Some(sheet_id) => tracing::info!(
            sheet_id,
            sheet = %config.news.sheet_name,
            "News feed configured"
        ),
        None => tracing::info!("NEWS_SHEET_ID not set, news targets will stay empty"),
    }

    let source = Arc::new(
        GvizClient::new(config.gviz_base_url.clone()).context("Failed to build HTTP client")?,
    );
    let feed_service = Arc::new(FeedService::new(source, config.load_timeout));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(AppState {
        feed_service,
        config,
    });

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_test::TestServer;
    use tower::ServiceExt;

    use super::*;
    use crate::config::NewsConfig;
    use crate::domain::entities::FeedItem;
    use crate::test_utils::{test_news_config, titled_table, MockSheetSource};

    fn test_config(news: NewsConfig) -> Config {
        Config {
            news,
            gviz_base_url: "http://sheets.invalid".to_string(),
            load_timeout: Duration::from_millis(50),
            port: 0,
        }
    }

    fn test_server(source: MockSheetSource, news: NewsConfig) -> TestServer {
        let config = test_config(news);
        let feed_service = Arc::new(FeedService::new(Arc::new(source), config.load_timeout));
        TestServer::new(build_router(AppState {
            feed_service,
            config,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let config = test_config(NewsConfig::default());
        let feed_service = Arc::new(FeedService::new(
            Arc::new(MockSheetSource::new()),
            config.load_timeout,
        ));
        let app = build_router(AppState {
            feed_service,
            config,
        });

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn start_page_lists_news() {
        let server = test_server(
            MockSheetSource::new().with_table(titled_table(3)),
            test_news_config(),
        );

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<section id=\"news-list\"><article class=\"news-item\">"));
        assert_eq!(html.matches("<article class=\"news-item\">").count(), 3);
        assert!(html.contains("href=\"news.html?id=news-2\""));
    }

    #[tokio::test]
    async fn start_page_without_sheet_leaves_target_empty() {
        let source = MockSheetSource::new().with_table(titled_table(3));
        let calls = source.calls();
        let server = test_server(source, NewsConfig::default());

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(response
            .text()
            .contains("<section id=\"news-list\"></section>"));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn start_page_on_timeout_shows_empty_state() {
        let server = test_server(MockSheetSource::new().hanging(), test_news_config());

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(response
            .text()
            .contains("<p class=\"news-empty\">Inga nyheter just nu.</p>"));
    }

    #[tokio::test]
    async fn detail_page_renders_item() {
        let server = test_server(
            MockSheetSource::new().with_table(titled_table(3)),
            test_news_config(),
        );

        let response = server
            .get("/news.html")
            .add_query_param("id", "news-3")
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h1 class=\"news-detail-title\">News 3</h1>"));
        assert!(html.contains("<p class=\"news-detail-body\">Summary 3</p>"));
    }

    #[tokio::test]
    async fn detail_page_repeated_id_uses_first() {
        let server = test_server(
            MockSheetSource::new().with_table(titled_table(3)),
            test_news_config(),
        );

        let response = server.get("/news.html?id=news-1&id=news-2").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<h1 class=\"news-detail-title\">News 1</h1>"));
        assert!(!html.contains("News 2"));
    }

    #[tokio::test]
    async fn detail_page_without_id() {
        let server = test_server(
            MockSheetSource::new().with_table(titled_table(1)),
            test_news_config(),
        );

        let response = server.get("/news.html").await;

        assert!(response
            .text()
            .contains("Välj en nyhet från startsidan."));
    }

    #[tokio::test]
    async fn detail_page_on_failure_shows_not_found() {
        let server = test_server(MockSheetSource::new().failing(), test_news_config());

        let response = server
            .get("/news.html")
            .add_query_param("id", "news-1")
            .await;

        assert!(response
            .text()
            .contains("Vi hittar inte denna nyhet just nu."));
    }

    #[tokio::test]
    async fn json_endpoint_returns_items() {
        let news = NewsConfig {
            max_items: Some(2),
            ..test_news_config()
        };
        let server = test_server(MockSheetSource::new().with_table(titled_table(4)), news);

        let response = server.get("/api/news").await;

        response.assert_status_ok();
        let items: Vec<FeedItem> = response.json();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "News 1");
        assert_eq!(items[0].body, "Summary 1");
    }

    #[tokio::test]
    async fn json_endpoint_not_configured() {
        let server = test_server(MockSheetSource::new(), NewsConfig::default());

        let response = server.get("/api/news").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn json_endpoint_upstream_failure() {
        let server = test_server(MockSheetSource::new().failing(), test_news_config());

        let response = server.get("/api/news").await;

        response.assert_status(StatusCode::BAD_GATEWAY);
    }
}
