//! HTTP endpoint for the XML sitemap
//!
//! - GET /sitemap.xml - sitemaps.org urlset for every indexable page

use std::sync::Arc;

use axum::{Router, extract::State, http::header, response::IntoResponse, routing::get};

use super::config::ServerConfig;
use super::site::SiteConfig;
use super::sitemap::{render_sitemap_xml, sitemap_entries};

/// Shared state for the sitemap handler
#[derive(Clone)]
pub struct SitemapState {
    pub site: Arc<SiteConfig>,
    pub config: Arc<ServerConfig>,
}

/// Create the sitemap router
pub fn sitemap_router(state: SitemapState) -> Router {
    Router::new()
        .route("/sitemap.xml", get(sitemap_xml))
        .with_state(state)
}

/// GET /sitemap.xml
async fn sitemap_xml(State(state): State<SitemapState>) -> impl IntoResponse {
    let base_url = state.config.base_url(state.site.url);
    let today = chrono::Utc::now().date_naive();
    let xml = render_sitemap_xml(base_url, today, sitemap_entries());

    ([(header::CONTENT_TYPE, "application/xml")], xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn create_test_app(public_url: Option<&str>) -> Router {
        sitemap_router(SitemapState {
            site: Arc::new(SiteConfig::wandb_online()),
            config: Arc::new(ServerConfig::from_vars(public_url.map(str::to_string), None)),
        })
    }

    async fn fetch(app: Router) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/sitemap.xml")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_sitemap_uses_site_url() {
        let (status, content_type, body) = fetch(create_test_app(None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/xml"));
        assert!(body.starts_with("<?xml"));
        for entry in sitemap_entries() {
            let loc = format!("<loc>https://wandb.online{}</loc>", entry.path);
            assert!(body.contains(&loc), "missing {}", loc);
        }
    }

    #[tokio::test]
    async fn test_sitemap_honours_public_url() {
        let (_, _, body) = fetch(create_test_app(Some("http://localhost:3000/"))).await;

        assert!(body.contains("<loc>http://localhost:3000/compare</loc>"));
        assert!(!body.contains("https://wandb.online"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let response = create_test_app(None)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/sitemap.txt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
