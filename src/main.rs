#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::process;
    use std::sync::Arc;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;
    use wandb_online::app::*;
    use wandb_online::core::SiteConfig;
    use wandb_online::core::config::ServerConfig;
    use wandb_online::core::sitemap_api::{SitemapState, sitemap_router};

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    let site = Arc::new(SiteConfig::wandb_online());

    tracing::info!(
        site = site.name,
        sitemap_base = config.base_url(site.url),
        public_url_override = config.has_public_url(),
        "Config loaded"
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = match get_configuration(None) {
        Ok(conf) => conf,
        Err(err) => {
            tracing::error!(error = %err, "Failed to read Leptos configuration");
            process::exit(1);
        }
    };
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list({
        let site = site.clone();
        move || view! { <App site=site.clone()/> }
    });

    // Serves .br and .gz variants when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes_with_context(&leptos_options, routes, site_context(site.clone()), {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler_with_context(
            site_context(site.clone()),
            shell,
        ))
        .with_state(leptos_options);

    let sitemap_api = sitemap_router(SitemapState {
        site: site.clone(),
        config: Arc::new(config),
    });

    let app = Router::new()
        .merge(sitemap_api)
        .merge(leptos_router)
        // Brotli first, gzip as fallback; already compressed formats are skipped
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, %addr, "Failed to bind listener");
            process::exit(1);
        }
    };

    tracing::info!("listening on http://{}", &addr);

    if let Err(err) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!(error = %err, "Server error");
        process::exit(1);
    }
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point
}
