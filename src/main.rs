#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use landing_motion::app::*;
    use landing_motion::core::config::Config;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Load application config from environment variables
    let (config, config_error) = match Config::from_env() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    if let Some(err) = config_error {
        tracing::warn!("Invalid configuration, using defaults: {}", err);
    }
    tracing::info!(
        "Config loaded: log_level={}, precompressed_assets={}",
        config.log_level,
        config.precompressed_assets
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let pkg_dir = format!("{}/pkg", leptos_options.site_root);
    let pkg_service = if config.precompressed_assets {
        ServeDir::new(pkg_dir).precompressed_br().precompressed_gzip()
    } else {
        ServeDir::new(pkg_dir)
    };

    let app = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
        // Compresses responses > 1KB, skips already compressed formats
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
