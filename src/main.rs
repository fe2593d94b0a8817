#![recursion_limit = "4096"]
#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use drawtab::app::*;
    use drawtab::core::auth::{AuthApiState, auth_api_router};
    use drawtab::core::config::PlatformConfig;
    use drawtab::core::platform::Platform;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use tracing_subscriber::EnvFilter;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load platform config from environment variables
    let config = PlatformConfig::from_env();

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: endpoint={}, project={}, database={}, api_key={}",
        config.endpoint,
        config.has_project(),
        config.has_database(),
        config.has_api_key()
    );
    if !config.has_api_key() {
        tracing::warn!("APPWRITE_API_KEY is not set; logins will not persist across requests");
    }

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).expect("invalid Leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let secure_cookies = config.app_url.starts_with("https://");
    let auth_state = AuthApiState {
        platform: Platform::new(config),
        secure_cookies,
    };

    // Create ServeDir for pkg with pre-compressed file support
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // Build the main application router with compression
    let app = Router::new()
        // Auth API proxied to the platform account service
        .merge(auth_api_router(auth_state))
        // Leptos routes (nested to avoid state conflicts)
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
