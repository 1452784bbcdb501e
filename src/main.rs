mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::auth::{
    routes as auth_routes, AuthService, InMemoryUserRepository, PgUserRepository, TokenService,
    UserRepository,
};
use crate::features::citizen::{routes as citizen_routes, CitizenState};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::portal::{routes as portal_routes, PortalState};
use crate::features::reports::{
    routes as reports_routes, InMemoryReportRepository, PgReportRepository, RandomSeverity,
    ReportRepository, ReportService,
};
use crate::modules::storage::LocalStorage;
use crate::shared::constants::ASSETS_DIR;
use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Postgres when configured, otherwise the in-process store
    let (report_repository, user_repository): (
        Arc<dyn ReportRepository>,
        Arc<dyn UserRepository>,
    ) = match config.database.url.as_deref() {
        Some(url) => {
            let pool = database::create_pool(&config.database, url).await?;
            tracing::info!("Database connection pool created");

            tracing::info!("Running database migrations...");
            database::run_migrations(&pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
            tracing::info!("Database migrations completed successfully");

            (
                Arc::new(PgReportRepository::new(pool.clone())),
                Arc::new(PgUserRepository::new(pool)),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data is lost on restart)");
            (
                Arc::new(InMemoryReportRepository::new()),
                Arc::new(InMemoryUserRepository::new()),
            )
        }
    };

    // Initialize upload storage
    let storage = Arc::new(LocalStorage::new(
        config.upload.dir.clone(),
        config.app.public_base_url.clone(),
        config.upload.public_path.clone(),
    ));
    storage
        .ensure_dir()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to prepare upload directory: {}", e))?;
    tracing::info!(
        "Upload storage initialized at {} (served under {})",
        config.upload.dir.display(),
        config.upload.public_path
    );

    let report_service = Arc::new(ReportService::new(
        report_repository,
        Arc::clone(&storage),
        Arc::new(RandomSeverity),
    ));
    tracing::info!("Report service initialized");

    let dashboard_service = Arc::new(DashboardService::new(Arc::clone(&report_service)));
    tracing::info!("Dashboard service initialized");

    let token_service = Arc::new(TokenService::new(&config.auth));
    let auth_service = Arc::new(AuthService::new(user_repository, token_service));
    tracing::info!("Auth service initialized");

    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    let services = Services {
        report_service,
        dashboard_service,
        auth_service,
    };

    let app = Router::new()
        .merge(swagger)
        .merge(app_routes(
            &services,
            &config.upload.public_path,
            storage.root(),
        ))
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}

/// Services shared by the API and page route groups
struct Services {
    report_service: Arc<ReportService>,
    dashboard_service: Arc<DashboardService>,
    auth_service: Arc<AuthService>,
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// JSON API, citizen and portal pages, health check and static files
fn app_routes(services: &Services, upload_public_path: &str, upload_root: &Path) -> Router {
    let api_routes = Router::new()
        .merge(reports_routes::routes(Arc::clone(&services.report_service)))
        .merge(dashboard_routes::routes(Arc::clone(
            &services.dashboard_service,
        )))
        .merge(auth_routes::routes(Arc::clone(&services.auth_service)));

    let page_routes = Router::new()
        .merge(citizen_routes::routes(CitizenState {
            report_service: Arc::clone(&services.report_service),
            auth_service: Arc::clone(&services.auth_service),
        }))
        .merge(portal_routes::routes(PortalState {
            report_service: Arc::clone(&services.report_service),
            dashboard_service: Arc::clone(&services.dashboard_service),
        }));

    Router::new()
        .merge(api_routes)
        .merge(page_routes)
        .route("/health", axum::routing::get(health_check))
        .nest_service(upload_public_path, ServeDir::new(upload_root))
        .nest_service("/assets", ServeDir::new(ASSETS_DIR))
}
