use std::sync::Arc;

use auth::Authenticator;
use movie_service::config::Config;
use movie_service::config::StorageBackend;
use movie_service::domain::favorite::ports::FavoriteRepository;
use movie_service::domain::favorite::ports::FavoriteServicePort;
use movie_service::domain::favorite::service::FavoriteService;
use movie_service::domain::review::ports::ReviewRepository;
use movie_service::domain::review::ports::ReviewServicePort;
use movie_service::domain::review::service::ReviewService;
use movie_service::domain::user::ports::AuthServicePort;
use movie_service::domain::user::ports::UserRepository;
use movie_service::domain::user::service::AuthService;
use movie_service::domain::watchlist::ports::WatchlistRepository;
use movie_service::domain::watchlist::ports::WatchlistServicePort;
use movie_service::domain::watchlist::service::WatchlistService;
use movie_service::inbound::http::router::create_router;
use movie_service::outbound::repositories::InMemoryStore;
use movie_service::outbound::repositories::PostgresFavoriteRepository;
use movie_service::outbound::repositories::PostgresReviewRepository;
use movie_service::outbound::repositories::PostgresUserRepository;
use movie_service::outbound::repositories::PostgresWatchlistRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type Services = (
    Arc<dyn AuthServicePort>,
    Arc<dyn FavoriteServicePort>,
    Arc<dyn ReviewServicePort>,
    Arc<dyn WatchlistServicePort>,
);

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_service=debug,auth=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "movie-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    tracing::info!(
        backend = ?config.database.backend,
        http_address = %config.http_address(),
        token_ttl_hours = config.jwt.expiration_hours,
        leeway_seconds = config.jwt.leeway_seconds,
        reveal_duplicate_field = config.auth.reveal_duplicate_field,
        "Configuration loaded"
    );

    let authenticator = Arc::new(config.jwt.authenticator()?);
    let reveal_duplicate_field = config.auth.reveal_duplicate_field;

    let (auth_service, favorite_service, review_service, watchlist_service) =
        match config.database.backend {
            StorageBackend::Postgres => {
                let url = config.database.url.as_deref().unwrap_or_default();
                let pg_pool = PgPoolOptions::new()
                    .max_connections(config.database.max_connections)
                    .connect(url)
                    .await?;
                tracing::info!(
                    max_connections = config.database.max_connections,
                    database = "postgresql",
                    "Database connection pool created"
                );

                sqlx::migrate!("./migrations").run(&pg_pool).await?;
                tracing::info!(database = "postgresql", "Database migrations completed");

                build_services(
                    Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                    Arc::new(PostgresFavoriteRepository::new(pg_pool.clone())),
                    Arc::new(PostgresReviewRepository::new(pg_pool.clone())),
                    Arc::new(PostgresWatchlistRepository::new(pg_pool)),
                    authenticator,
                    reveal_duplicate_field,
                )
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on shutdown");
                let store = Arc::new(InMemoryStore::new());

                build_services(
                    Arc::clone(&store),
                    Arc::clone(&store),
                    Arc::clone(&store),
                    store,
                    authenticator,
                    reveal_duplicate_field,
                )
            }
        };

    let http_address = config.http_address();
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        favorite_service,
        review_service,
        watchlist_service,
    );
    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");
    Ok(())
}

fn build_services<UR, FR, RR, WR>(
    users: Arc<UR>,
    favorites: Arc<FR>,
    reviews: Arc<RR>,
    watchlist: Arc<WR>,
    authenticator: Arc<Authenticator>,
    reveal_duplicate_field: bool,
) -> Services
where
    UR: UserRepository,
    FR: FavoriteRepository,
    RR: ReviewRepository,
    WR: WatchlistRepository,
{
    let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthService::new(
        users,
        authenticator,
        reveal_duplicate_field,
    ));
    let favorite_service: Arc<dyn FavoriteServicePort> =
        Arc::new(FavoriteService::new(favorites));
    let review_service: Arc<dyn ReviewServicePort> = Arc::new(ReviewService::new(reviews));
    let watchlist_service: Arc<dyn WatchlistServicePort> =
        Arc::new(WatchlistService::new(watchlist));

    (
        auth_service,
        favorite_service,
        review_service,
        watchlist_service,
    )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
