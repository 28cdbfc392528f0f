use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::auth::login::login;
use super::handlers::auth::logout::logout;
use super::handlers::auth::me::me;
use super::handlers::auth::register::register;
use super::handlers::auth::status::status;
use super::handlers::favorites::add_favorite::add_favorite;
use super::handlers::favorites::check_favorite::check_favorite;
use super::handlers::favorites::list_favorites::list_favorites;
use super::handlers::favorites::remove_favorite::remove_favorite;
use super::handlers::reviews::delete_review::delete_review;
use super::handlers::reviews::list_movie_reviews::list_movie_reviews;
use super::handlers::reviews::list_user_reviews::list_user_reviews;
use super::handlers::reviews::save_review::save_review;
use super::handlers::watchlist::add_to_watchlist::add_to_watchlist;
use super::handlers::watchlist::check_watchlist::check_watchlist;
use super::handlers::watchlist::list_watchlist::list_watchlist;
use super::handlers::watchlist::remove_from_watchlist::remove_from_watchlist;
use super::middleware::resolve_identity;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::user::ports::AuthServicePort;
use crate::domain::watchlist::ports::WatchlistServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub favorite_service: Arc<dyn FavoriteServicePort>,
    pub review_service: Arc<dyn ReviewServicePort>,
    pub watchlist_service: Arc<dyn WatchlistServicePort>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthServicePort>,
    favorite_service: Arc<dyn FavoriteServicePort>,
    review_service: Arc<dyn ReviewServicePort>,
    watchlist_service: Arc<dyn WatchlistServicePort>,
) -> Router {
    let state = AppState {
        auth_service,
        favorite_service,
        review_service,
        watchlist_service,
    };

    let public_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/test", get(status))
        .route("/reviews/movie/:movie_id", get(list_movie_reviews));

    let protected_routes = Router::new()
        .route("/auth/me", get(me))
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/:movie_id", delete(remove_favorite))
        .route("/favorites/check/:movie_id", get(check_favorite))
        .route("/reviews", post(save_review))
        .route("/reviews/user", get(list_user_reviews))
        .route("/reviews/:review_id", delete(delete_review))
        .route("/watchlist", get(list_watchlist).post(add_to_watchlist))
        .route("/watchlist/:movie_id", delete(remove_from_watchlist))
        .route("/watchlist/check/:movie_id", get(check_watchlist))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_identity,
        ));

    // Headers stay out of the span: they carry bearer tokens.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
