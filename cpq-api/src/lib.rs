use axum::Router;
use tower_http::trace::TraceLayer;

pub mod app_config;
pub mod catalog;
pub mod error;
pub mod middleware;
pub mod quotes;
pub mod service;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let demo = Router::new()
        .merge(catalog::routes())
        .merge(quotes::routes());

    Router::new()
        .merge(service::routes())
        .nest("/api/v1/demo", demo)
        .layer(axum::middleware::from_fn(middleware::answer_options))
        .layer(middleware::cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
