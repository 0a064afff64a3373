use axum::{
    routing::{get, post},
    Router,
};

use crate::api::state::AppState;

use super::handlers;

pub fn v1_router() -> Router<AppState> {
    let games = Router::new()
        .route(
            "/",
            get(handlers::games::list_games).post(handlers::games::create_game),
        )
        .route(
            "/{gameId}",
            get(handlers::games::get_game).delete(handlers::games::delete_game),
        );

    let users = Router::new()
        .route(
            "/{userId}/collection",
            get(handlers::collections::get_collection),
        )
        .route(
            "/{userId}/collection:toggle",
            post(handlers::collections::toggle_collection),
        )
        .route(
            "/{userId}/compatibility",
            get(handlers::compatibility::get_compatibility),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/openapi.json", get(super::openapi::openapi_json))
        .merge(super::openapi::redoc_router())
        .nest("/games", games)
        .nest("/users", users)
}
