use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/topcurrentgames", get(handlers::get_top_games))
        .route("/api/gamestats", get(handlers::get_game_stats))
        .route("/api/game/:appid", get(handlers::get_game))
        .route("/api/playercount/:appid", get(handlers::get_player_history))
        .route("/api/getallgameslist", get(handlers::get_all_games))
        .route("/api/search/:query", get(handlers::search_games))
        .route("/api/allmetadata", get(handlers::get_all_metadata))
        .route(
            "/api/allmetadata/export.csv",
            get(handlers::export_metadata_csv),
        )
        .route("/api/analytics/:field", get(handlers::get_analytics))
        .route(
            "/api/analytics/:field/export.csv",
            get(handlers::export_analytics_csv),
        )
        .route(
            "/api/charts",
            get(handlers::list_charts).post(handlers::add_chart),
        )
        .route(
            "/api/charts/:index",
            post(handlers::update_chart).delete(handlers::delete_chart),
        )
        .route("/api/charts/:index/data", get(handlers::chart_data))
        .with_state(state)
}
