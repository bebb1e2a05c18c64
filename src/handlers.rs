use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
};

use crate::analytics::{self, Field, FrequencyEntry};
use crate::charts::{self, ChartOp, ChartSpec};
use crate::errors::AppError;
use crate::export;
use crate::history;
use crate::models::{
    AnalyticsQuery, AnalyticsRecord, ChartData, GameDetails, GameEntry, GameStatsSummary,
    GameSummary, HistoryQuery, NULL_PLACEHOLDER, PageQuery, PagedGamesResponse,
    PlayerHistoryResponse,
};
use crate::pager::{DEFAULT_ITEMS_PER_PAGE, PageState};
use crate::search::{SUGGESTION_LIMIT, prefix_filter};
use crate::state::AppState;
use crate::ui::render_index;
use crate::window::{self, WindowNavigator};

/// Session key for the ranked-list page state.
const TOP_GAMES_VIEW: &str = "topcurrentgames";

const TOP_COUNT: usize = 10;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let games = state.client.top_current_games().await?;
    Ok(Html(render_index(&summarize(games))))
}

pub async fn get_game_stats(
    State(state): State<AppState>,
) -> Result<Json<GameStatsSummary>, AppError> {
    let games = state.client.top_current_games().await?;
    Ok(Json(summarize(games)))
}

pub async fn get_top_games(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedGamesResponse>, AppError> {
    let games = state.client.top_current_games().await?;

    let mut session = state.session.lock().await;
    let page_state = session
        .pages
        .entry(TOP_GAMES_VIEW.to_string())
        .or_insert_with(|| PageState::new(DEFAULT_ITEMS_PER_PAGE, games.len()));
    if let Some(per_page) = query.per_page {
        if per_page != page_state.items_per_page {
            page_state.set_items_per_page(per_page);
        }
    }
    page_state.set_total_items(games.len());
    if let Some(page) = query.page {
        page_state.go_to(page);
    }
    let paging = *page_state;
    drop(session);

    Ok(Json(PagedGamesResponse {
        items: paging.slice(&games).to_vec(),
        current_page: paging.current_page,
        items_per_page: paging.items_per_page,
        total_pages: paging.total_pages(),
        page_window: paging.page_window(),
    }))
}

pub async fn get_game(
    State(state): State<AppState>,
    Path(appid): Path<u64>,
) -> Result<Json<GameDetails>, AppError> {
    Ok(Json(state.client.game(appid).await?))
}

pub async fn get_player_history(
    State(state): State<AppState>,
    Path(appid): Path<u64>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<PlayerHistoryResponse>, AppError> {
    let rows = state.client.player_history(appid).await?;

    let mut session = state.session.lock().await;
    let nav = session.windows.entry(appid).or_insert_with(WindowNavigator::new);
    if let Some(from) = query.from {
        nav.set_from(from);
    }
    if let Some(to) = query.to {
        nav.set_to(to);
    }
    if let Some(step) = query.nav {
        nav.step(step);
    }
    let window = nav.window();
    drop(session);

    let mut series = Vec::new();
    for row in &rows {
        series.extend(history::reconstruct(&row.date_playerscount)?);
    }

    Ok(Json(PlayerHistoryResponse {
        appid,
        window,
        points: window::filter_series(&series, window),
    }))
}

pub async fn get_all_games(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameEntry>>, AppError> {
    let index = cached_game_list(&state).await?;
    Ok(Json(index.clone()))
}

pub async fn search_games(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<GameEntry>>, AppError> {
    let index = cached_game_list(&state).await?;
    Ok(Json(prefix_filter(index, &query, SUGGESTION_LIMIT)))
}

pub async fn get_all_metadata(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalyticsRecord>>, AppError> {
    Ok(Json(state.client.all_metadata().await?))
}

pub async fn export_metadata_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.client.all_metadata().await?;
    Ok(csv_response(export::metadata_csv(&records)?))
}

pub async fn get_analytics(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<Vec<FrequencyEntry>>, AppError> {
    let field: Field = field.parse().map_err(AppError::bad_request)?;
    let records = state.client.all_metadata().await?;
    Ok(Json(distribution_for(&records, field, &query)))
}

pub async fn export_analytics_csv(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Query(query): Query<AnalyticsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let field: Field = field.parse().map_err(AppError::bad_request)?;
    let records = state.client.all_metadata().await?;
    let distribution = distribution_for(&records, field, &query);
    Ok(csv_response(export::distribution_csv(&distribution)?))
}

pub async fn list_charts(State(state): State<AppState>) -> Json<Vec<ChartSpec>> {
    let session = state.session.lock().await;
    Json(session.charts.clone())
}

pub async fn add_chart(State(state): State<AppState>) -> Json<Vec<ChartSpec>> {
    let mut session = state.session.lock().await;
    session.charts = charts::push_default(&session.charts);
    Json(session.charts.clone())
}

pub async fn update_chart(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(op): Json<ChartOp>,
) -> Json<Vec<ChartSpec>> {
    let mut session = state.session.lock().await;
    session.charts = charts::apply(&session.charts, index, op);
    Json(session.charts.clone())
}

pub async fn delete_chart(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<Vec<ChartSpec>> {
    let mut session = state.session.lock().await;
    session.charts = charts::remove(&session.charts, index);
    Json(session.charts.clone())
}

pub async fn chart_data(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<ChartData>, AppError> {
    let spec = {
        let session = state.session.lock().await;
        session
            .charts
            .get(index)
            .copied()
            .ok_or_else(|| AppError::not_found("no such chart"))?
    };

    let records = state.client.all_metadata().await?;
    let distribution = analytics::aggregate(&records, spec.dataset);
    Ok(Json(ChartData {
        title: spec.dataset.title().to_string(),
        kind: spec.kind,
        entries: analytics::top(&distribution, spec.slices).to_vec(),
    }))
}

async fn cached_game_list(state: &AppState) -> Result<&Vec<GameEntry>, AppError> {
    Ok(state
        .search_index
        .get_or_try_init(|| state.client.all_games())
        .await?)
}

fn distribution_for(
    records: &[AnalyticsRecord],
    field: Field,
    query: &AnalyticsQuery,
) -> Vec<FrequencyEntry> {
    let mut distribution = analytics::aggregate(records, field);
    if query.exclude_null.unwrap_or(false) {
        distribution = analytics::exclude_name(distribution, NULL_PLACEHOLDER);
    }
    if let Some(top) = query.top {
        distribution = analytics::top(&distribution, top).to_vec();
    }
    distribution
}

fn summarize(games: Vec<GameSummary>) -> GameStatsSummary {
    let total_players_all: u64 = games.iter().map(|game| game.concurrent_in_game).sum();
    let top_games: Vec<GameSummary> = games.into_iter().take(TOP_COUNT).collect();
    let total_players_top: u64 = top_games.iter().map(|game| game.concurrent_in_game).sum();

    let mut pie_data: Vec<FrequencyEntry> = top_games
        .iter()
        .map(|game| FrequencyEntry {
            name: game.name.clone(),
            value: game.concurrent_in_game,
        })
        .collect();
    pie_data.push(FrequencyEntry {
        name: "Other Games".to_string(),
        value: total_players_all.saturating_sub(total_players_top),
    });

    GameStatsSummary {
        top_games,
        total_players_all,
        total_players_top,
        top_share_percent: analytics::share(total_players_top, total_players_all),
        rest_share_percent: analytics::share(
            total_players_all.saturating_sub(total_players_top),
            total_players_all,
        ),
        pie_data,
    }
}

fn csv_response(csv: String) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/csv")], csv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(rank: u32, name: &str, players: u64) -> GameSummary {
        GameSummary {
            rank,
            appid: rank as u64,
            name: name.to_string(),
            concurrent_in_game: players,
            header_image: String::new(),
        }
    }

    #[test]
    fn summarize_splits_top_ten_from_the_rest() {
        let games: Vec<GameSummary> = (1..=12)
            .map(|rank| game(rank, &format!("game-{rank}"), 100))
            .collect();

        let summary = summarize(games);
        assert_eq!(summary.top_games.len(), 10);
        assert_eq!(summary.total_players_all, 1200);
        assert_eq!(summary.total_players_top, 1000);
        assert_eq!(summary.pie_data.last().unwrap().name, "Other Games");
        assert_eq!(summary.pie_data.last().unwrap().value, 200);
    }

    #[test]
    fn summarize_reports_zero_shares_for_zero_players() {
        let summary = summarize(vec![]);
        assert_eq!(summary.total_players_all, 0);
        assert_eq!(summary.top_share_percent, 0.0);
        assert_eq!(summary.rest_share_percent, 0.0);
    }
}
