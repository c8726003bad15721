use crate::errors::AppError;
use crate::models::{
    Entry, EntryDraft, EntryForm, LoginRequest, Page, PageRequest, RankingsResponse,
    SessionResponse, SuggestionQuery,
};
use crate::ranking::grand_winner;
use crate::state::AppState;
use crate::ui::{render_input, render_login, render_output};
use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let board = state.board.lock().await;
    let page = match board.session().current_page {
        Page::Login => render_login(&state.locations),
        Page::Input => render_input(&board.session().location),
        Page::Output => render_output(&board.rankings()),
    };
    Html(page)
}

pub async fn login_form(
    State(state): State<AppState>,
    Form(payload): Form<LoginRequest>,
) -> Result<Redirect, AppError> {
    apply_login(&state, &payload.location).await?;
    Ok(Redirect::to("/"))
}

pub async fn logout_form(State(state): State<AppState>) -> Redirect {
    state.board.lock().await.logout();
    Redirect::to("/")
}

pub async fn submit_form(
    State(state): State<AppState>,
    Form(payload): Form<EntryForm>,
) -> Result<Redirect, AppError> {
    let draft = payload.into_draft()?;
    state.board.lock().await.submit_entry(draft)?;
    Ok(Redirect::to("/"))
}

pub async fn clear_form(State(state): State<AppState>) -> Redirect {
    state.board.lock().await.clear_entries();
    Redirect::to("/")
}

pub async fn nav_output(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.board.lock().await.go_to_output()?;
    Ok(Redirect::to("/"))
}

pub async fn nav_input(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.board.lock().await.go_to_input()?;
    Ok(Redirect::to("/"))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let board = state.board.lock().await;
    Json(SessionResponse::from(board.session()))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    Ok(Json(apply_login(&state, &payload.location).await?))
}

pub async fn logout(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut board = state.board.lock().await;
    board.logout();
    Json(SessionResponse::from(board.session()))
}

pub async fn set_page(
    State(state): State<AppState>,
    Json(payload): Json<PageRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut board = state.board.lock().await;
    match payload.page.trim() {
        "input" => board.go_to_input()?,
        "output" => board.go_to_output()?,
        _ => return Err(AppError::bad_request("page must be 'input' or 'output'")),
    }
    Ok(Json(SessionResponse::from(board.session())))
}

pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<Entry>> {
    let board = state.board.lock().await;
    Json(board.list_entries().to_vec())
}

pub async fn add_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryDraft>,
) -> Result<(StatusCode, Json<Entry>), AppError> {
    let entry = state.board.lock().await.submit_entry(payload)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn clear_entries(State(state): State<AppState>) -> StatusCode {
    state.board.lock().await.clear_entries();
    StatusCode::NO_CONTENT
}

pub async fn get_rankings(State(state): State<AppState>) -> Json<RankingsResponse> {
    let board = state.board.lock().await;
    let rankings = board.rankings();
    let grand_winner = grand_winner(&rankings).cloned();
    Json(RankingsResponse {
        rankings,
        grand_winner,
    })
}

pub async fn get_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Json<Vec<String>> {
    let board = state.board.lock().await;
    Json(board.suggest_names(&query.name))
}

async fn apply_login(state: &AppState, location: &str) -> Result<SessionResponse, AppError> {
    if !location.trim().is_empty() && !state.is_known_location(location) {
        return Err(AppError::bad_request(format!(
            "unknown location {:?}",
            location.trim()
        )));
    }
    let mut board = state.board.lock().await;
    board.login(location)?;
    Ok(SessionResponse::from(board.session()))
}
