use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::dates;
use crate::error::ApiError;
use crate::exercises::dto::{
    CreateExerciseRequest, ExerciseCreated, LogEntry, LogParams, LogResponse,
};
use crate::exercises::query::{parse_limit, DateRange};
use crate::exercises::repo;
use crate::ident;
use crate::state::AppState;
use crate::users::repo::User;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/:id/exercises", post(create_exercise))
        .route("/api/users/:id/logs", get(get_log))
}

async fn resolve_user(state: &AppState, id_text: &str) -> Result<User, ApiError> {
    let id = ident::decode(id_text)?;
    require_user(User::find_by_id(&state.db, id).await?)
}

/// A well-formed id that matches no record is a client error, distinct
/// from a malformed id.
fn require_user(found: Option<User>) -> Result<User, ApiError> {
    found.ok_or(ApiError::UserNotFound)
}

#[instrument(skip(state, payload))]
pub async fn create_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<CreateExerciseRequest>>,
) -> Result<Json<ExerciseCreated>, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let user = resolve_user(&state, &id).await?;

    let date = match payload.date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => dates::parse_date_text(text)?,
        None => dates::today(),
    };

    let exercise = repo::insert(
        &state.db,
        user.id,
        payload.description.as_deref(),
        payload.duration,
        date,
    )
    .await?;

    info!(user_id = %user.id, exercise_id = %exercise.id, "exercise logged");
    Ok(Json(ExerciseCreated {
        id: user.id,
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: dates::format_date_string(exercise.date),
    }))
}

#[instrument(skip(state))]
pub async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LogParams>,
) -> Result<Json<LogResponse>, ApiError> {
    let user = resolve_user(&state, &id).await?;

    let range = DateRange::from_params(params.from.as_deref(), params.to.as_deref())?;
    let limit = parse_limit(params.limit.as_deref());

    let rows = repo::find_log(&state.db, user.id, range, limit).await?;
    let log: Vec<LogEntry> = rows
        .into_iter()
        .map(|r| LogEntry {
            description: r.description,
            duration: r.duration,
            date: dates::format_date_string(r.date),
        })
        .collect();

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn absent_user_is_not_found() {
        assert!(matches!(require_user(None), Err(ApiError::UserNotFound)));
    }

    #[test]
    fn found_user_passes_through() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".into(),
        };
        assert_eq!(require_user(Some(user.clone())).unwrap().id, user.id);
    }
}
