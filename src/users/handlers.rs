use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{CreateUserRequest, PublicUser};
use crate::users::repo::User;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users", post(create_user).get(list_users))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Option<Json<CreateUserRequest>>,
) -> Result<Json<PublicUser>, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let username = payload.username.as_deref().map(str::trim).unwrap_or_default();
    if username.is_empty() {
        warn!("registration without username");
        return Err(ApiError::MissingField("username"));
    }

    let user = User::create(&state.db, username).await?;
    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(Json(PublicUser {
        username: user.username,
        id: user.id,
    }))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = User::list_all(&state.db).await?;
    let users = users
        .into_iter()
        .map(|u| PublicUser {
            username: u.username,
            id: u.id,
        })
        .collect();
    Ok(Json(users))
}
