//! Room API Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{Room, RoomCreate};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// POST /api/room - 创建空房间
///
/// 名称忽略大小写去重，返回 201 与带新 id 的房间。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<(StatusCode, Json<Room>)> {
    validate_required_text(&payload.name, "room name", MAX_NAME_LEN)?;
    let room = state.store().create_room(&payload.name).await?;
    Ok((StatusCode::CREATED, Json(room)))
}
