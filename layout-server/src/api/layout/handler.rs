//! Layout API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{LayoutUpsert, Room};

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::validate_layout;

/// GET /api/layout - 获取所有房间
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = state.store().list_rooms().await?;
    Ok(Json(rooms))
}

/// GET /api/layout/:name - 按名称获取房间（精确匹配）
pub async fn get_by_name(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<Json<Room>> {
    let room = state.store().get_room(&name).await?;
    Ok(Json(room))
}

/// POST /api/layout - 保存整份布局
///
/// 房间存在则以提交的桌台列表整体驱动（upsert + 删除缺失项），
/// 不存在则追加为新房间。
pub async fn save(
    State(state): State<ServerState>,
    Json(mut payload): Json<LayoutUpsert>,
) -> AppResult<&'static str> {
    validate_layout(&mut payload)?;
    state.store().upsert_layout(payload).await?;
    Ok("Data saved successfully")
}

/// PUT /api/layout - 合并更新桌台（不删除缺失桌台）
pub async fn update(
    State(state): State<ServerState>,
    Json(mut payload): Json<LayoutUpsert>,
) -> AppResult<&'static str> {
    validate_layout(&mut payload)?;
    state.store().update_tables(payload).await?;
    Ok("Room layout updated successfully")
}

/// DELETE /api/layout/:name - 按名称删除房间（忽略大小写）
pub async fn delete(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> AppResult<&'static str> {
    state.store().delete_room(&name).await?;
    Ok("Room deleted successfully")
}
