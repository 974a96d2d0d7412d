//! 布局存储层
//!
//! # 结构
//!
//! - [`LayoutStore`] - 存储抽象，注入到 [`ServerState`](crate::core::ServerState)
//! - [`FileLayoutStore`] - JSON 文档文件存储
//! - [`MemoryLayoutStore`] - 内存存储（测试用）
//!
//! 所有操作都是整文档级别的 read-modify-write：读出全部房间、内存中
//! 修改、整体写回。按名称查找均为线性扫描，无二级索引。
//!
//! # 名称比较规则
//!
//! | 操作 | 规则 |
//! |------|------|
//! | get_room / upsert_layout / update_tables | 精确匹配（大小写敏感） |
//! | create_room / delete_room | 忽略大小写 |
//!
//! 两种规则并存是沿用既有系统的对外行为，刻意不统一。

pub mod file;
pub mod memory;

use async_trait::async_trait;
use shared::models::{LayoutUpsert, Room};
use thiserror::Error;

pub use file::FileLayoutStore;
pub use memory::MemoryLayoutStore;

/// 布局文档文件名
pub const LAYOUT_FILE: &str = "layout.json";

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Room not found: {0}")]
    NotFound(String),

    #[error("Room already exists: {0}")]
    Conflict(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Layout for room {0} is missing tables")]
    Unprocessable(String),

    #[error("Layout store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 布局存储抽象
///
/// 每个方法对应一次完整的 read-modify-write 周期；变更操作把写回
/// 放在最后一步，写回之前的任何失败都不会触碰已持久化的文档。
#[async_trait]
pub trait LayoutStore: Send + Sync {
    /// 返回全部房间（保持文档内顺序）
    async fn list_rooms(&self) -> StoreResult<Vec<Room>>;

    /// 按名称精确匹配查找房间
    async fn get_room(&self, name: &str) -> StoreResult<Room>;

    /// 创建空房间：名称非空、忽略大小写去重，返回带新 id 的房间
    async fn create_room(&self, name: &str) -> StoreResult<Room>;

    /// 按名称删除房间（忽略大小写，移除第一个匹配）
    async fn delete_room(&self, name: &str) -> StoreResult<()>;

    /// 整布局 upsert：命中则以提交列表整体驱动桌台集合（upsert +
    /// 删除缺失项 + 采纳房间名），未命中则把提交内容原样追加为新房间
    async fn upsert_layout(&self, layout: LayoutUpsert) -> StoreResult<()>;

    /// 桌台合并更新：同 upsert 的逐桌合并，但不删除缺失桌台；
    /// 房间不存在时报 NotFound
    async fn update_tables(&self, layout: LayoutUpsert) -> StoreResult<()>;
}

// ── Collection operations (shared by both backends) ─────────────────

fn get_room_in(rooms: &[Room], name: &str) -> StoreResult<Room> {
    rooms
        .iter()
        .find(|r| r.name == name)
        .cloned()
        .ok_or_else(|| StoreError::NotFound(name.to_string()))
}

fn create_room_in(rooms: &mut Vec<Room>, name: &str) -> StoreResult<Room> {
    if name.trim().is_empty() {
        return Err(StoreError::InvalidArgument("room name is required".into()));
    }
    if rooms.iter().any(|r| r.name.eq_ignore_ascii_case(name)) {
        return Err(StoreError::Conflict(name.to_string()));
    }
    let room = Room {
        id: Some(shared::util::room_id()),
        name: name.to_string(),
        tables: Vec::new(),
    };
    rooms.push(room.clone());
    Ok(room)
}

fn delete_room_in(rooms: &mut Vec<Room>, name: &str) -> StoreResult<()> {
    match rooms.iter().position(|r| r.name.eq_ignore_ascii_case(name)) {
        Some(index) => {
            rooms.remove(index);
            Ok(())
        }
        None => Err(StoreError::NotFound(name.to_string())),
    }
}

fn upsert_layout_in(rooms: &mut Vec<Room>, layout: LayoutUpsert) -> StoreResult<()> {
    if let Some(room) = rooms.iter_mut().find(|r| r.name == layout.name) {
        let LayoutUpsert { name, tables, .. } = layout;
        let tables = tables.ok_or_else(|| StoreError::Unprocessable(name.clone()))?;
        room.apply_layout(name, tables);
        return Ok(());
    }
    rooms.push(Room::from(layout));
    Ok(())
}

fn update_tables_in(rooms: &mut [Room], layout: LayoutUpsert) -> StoreResult<()> {
    let room = rooms
        .iter_mut()
        .find(|r| r.name == layout.name)
        .ok_or_else(|| StoreError::NotFound(layout.name.clone()))?;
    let tables = layout
        .tables
        .ok_or_else(|| StoreError::Unprocessable(layout.name.clone()))?;
    room.merge_tables(tables);
    Ok(())
}
