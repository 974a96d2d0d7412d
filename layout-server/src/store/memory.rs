//! 内存布局存储
//!
//! 与文件存储语义一致，数据只存活在进程内。测试和临时场景使用。

use async_trait::async_trait;
use shared::models::{LayoutUpsert, Room};
use tokio::sync::Mutex;

use super::{LayoutStore, StoreResult};

/// In-memory layout store
#[derive(Default)]
pub struct MemoryLayoutStore {
    rooms: Mutex<Vec<Room>>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以给定房间集合为初始状态
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms: Mutex::new(rooms),
        }
    }
}

#[async_trait]
impl LayoutStore for MemoryLayoutStore {
    async fn list_rooms(&self) -> StoreResult<Vec<Room>> {
        Ok(self.rooms.lock().await.clone())
    }

    async fn get_room(&self, name: &str) -> StoreResult<Room> {
        super::get_room_in(&self.rooms.lock().await, name)
    }

    async fn create_room(&self, name: &str) -> StoreResult<Room> {
        super::create_room_in(&mut *self.rooms.lock().await, name)
    }

    async fn delete_room(&self, name: &str) -> StoreResult<()> {
        super::delete_room_in(&mut *self.rooms.lock().await, name)
    }

    async fn upsert_layout(&self, layout: LayoutUpsert) -> StoreResult<()> {
        super::upsert_layout_in(&mut *self.rooms.lock().await, layout)
    }

    async fn update_tables(&self, layout: LayoutUpsert) -> StoreResult<()> {
        super::update_tables_in(&mut *self.rooms.lock().await, layout)
    }
}
