//! JSON 文档文件存储
//!
//! 房间集合整体保存为一份 pretty-printed JSON 文档，每次变更重写
//! 整个文件。进程内通过互斥锁串行化 read-modify-write 周期；跨进程
//! 写入仍是 last-write-wins（已知限制）。

use std::path::PathBuf;

use async_trait::async_trait;
use shared::models::{LayoutUpsert, Room};
use tokio::sync::Mutex;

use super::{LayoutStore, StoreError, StoreResult};

/// File-backed layout store
pub struct FileLayoutStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within the process
    doc_lock: Mutex<()>,
}

impl FileLayoutStore {
    /// 打开存储；文档不存在时初始化为空集合，存在时校验可读
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self {
            path: path.into(),
            doc_lock: Mutex::new(()),
        };
        if store.path.exists() {
            store.read()?;
        } else {
            if let Some(parent) = store.path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Unavailable(format!(
                        "Failed to create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            store.write(&[])?;
            tracing::info!(
                "Initialized empty layout document at {}",
                store.path.display()
            );
        }
        Ok(store)
    }

    /// 读取并解析整个文档
    ///
    /// IO 失败、解析失败、顶层不是数组，统一视为存储不可用。
    fn read(&self) -> StoreResult<Vec<Room>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            StoreError::Unavailable(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let value: serde_json::Value = serde_json::from_str(&content).map_err(|e| {
            StoreError::Unavailable(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;
        if !value.is_array() {
            return Err(StoreError::Unavailable(format!(
                "{} is not an array of rooms",
                self.path.display()
            )));
        }
        serde_json::from_value(value).map_err(|e| {
            StoreError::Unavailable(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// 整体写回（pretty-printed），写失败不产生半成品文档之外的状态
    fn write(&self, rooms: &[Room]) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(rooms)
            .map_err(|e| StoreError::Unavailable(format!("Failed to serialize layout: {}", e)))?;
        std::fs::write(&self.path, content).map_err(|e| {
            StoreError::Unavailable(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl LayoutStore for FileLayoutStore {
    async fn list_rooms(&self) -> StoreResult<Vec<Room>> {
        let _guard = self.doc_lock.lock().await;
        self.read()
    }

    async fn get_room(&self, name: &str) -> StoreResult<Room> {
        let _guard = self.doc_lock.lock().await;
        let rooms = self.read()?;
        super::get_room_in(&rooms, name)
    }

    async fn create_room(&self, name: &str) -> StoreResult<Room> {
        let _guard = self.doc_lock.lock().await;
        let mut rooms = self.read()?;
        let room = super::create_room_in(&mut rooms, name)?;
        self.write(&rooms)?;
        Ok(room)
    }

    async fn delete_room(&self, name: &str) -> StoreResult<()> {
        let _guard = self.doc_lock.lock().await;
        let mut rooms = self.read()?;
        super::delete_room_in(&mut rooms, name)?;
        self.write(&rooms)
    }

    async fn upsert_layout(&self, layout: LayoutUpsert) -> StoreResult<()> {
        let _guard = self.doc_lock.lock().await;
        let mut rooms = self.read()?;
        super::upsert_layout_in(&mut rooms, layout)?;
        self.write(&rooms)
    }

    async fn update_tables(&self, layout: LayoutUpsert) -> StoreResult<()> {
        let _guard = self.doc_lock.lock().await;
        let mut rooms = self.read()?;
        super::update_tables_in(&mut rooms, layout)?;
        self.write(&rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Table;

    async fn open_store(dir: &tempfile::TempDir) -> FileLayoutStore {
        FileLayoutStore::open(dir.path().join("layout.json"))
            .await
            .expect("open store")
    }

    fn make_table(name: &str) -> Table {
        Table {
            id: None,
            name: name.to_string(),
            src: "table-2.svg".to_string(),
            x: 10.0,
            y: 20.0,
            min: 2,
            max: 4,
            online: false,
            rotation: 90,
        }
    }

    fn make_layout(name: &str, tables: Option<Vec<Table>>) -> LayoutUpsert {
        LayoutUpsert {
            id: None,
            name: name.to_string(),
            tables,
        }
    }

    #[tokio::test]
    async fn test_open_bootstraps_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("layout.json");

        let store = FileLayoutStore::open(&path).await.unwrap();

        assert!(path.exists());
        assert!(store.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get_room() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;

        let room = store.create_room("Bar").await.unwrap();
        assert!(room.id.is_some());
        assert!(room.tables.is_empty());

        let fetched = store.get_room("Bar").await.unwrap();
        assert_eq!(fetched, room);

        // get_room 精确匹配，大小写不同不命中
        assert!(matches!(
            store.get_room("bar").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_create_conflict_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        store.create_room("Bar").await.unwrap();

        let err = store.create_room("bar").await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        let rooms = store.list_rooms().await.unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name, "Bar");
    }

    #[tokio::test]
    async fn test_create_room_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;

        let err = store.create_room("  ").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_delete_room_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        store.create_room("Bar").await.unwrap();

        store.delete_room("BAR").await.unwrap();
        assert!(store.list_rooms().await.unwrap().is_empty());

        assert!(matches!(
            store.delete_room("Bar").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_upsert_layout_appends_unknown_room_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;

        let mut layout = make_layout("Patio", Some(vec![make_table("T1")]));
        layout.id = Some("42".to_string());
        store.upsert_layout(layout).await.unwrap();

        let room = store.get_room("Patio").await.unwrap();
        assert_eq!(room.id.as_deref(), Some("42"));
        assert_eq!(room.tables.len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_layout_missing_tables_on_existing_room() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        store.create_room("Bar").await.unwrap();

        let err = store
            .upsert_layout(make_layout("Bar", None))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unprocessable(_)));
    }

    #[tokio::test]
    async fn test_update_tables_requires_existing_room() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;

        let err = store
            .update_tables(make_layout("Bar", Some(vec![make_table("T1")])))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert!(store.list_rooms().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_persistence_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = open_store(&dir).await;
            store.create_room("Bar").await.unwrap();
            store
                .upsert_layout(make_layout("Bar", Some(vec![make_table("T1")])))
                .await
                .unwrap();
        }

        let store = open_store(&dir).await;
        let room = store.get_room("Bar").await.unwrap();
        assert_eq!(room.tables.len(), 1);
        assert_eq!(room.tables[0].name, "T1");
    }

    #[tokio::test]
    async fn test_corrupt_document_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;

        std::fs::write(dir.path().join("layout.json"), "not json").unwrap();
        assert!(matches!(
            store.list_rooms().await,
            Err(StoreError::Unavailable(_))
        ));

        // 顶层不是数组同样视为不可用
        std::fs::write(dir.path().join("layout.json"), "{}").unwrap();
        assert!(matches!(
            store.list_rooms().await,
            Err(StoreError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_document_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir).await;
        store.create_room("Bar").await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("layout.json")).unwrap();
        assert!(content.contains('\n'));
    }
}
