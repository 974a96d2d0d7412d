use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::store::{FileLayoutStore, LayoutStore, StoreResult};

/// 服务器状态 - 持有配置与布局存储的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求处理器拿到的都是同一份存储。
/// 存储以 trait 对象注入，文件实现与测试用内存实现均可。
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    store: Arc<dyn LayoutStore>,
    started_at: Instant,
}

impl ServerState {
    /// 初始化服务器状态：打开文件存储（布局文档不存在时初始化为空）
    pub async fn initialize(config: &Config) -> StoreResult<Self> {
        let store = FileLayoutStore::open(config.layout_file()).await?;
        Ok(Self::with_store(config.clone(), Arc::new(store)))
    }

    /// 使用注入的存储构造状态（测试走这里）
    pub fn with_store(config: Config, store: Arc<dyn LayoutStore>) -> Self {
        Self {
            config,
            store,
            started_at: Instant::now(),
        }
    }

    /// 获取布局存储
    pub fn store(&self) -> Arc<dyn LayoutStore> {
        self.store.clone()
    }

    /// 运行时长（秒）
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
