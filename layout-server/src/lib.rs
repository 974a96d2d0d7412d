//! Floor Layout Server - 房间/桌台布局编辑器后端
//!
//! # 架构概述
//!
//! 本模块是布局服务的主入口，提供以下核心功能：
//!
//! - **布局存储** (`store`): 整文档级别的 JSON 文件持久化，
//!   附带测试用的内存实现
//! - **HTTP API** (`api`): RESTful 布局读写接口
//!
//! # 模块结构
//!
//! ```text
//! layout-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── store/         # 布局存储层
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use store::{LayoutStore, StoreError, StoreResult};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ______
   / ____/___  ____  _____
  / /_  / __ \/ __ \/ ___/
 / __/ / /_/ / /_/ / /
/_/    \____/\____/_/
    __                            __
   / /   ____ ___  ______  __  __/ /_
  / /   / __ `/ / / / __ \/ / / / __/
 / /___/ /_/ / /_/ / /_/ / /_/ / /_
/_____/\__,_/\__, /\____/\__,_/\__/
            /____/
    "#
    );
}

/// 环境初始化：加载 .env、创建工作目录、初始化日志
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
    std::fs::create_dir_all(&work_dir)?;

    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        log_dir.as_deref(),
    );

    Ok(())
}
