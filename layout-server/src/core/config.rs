use std::path::{Path, PathBuf};

use crate::store::LAYOUT_FILE;

/// 服务器配置 - 布局服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录，存放布局文档 |
/// | HTTP_PORT | 4000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_DIR | (未设置) | 日志目录，设置后启用按日滚动文件日志 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/layout HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储布局文档等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志目录 (可选)
    pub log_dir: Option<String>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or(defaults.work_dir),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_dir: std::env::var("LOG_DIR").ok(),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.shutdown_timeout_ms),
        }
    }

    /// 布局文档路径
    pub fn layout_file(&self) -> PathBuf {
        Path::new(&self.work_dir).join(LAYOUT_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./data".into(),
            http_port: 4000,
            environment: "development".into(),
            log_dir: None,
            shutdown_timeout_ms: 10_000,
        }
    }
}
