//! Employee Server - 员工名录服务
//!
//! # 架构概述
//!
//! 提供员工记录的列表、详情、新建、编辑和删除，附带照片上传：
//!
//! - **数据库** (`db`): SQLite 存储 (sqlx)
//! - **认证** (`auth`): JWT + Argon2，显式的访问谓词
//! - **照片存储** (`services`): web root 下 `images/` 目录
//! - **HTTP API** (`api`): 路由和处理器
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、服务器、启动错误
//! ├── auth/          # JWT 认证、访问控制
//! ├── db/            # 连接池、迁移、仓储
//! ├── services/      # 照片存储
//! ├── middleware/    # 请求日志
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState};
pub use services::PhotoStore;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境
///
/// 加载 `.env` 并初始化日志。必须在读取 [`Config`] 之前调用。
pub fn setup_environment() -> Result<(), crate::core::ServerError> {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(level.as_deref(), log_dir.as_deref())?;
    Ok(())
}
