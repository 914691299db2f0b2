use std::path::PathBuf;

use crate::auth::JwtConfig;
use crate::core::Result;

/// 服务器配置 - 员工名录服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | WEB_ROOT | ./wwwroot | 静态根目录，照片存放在 `images/` 下 |
/// | DATABASE_PATH | ./data/employees.db | SQLite 数据库文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (设置后写入滚动日志文件) |
/// | JWT_SECRET | 开发环境自动生成 | JWT 密钥 (生产环境必填, ≥32 字符) |
/// | JWT_EXPIRATION_MINUTES | 1440 | 令牌有效期 |
/// | ADMIN_USERNAME / ADMIN_PASSWORD | - | 启动时创建的管理员账号 |
/// | EMPLOYEE_EDIT_UPDATES_DEPARTMENT | false | 编辑时是否保存提交的部门 |
///
/// # 示例
///
/// ```ignore
/// WEB_ROOT=/srv/www HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 静态根目录
    pub web_root: PathBuf,
    /// SQLite 数据库路径
    pub database_path: PathBuf,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 引导管理员账号
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    /// 编辑提交时是否更新部门 (默认沿用旧行为: 不更新)
    pub edit_updates_department: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值。生产环境缺少 JWT_SECRET 时返回错误。
    pub fn from_env() -> Result<Self> {
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let jwt = JwtConfig::from_env(&environment)?;

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            web_root: std::env::var("WEB_ROOT")
                .unwrap_or_else(|_| "./wwwroot".into())
                .into(),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/employees.db".into())
                .into(),
            jwt,
            environment,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            admin_username: std::env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty()),
            edit_updates_department: std::env::var("EMPLOYEE_EDIT_UPDATES_DEPARTMENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }

    /// 使用自定义值构建配置
    ///
    /// 常用于测试场景，不读取环境变量
    pub fn with_overrides(web_root: impl Into<PathBuf>, jwt: JwtConfig) -> Self {
        Self {
            http_port: 0,
            web_root: web_root.into(),
            database_path: PathBuf::from(":memory:"),
            jwt,
            environment: "test".into(),
            log_level: "info".into(),
            log_dir: None,
            admin_username: None,
            admin_password: None,
            edit_updates_department: false,
        }
    }

    /// 照片目录: `<web_root>/images`
    pub fn images_dir(&self) -> PathBuf {
        self.web_root.join(crate::services::photo_store::IMAGES_DIR)
    }
}
