use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::auth::password::hash_password;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::db::repository::account;
use crate::services::PhotoStore;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 克隆成本极低 (连接池和 Arc)，每个请求各持一份。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | SqlitePool | SQLite 连接池 |
/// | photos | PhotoStore | 照片存储 (`<web_root>/images`) |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: SqlitePool,
    pub photos: PhotoStore,
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, db: SqlitePool, photos: PhotoStore, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            photos,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 打开数据库并执行迁移，然后交给 [`ServerState::with_pool`]
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path).await?;
        Self::with_pool(config, db.pool).await
    }

    /// 使用已有连接池初始化 (测试使用内存数据库)
    ///
    /// 创建照片目录，并在配置了引导管理员时写入账号
    pub async fn with_pool(config: &Config, db: SqlitePool) -> Result<Self> {
        let photos = PhotoStore::new(&config.web_root);
        photos.ensure_dir().await?;
        tracing::info!(images_dir = %photos.images_dir().display(), "Photo store ready");

        if let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password) {
            let hash = || {
                hash_password(password)
                    .map_err(|e| ServerError::Config(format!("Failed to hash admin password: {e}")))
            };
            if account::ensure_admin(&db, username, hash).await? {
                tracing::info!(username = %username, "Bootstrap admin account created");
            }
        }

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db, photos, jwt_service))
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
