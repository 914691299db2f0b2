//! 认证授权模块
//!
//! 提供 JWT 认证和访问控制：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文 (axum 提取器)
//! - [`Access`] - 处理器开头显式调用的访问谓词
//! - [`password`] - Argon2 密码哈希

pub mod access;
pub mod extractor;
pub mod jwt;
pub mod password;

pub use access::Access;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
