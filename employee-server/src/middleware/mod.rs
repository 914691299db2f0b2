//! 中间件
//!
//! - [`logging_middleware`] - 请求日志

pub mod logging;

pub use logging::logging_middleware;
