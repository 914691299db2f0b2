//! Employee API Module
//!
//! | 路径 | 方法 | 权限 |
//! |------|------|------|
//! | /api/employees | GET | 公开 |
//! | /api/employees/details/{id} | GET | 公开 |
//! | /api/employees/create | GET, POST | Admin |
//! | /api/employees/edit/{id} | GET | Admin |
//! | /api/employees/edit | POST | Admin |
//! | /api/employees/delete/{id} | POST | 已登录 |
//!
//! 权限在每个处理器开头通过 [`Access`](crate::auth::Access) 显式检查。

mod form;
mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub use form::{EmployeeSubmission, FormView};

/// Employee router
pub fn router() -> Router<ServerState> {
    // 读取路由：公开
    let read_routes = Router::new()
        .route("/api/employees", get(handler::index))
        .route("/api/employees/details", get(handler::details_without_id))
        .route("/api/employees/details/{id}", get(handler::details));

    // 管理路由
    let manage_routes = Router::new()
        .route(
            "/api/employees/create",
            get(handler::create_form).post(handler::create),
        )
        .route("/api/employees/edit/{id}", get(handler::edit_form))
        .route("/api/employees/edit", post(handler::edit))
        .route("/api/employees/delete/{id}", post(handler::delete));

    read_routes.merge(manage_routes)
}
