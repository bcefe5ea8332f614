//! Member pages
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / | GET | 首页 |
//! | /register | GET, POST | 注册 |
//! | /login | GET, POST | 登录 |
//! | /dashboard | GET | 仪表盘 (需登录) |
//! | /logout | GET | 退出 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/register", get(handler::register_page).post(handler::register))
        .route("/login", get(handler::login_page).post(handler::login))
        .route("/dashboard", get(handler::dashboard))
        .route("/logout", get(handler::logout))
}
