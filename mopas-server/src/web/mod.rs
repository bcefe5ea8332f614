//! Server-rendered pages
//!
//! - [`templates`] - askama 页面模板
//! - [`flash`] - 一次性提示消息
//! - [`cookies`] - Set-Cookie 辅助函数

pub mod cookies;
pub mod flash;
pub mod templates;

use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use shared::error::{AppError, ErrorCode};

pub use flash::Flash;

/// Shown instead of infrastructure error details
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Render a page. Flash messages shown by it are consumed.
pub fn render<T: Template>(page: &T, flash: &Flash) -> Response {
    match page.render() {
        Ok(html) => {
            let mut response = Html(html).into_response();
            flash.consume(&mut response);
            response
        }
        Err(e) => AppError::with_message(ErrorCode::TemplateError, e.to_string()).into_response(),
    }
}

/// Turn a failed operation into a flash message and a redirect to `back_to`,
/// keeping any messages still pending.
///
/// User errors show their own message; system errors are logged and
/// replaced by a generic notice.
pub fn flash_error(flash: Flash, err: &AppError, back_to: &str) -> Response {
    if err.is_system() {
        tracing::error!(code = %err.code, message = %err.message, "Request failed");
        return flash.push(GENERIC_FAILURE).redirect(back_to);
    }
    flash.push(err.message.clone()).redirect(back_to)
}
