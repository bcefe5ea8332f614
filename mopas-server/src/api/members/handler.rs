//! Member page handlers
//!
//! Registry failures never produce an error page: they become a flash
//! message and a redirect back to the form.

use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::MemberCreate;

use crate::auth::{SESSION_COOKIE, SessionContext};
use crate::core::ServerState;
use crate::web::cookies::{append_cookie, removal_cookie, session_cookie};
use crate::web::templates::{DashboardPage, IndexPage, LoginPage, RegisterPage};
use crate::web::{Flash, flash_error, render};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    #[serde(alias = "group_no")]
    pub group_code: String,
}

/// GET /
pub async fn index(session: SessionContext, flash: Flash) -> Response {
    let page = IndexPage {
        flashes: flash.messages().to_vec(),
        logged_in: session.is_authenticated(),
    };
    render(&page, &flash)
}

/// GET /register
pub async fn register_page(flash: Flash) -> Response {
    let page = RegisterPage {
        flashes: flash.messages().to_vec(),
    };
    render(&page, &flash)
}

/// Unreadable form body (wrong Content-Type, bad encoding): flash and go back
fn rejected_form(flash: Flash, rejection: FormRejection, back_to: &str) -> Response {
    tracing::info!(status = %rejection.status(), "Form rejected: {}", rejection.body_text());
    flash_error(flash, &AppError::invalid_request(rejection.body_text()), back_to)
}

/// POST /register
pub async fn register(
    State(state): State<ServerState>,
    flash: Flash,
    form: Result<Form<MemberCreate>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return rejected_form(flash, rejection, "/register"),
    };
    match state.registry.register(form).await {
        Ok(_) => flash
            .push("Registration successful! Please login.")
            .redirect("/login"),
        Err(e) => flash_error(flash, &e, "/register"),
    }
}

/// GET /login
pub async fn login_page(flash: Flash) -> Response {
    let page = LoginPage {
        flashes: flash.messages().to_vec(),
    };
    render(&page, &flash)
}

/// POST /login - 成功后写入会话 Cookie, 未显示的提示保留
pub async fn login(
    State(state): State<ServerState>,
    flash: Flash,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return rejected_form(flash, rejection, "/login"),
    };
    let session = match state.registry.login(&form.email, &form.group_code).await {
        Ok(session) => session,
        Err(e) => return flash_error(flash, &e, "/login"),
    };
    let Some(member_id) = session.member_id() else {
        return flash_error(flash, &AppError::invalid_credentials(), "/login");
    };

    let token = match state.sessions.issue(member_id) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!(member_id, "Failed to issue session token: {}", e);
            return flash_error(flash, &AppError::internal(e.to_string()), "/login");
        }
    };

    let mut response = Redirect::to("/dashboard").into_response();
    append_cookie(
        &mut response,
        &session_cookie(token, state.sessions.ttl(), state.config.is_production()),
    );
    response
}

/// GET /dashboard
pub async fn dashboard(
    State(state): State<ServerState>,
    session: SessionContext,
    flash: Flash,
) -> Response {
    match state.registry.dashboard(&session).await {
        Ok(view) => {
            let page = DashboardPage {
                flashes: flash.messages().to_vec(),
                first_name: view.first_name,
                contribution: view.contribution,
            };
            render(&page, &flash)
        }
        Err(e) if e.code == ErrorCode::MemberNotFound => {
            // 会员已不存在: 同时清除失效的会话
            let mut response = flash_error(flash, &e, "/login");
            append_cookie(
                &mut response,
                &removal_cookie(SESSION_COOKIE, state.config.is_production()),
            );
            response
        }
        Err(e) => flash_error(flash, &e, "/login"),
    }
}

/// GET /logout
pub async fn logout(
    State(state): State<ServerState>,
    mut session: SessionContext,
    flash: Flash,
) -> Response {
    state.registry.logout(&mut session);

    let mut response = flash.push("Logged out successfully.").redirect("/");
    append_cookie(
        &mut response,
        &removal_cookie(SESSION_COOKIE, state.config.is_production()),
    );
    response
}
