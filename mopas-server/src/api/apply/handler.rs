use axum::response::Response;

use crate::auth::SessionContext;
use crate::web::templates::{ApplyHostMissionPage, ApplyLeadIntercessorsPage};
use crate::web::{Flash, render};

/// GET /apply-lead-intercessors
pub async fn lead_intercessors_page(flash: Flash) -> Response {
    let page = ApplyLeadIntercessorsPage {
        flashes: flash.messages().to_vec(),
    };
    render(&page, &flash)
}

/// POST /apply-lead-intercessors
pub async fn lead_intercessors(session: SessionContext, flash: Flash) -> Response {
    tracing::info!(member_id = ?session.member_id(), "Lead intercessors application received");
    flash
        .push("Application to lead intercessors sent successfully!")
        .redirect("/dashboard")
}

/// GET /apply-host-mission
pub async fn host_mission_page(flash: Flash) -> Response {
    let page = ApplyHostMissionPage {
        flashes: flash.messages().to_vec(),
    };
    render(&page, &flash)
}

/// POST /apply-host-mission
pub async fn host_mission(session: SessionContext, flash: Flash) -> Response {
    tracing::info!(member_id = ?session.member_id(), "Host mission application received");
    flash
        .push("Application to host mission sent successfully!")
        .redirect("/dashboard")
}
