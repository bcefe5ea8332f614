//! Apply forms
//!
//! Static forms; a submission is acknowledged and nothing is stored.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/apply-lead-intercessors",
            get(handler::lead_intercessors_page).post(handler::lead_intercessors),
        )
        .route(
            "/apply-host-mission",
            get(handler::host_mission_page).post(handler::host_mission),
        )
}
