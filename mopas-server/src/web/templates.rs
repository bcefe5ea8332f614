//! Page templates (askama, compiled from `templates/`)

use askama::Template;
use shared::models::Contribution;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub flashes: Vec<String>,
    pub logged_in: bool,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub flashes: Vec<String>,
    pub first_name: String,
    pub contribution: Contribution,
}

#[derive(Template)]
#[template(path = "apply_lead_intercessors.html")]
pub struct ApplyLeadIntercessorsPage {
    pub flashes: Vec<String>,
}

#[derive(Template)]
#[template(path = "apply_host_mission.html")]
pub struct ApplyHostMissionPage {
    pub flashes: Vec<String>,
}
