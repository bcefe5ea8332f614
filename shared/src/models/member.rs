//! Member Model

use serde::{Deserialize, Serialize};

use super::Contribution;

/// Member entity (会员)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub second_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub group_code: String,
    pub contact: String,
    #[cfg_attr(feature = "db", sqlx(try_from = "i64"))]
    pub contribution: Contribution,
    pub created_at: i64,
}

/// Registration payload, as submitted by the register form
///
/// Missing form fields deserialize as empty and are caught by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberCreate {
    pub first_name: String,
    pub second_name: Option<String>,
    pub last_name: String,
    pub email: String,
    #[serde(alias = "group_no")]
    pub group_code: String,
    pub contact: String,
}

impl MemberCreate {
    /// Trim every field; a blank second name becomes `None`.
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            second_name: self
                .second_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            group_code: self.group_code.trim().to_string(),
            contact: self.contact.trim().to_string(),
        }
    }
}

/// What the dashboard shows for the logged-in member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DashboardView {
    pub first_name: String,
    #[cfg_attr(feature = "db", sqlx(try_from = "i64"))]
    pub contribution: Contribution,
}
