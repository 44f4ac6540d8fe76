use serde::{Deserialize, Serialize};
use crate::dtos::common::UpdateResult;
use crate::models::user::User;

#[derive(Debug, Deserialize)]
pub struct UpsertUserRequest {
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
}

impl UpsertUserRequest {
    /// A role only counts when it is non-empty.
    pub fn requested_role(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct PatchUserRequest {
    pub name: Option<String>,
    pub role: Option<String>,
}

/// PUT /users answers with the stored user when nothing changed.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UpsertUserResponse {
    Existing(User),
    Written(UpdateResult),
}
