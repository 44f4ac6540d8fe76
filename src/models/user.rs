use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const COLUMNS: &str = "id, email, name, role, recorded_at";

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "timestamp")]
    pub recorded_at: DateTime<Utc>,
}
