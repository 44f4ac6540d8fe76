use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const COLUMNS: &str = "id, supplier_name, phone, email, time_added";

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Supplier {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub supplier_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub time_added: DateTime<Utc>,
}
