use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const COLUMNS: &str = "id, name, image_url, start_date";

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub start_date: NaiveDate,
}
