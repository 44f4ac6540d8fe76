use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const COLUMNS: &str = "id, customer_name, customer_phone, category, product_name, price, \
                           quantity, total_price, recorded_at";

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Sale {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub category: Option<String>,
    pub product_name: String,
    pub price: i64,
    pub quantity: i64,
    pub total_price: i64,
    #[serde(rename = "timestamp")]
    pub recorded_at: DateTime<Utc>,
}
