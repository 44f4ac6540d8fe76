use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

pub const COLUMNS: &str = "id, supplier_name, product_name, category, image, quantity, \
                           purchase_price, sales_price, total_price, recorded_at";

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Purchase {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub supplier_name: String,
    pub product_name: String,
    pub category: String,
    pub image: Option<String>,
    pub quantity: i64,
    pub purchase_price: i64,
    pub sales_price: i64,
    pub total_price: i64,
    #[serde(rename = "timestamp")]
    pub recorded_at: DateTime<Utc>,
}
