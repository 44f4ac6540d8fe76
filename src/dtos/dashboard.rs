use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub period: Option<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SeriesPoint {
    pub date: DateTime<Utc>,
    pub total: i64,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_categories: i64,
    pub total_products: i64,
    pub total_suppliers: i64,
    pub total_purchases: i64,
    pub total_sales: i64,
    pub total_revenue: i64,
    pub total_purchases_amount: i64,
    pub total_sales_amount: i64,
    pub sales_data: Vec<SeriesPoint>,
    pub purchase_data: Vec<SeriesPoint>,
}
