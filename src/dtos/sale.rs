use serde::Deserialize;
use crate::error::AppError;
use crate::services::normalize::{coerce, line_total, NumberLike};

#[derive(Debug, Deserialize)]
pub struct CreateSaleRequest {
    pub customer_name: String,
    pub category: Option<String>,
    pub product_name: String,
    pub price: NumberLike,
    pub quantity: NumberLike,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSaleRequest {
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub category: Option<String>,
    pub product_name: String,
    pub price: NumberLike,
    pub quantity: NumberLike,
}

/// Coerced (quantity, price, total_price) of a sale line.
#[derive(Debug, PartialEq)]
pub struct SaleAmounts {
    pub quantity: i64,
    pub price: i64,
    pub total_price: i64,
}

impl SaleAmounts {
    pub fn from_raw(quantity: &NumberLike, price: &NumberLike) -> Result<Self, AppError> {
        let quantity = coerce("quantity", quantity)?;
        let price = coerce("price", price)?;
        Ok(Self { quantity, price, total_price: line_total(quantity, price) })
    }
}
