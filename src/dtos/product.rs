// src/dtos/product.rs
use serde::Deserialize;
use crate::error::AppError;
use crate::services::normalize::{coerce, line_total, NumberLike};

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    pub supplier_name: Option<String>,
    pub quantity: NumberLike,
    pub purchase_price: NumberLike,
    pub sales_price: NumberLike,
}

/// Product columns written by PUT /product/{id}, already coerced.
#[derive(Debug, PartialEq)]
pub struct ProductUpdate {
    pub product_name: String,
    pub category: String,
    pub supplier_name: Option<String>,
    pub quantity: i64,
    pub purchase_price: i64,
    pub sales_price: i64,
    pub total_price: i64,
}

impl UpdateProductRequest {
    pub fn normalize(self) -> Result<ProductUpdate, AppError> {
        let quantity = coerce("quantity", &self.quantity)?;
        let purchase_price = coerce("purchase_price", &self.purchase_price)?;
        let sales_price = coerce("sales_price", &self.sales_price)?;

        Ok(ProductUpdate {
            product_name: self.product_name,
            category: self.category,
            supplier_name: self.supplier_name,
            quantity,
            purchase_price,
            sales_price,
            total_price: line_total(quantity, purchase_price),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_recomputes_total_from_coerced_values() {
        let req: UpdateProductRequest = serde_json::from_str(
            r#"{"product_name":"Widget","category":"Tools","quantity":"4.7",
                "purchase_price":"12","sales_price":20,"total_price":"999"}"#,
        )
        .unwrap();
        let update = req.normalize().unwrap();
        assert_eq!(update.quantity, 4);
        assert_eq!(update.total_price, 48);
        assert_eq!(update.supplier_name, None);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let req: UpdateProductRequest = serde_json::from_str(
            r#"{"product_name":"Widget","quantity":1,"purchase_price":"n/a","sales_price":2}"#,
        )
        .unwrap();
        assert!(matches!(req.normalize(), Err(AppError::ValidationError(_))));
    }
}
