// src/dtos/purchase.rs
use serde::{Deserialize, Serialize};
use crate::dtos::common::{InsertOneResult, MessageResponse};
use crate::error::AppError;
use crate::services::inventory::{PurchaseEvent, ReconcileOutcome, StockChange};
use crate::services::normalize::{coerce, line_total, NumberLike};

/// Body of POST /purchase and POST /product.
#[derive(Debug, Deserialize)]
pub struct PurchaseEventRequest {
    pub supplier_name: String,
    pub product_name: String,
    #[serde(default)]
    pub category: String,
    pub image: Option<String>,
    pub quantity: NumberLike,
    pub purchase_price: NumberLike,
    pub sales_price: NumberLike,
}

impl PurchaseEventRequest {
    pub fn normalize(self) -> Result<PurchaseEvent, AppError> {
        let quantity = coerce("quantity", &self.quantity)?;
        let purchase_price = coerce("purchase_price", &self.purchase_price)?;
        let sales_price = coerce("sales_price", &self.sales_price)?;

        Ok(PurchaseEvent {
            supplier_name: self.supplier_name,
            product_name: self.product_name,
            category: self.category,
            image: self.image,
            quantity,
            purchase_price,
            sales_price,
            total_price: line_total(quantity, purchase_price),
        })
    }
}

/// PUT /purchase/{id} takes the same fields as a purchase event.
pub type UpdatePurchaseRequest = PurchaseEventRequest;

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PurchaseResponse {
    Inserted(InsertOneResult),
    Updated(MessageResponse),
}

impl From<&ReconcileOutcome> for PurchaseResponse {
    fn from(outcome: &ReconcileOutcome) -> Self {
        match outcome.purchase {
            StockChange::Created(id) => PurchaseResponse::Inserted(InsertOneResult::new(id)),
            StockChange::Incremented(_) => PurchaseResponse::Updated(MessageResponse {
                message: "Purchase updated successfully",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn acme_widget(quantity: &str) -> PurchaseEventRequest {
        serde_json::from_value(json!({
            "supplier_name": "Acme",
            "product_name": "Widget",
            "category": "Tools",
            "quantity": quantity,
            "purchase_price": "10",
            "sales_price": "15"
        }))
        .unwrap()
    }

    #[test]
    fn event_is_normalized_before_totals() {
        let event = acme_widget("5").normalize().unwrap();
        assert_eq!(event.quantity, 5);
        assert_eq!(event.purchase_price, 10);
        assert_eq!(event.sales_price, 15);
        assert_eq!(event.total_price, 50);
        assert_eq!(event.image, None);
    }

    #[test]
    fn fractional_quantity_truncates() {
        let event = acme_widget("3.9").normalize().unwrap();
        assert_eq!(event.quantity, 3);
        assert_eq!(event.total_price, 30);
    }

    #[test]
    fn garbage_quantity_fails_validation() {
        assert!(matches!(acme_widget("many").normalize(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn missing_supplier_is_a_schema_error() {
        let parsed: Result<PurchaseEventRequest, _> = serde_json::from_value(json!({
            "product_name": "Widget",
            "quantity": 1,
            "purchase_price": 1,
            "sales_price": 1
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn new_purchase_answers_with_insert_result() {
        let purchase_id = Uuid::new_v4();
        let outcome = ReconcileOutcome {
            product: StockChange::Incremented(Uuid::new_v4()),
            purchase: StockChange::Created(purchase_id),
        };
        let body = serde_json::to_value(PurchaseResponse::from(&outcome)).unwrap();
        assert_eq!(body, json!({ "acknowledged": true, "insertedId": purchase_id }));
    }

    #[test]
    fn repeated_purchase_answers_with_message() {
        let outcome = ReconcileOutcome {
            product: StockChange::Incremented(Uuid::new_v4()),
            purchase: StockChange::Incremented(Uuid::new_v4()),
        };
        let body = serde_json::to_value(PurchaseResponse::from(&outcome)).unwrap();
        assert_eq!(body, json!({ "message": "Purchase updated successfully" }));
    }
}
