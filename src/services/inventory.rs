// src/services/inventory.rs
//! Stock reconciliation for incoming purchases.
//!
//! A purchase event touches two tables: the product keyed by
//! (product_name, category) gains stock, and the purchase keyed by
//! (product_name, supplier_name, category) gains quantity and takes the
//! event's total and timestamp. Both writes are single `ON CONFLICT` upserts
//! run in one transaction, so concurrent events for the same key cannot lose
//! increments and a failure leaves neither table changed.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use tracing::{info, instrument};
use uuid::Uuid;

/// A purchase with its numeric fields already coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseEvent {
    pub supplier_name: String,
    pub product_name: String,
    pub category: String,
    pub image: Option<String>,
    pub quantity: i64,
    pub purchase_price: i64,
    pub sales_price: i64,
    pub total_price: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockChange {
    Created(Uuid),
    Incremented(Uuid),
}

impl StockChange {
    fn from_upsert((id, inserted): (Uuid, bool)) -> Self {
        if inserted {
            StockChange::Created(id)
        } else {
            StockChange::Incremented(id)
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            StockChange::Created(id) | StockChange::Incremented(id) => *id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub product: StockChange,
    pub purchase: StockChange,
}

#[instrument(skip(pool, event), fields(product = %event.product_name, supplier = %event.supplier_name))]
pub async fn record_purchase(pool: &PgPool, event: &PurchaseEvent) -> Result<ReconcileOutcome, sqlx::Error> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;

    let product = upsert_product_stock(&mut tx, event, now).await?;
    let purchase = upsert_purchase_record(&mut tx, event, now).await?;

    tx.commit().await?;

    info!(
        product_id = %product.id(),
        purchase_id = %purchase.id(),
        ?product,
        ?purchase,
        quantity = event.quantity,
        "Purchase reconciled"
    );
    Ok(ReconcileOutcome { product, purchase })
}

// Existing products only gain quantity; prices and totals keep their first values.
async fn upsert_product_stock(
    conn: &mut PgConnection,
    event: &PurchaseEvent,
    now: DateTime<Utc>,
) -> Result<StockChange, sqlx::Error> {
    let row = sqlx::query_as::<_, (Uuid, bool)>(
        "INSERT INTO products
            (id, product_name, category, image, quantity, purchase_price,
             sales_price, total_price, supplier_name, recorded_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         ON CONFLICT ON CONSTRAINT products_natural_key
         DO UPDATE SET quantity = products.quantity + EXCLUDED.quantity
         RETURNING id, (xmax = 0) AS inserted"
    )
    .bind(Uuid::new_v4())
    .bind(&event.product_name)
    .bind(&event.category)
    .bind(&event.image)
    .bind(event.quantity)
    .bind(event.purchase_price)
    .bind(event.sales_price)
    .bind(event.total_price)
    .bind(&event.supplier_name)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    Ok(StockChange::from_upsert(row))
}

async fn upsert_purchase_record(
    conn: &mut PgConnection,
    event: &PurchaseEvent,
    now: DateTime<Utc>,
) -> Result<StockChange, sqlx::Error> {
    let row = sqlx::query_as::<_, (Uuid, bool)>(
        "INSERT INTO purchases
            (id, supplier_name, product_name, category, image, quantity,
             purchase_price, sales_price, total_price, recorded_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         ON CONFLICT ON CONSTRAINT purchases_natural_key
         DO UPDATE SET quantity = purchases.quantity + EXCLUDED.quantity,
                       total_price = EXCLUDED.total_price,
                       recorded_at = EXCLUDED.recorded_at
         RETURNING id, (xmax = 0) AS inserted"
    )
    .bind(Uuid::new_v4())
    .bind(&event.supplier_name)
    .bind(&event.product_name)
    .bind(&event.category)
    .bind(&event.image)
    .bind(event.quantity)
    .bind(event.purchase_price)
    .bind(event.sales_price)
    .bind(event.total_price)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    Ok(StockChange::from_upsert(row))
}
