// src/handlers/purchase.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{error, instrument};
use uuid::Uuid;
use crate::dtos::common::{DeleteResult, UpdateResult};
use crate::dtos::purchase::{PurchaseEventRequest, PurchaseResponse, UpdatePurchaseRequest};
use crate::error::{map_unique_violation, AppError};
use crate::models::purchase::{self, Purchase};
use crate::services::inventory::record_purchase;
use crate::services::query::{build_list_query, ListParams, ListTarget};
use crate::state::AppState;

const LIST: ListTarget = ListTarget {
    table: "purchases",
    columns: purchase::COLUMNS,
    search_column: "supplier_name",
    sort_column: "recorded_at",
    filter_by_category: false,
};

// GET /purchase - search by supplier_name
#[instrument(skip(state))]
pub async fn list_purchases(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Purchase>>, AppError> {
    let purchases = build_list_query(&LIST, &params)
        .build_query_as::<Purchase>()
        .fetch_all(&state.db_pool)
        .await?;

    Ok(Json(purchases))
}

// POST /purchase - add stock to the product and record the purchase
#[instrument(skip(state, payload))]
pub async fn reconcile(
    State(state): State<AppState>,
    Json(payload): Json<PurchaseEventRequest>,
) -> Result<Json<PurchaseResponse>, AppError> {
    let event = payload.normalize()?;

    match record_purchase(&state.db_pool, &event).await {
        Ok(outcome) => Ok(Json(PurchaseResponse::from(&outcome))),
        Err(e) => {
            error!(?e, "Error processing purchase");
            Err(AppError::failed("Failed to add purchase"))
        }
    }
}

// GET /purchase/:id
#[instrument(skip(state))]
pub async fn get_purchase(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Option<Purchase>>, AppError> {
    let purchase = sqlx::query_as::<_, Purchase>(&format!(
        "SELECT {} FROM purchases WHERE id = $1",
        purchase::COLUMNS
    ))
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?;

    Ok(Json(purchase))
}

// PUT /purchase/:id - upsert by id
#[instrument(skip(state, payload))]
pub async fn update_purchase(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdatePurchaseRequest>,
) -> Result<Json<UpdateResult>, AppError> {
    let update = payload.normalize()?;

    let inserted = sqlx::query_scalar::<_, bool>(
        "INSERT INTO purchases
            (id, supplier_name, product_name, category, image, quantity,
             purchase_price, sales_price, total_price)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         ON CONFLICT (id) DO UPDATE SET
            supplier_name = EXCLUDED.supplier_name,
            product_name = EXCLUDED.product_name,
            category = EXCLUDED.category,
            image = EXCLUDED.image,
            quantity = EXCLUDED.quantity,
            purchase_price = EXCLUDED.purchase_price,
            sales_price = EXCLUDED.sales_price,
            total_price = EXCLUDED.total_price
         RETURNING (xmax = 0) AS inserted"
    )
    .bind(id)
    .bind(&update.supplier_name)
    .bind(&update.product_name)
    .bind(&update.category)
    .bind(&update.image)
    .bind(update.quantity)
    .bind(update.purchase_price)
    .bind(update.sales_price)
    .bind(update.total_price)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| map_unique_violation(e, "A purchase for this product, supplier and category already exists"))?;

    Ok(Json(UpdateResult::upsert(id, inserted)))
}

// DELETE /purchase/:id
#[instrument(skip(state))]
pub async fn delete_purchase(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = sqlx::query("DELETE FROM purchases WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    Ok(Json(DeleteResult::new(result.rows_affected())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn purchase_body(supplier: &str) -> UpdatePurchaseRequest {
        serde_json::from_value(json!({
            "supplier_name": supplier, "product_name": "Widget", "category": "Tools",
            "quantity": 2, "purchase_price": "10", "sales_price": 15
        }))
        .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL"]
    async fn put_to_another_purchases_natural_key_conflicts(pool: sqlx::PgPool) {
        let state = AppState::new(pool);
        let acme = Uuid::new_v4();
        let inserted = update_purchase(Path(acme), State(state.clone()), Json(purchase_body("Acme")))
            .await
            .unwrap()
            .0;
        assert_eq!(inserted, UpdateResult::upsert(acme, true));

        let globex = Uuid::new_v4();
        update_purchase(Path(globex), State(state.clone()), Json(purchase_body("Globex")))
            .await
            .unwrap();

        let moved = update_purchase(Path(globex), State(state.clone()), Json(purchase_body("Acme"))).await;
        assert!(matches!(moved, Err(AppError::Conflict(_))));

        let untouched = get_purchase(Path(globex), State(state)).await.unwrap().0.unwrap();
        assert_eq!(untouched.supplier_name, "Globex");
    }
}
