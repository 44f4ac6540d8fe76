// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{error, instrument};
use uuid::Uuid;
use crate::dtos::common::{DeleteResult, UpdateResult};
use crate::dtos::product::UpdateProductRequest;
use crate::dtos::purchase::{PurchaseEventRequest, PurchaseResponse};
use crate::error::{map_unique_violation, AppError};
use crate::handlers::purchase::reconcile;
use crate::models::product::{self, Product};
use crate::services::query::{build_list_query, ListParams, ListTarget};
use crate::state::AppState;

const LIST: ListTarget = ListTarget {
    table: "products",
    columns: product::COLUMNS,
    search_column: "product_name",
    sort_column: "recorded_at",
    filter_by_category: true,
};

// GET /product - search by product_name, optional exact category
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Product>>, AppError> {
    match build_list_query(&LIST, &params)
        .build_query_as::<Product>()
        .fetch_all(&state.db_pool)
        .await {
        Ok(products) => Ok(Json(products)),
        Err(e) => {
            error!(?e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET /product/:id
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Option<Product>>, AppError> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE id = $1",
        product::COLUMNS
    ))
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?;

    Ok(Json(product))
}

// POST /product - same stock reconciliation as POST /purchase
pub async fn create_product(
    state: State<AppState>,
    payload: Json<PurchaseEventRequest>,
) -> Result<Json<PurchaseResponse>, AppError> {
    reconcile(state, payload).await
}

// PUT /product/:id - upsert by id
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<UpdateResult>, AppError> {
    let update = payload.normalize()?;

    let inserted = sqlx::query_scalar::<_, bool>(
        "INSERT INTO products
            (id, product_name, category, quantity, supplier_name,
             purchase_price, sales_price, total_price)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         ON CONFLICT (id) DO UPDATE SET
            product_name = EXCLUDED.product_name,
            category = EXCLUDED.category,
            quantity = EXCLUDED.quantity,
            supplier_name = EXCLUDED.supplier_name,
            purchase_price = EXCLUDED.purchase_price,
            sales_price = EXCLUDED.sales_price,
            total_price = EXCLUDED.total_price
         RETURNING (xmax = 0) AS inserted"
    )
    .bind(id)
    .bind(&update.product_name)
    .bind(&update.category)
    .bind(update.quantity)
    .bind(&update.supplier_name)
    .bind(update.purchase_price)
    .bind(update.sales_price)
    .bind(update.total_price)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| map_unique_violation(e, "A product with this name and category already exists"))?;

    Ok(Json(UpdateResult::upsert(id, inserted)))
}

// DELETE /product/:id - purchases for the product are left alone
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    Ok(Json(DeleteResult::new(result.rows_affected())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn put(pool: &sqlx::PgPool, id: Uuid, body: serde_json::Value) -> Result<UpdateResult, AppError> {
        let payload: UpdateProductRequest = serde_json::from_value(body).unwrap();
        update_product(Path(id), State(AppState::new(pool.clone())), Json(payload))
            .await
            .map(|json| json.0)
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL"]
    async fn put_inserts_then_updates_in_place(pool: sqlx::PgPool) {
        let id = Uuid::new_v4();
        let body = json!({ "product_name": "Widget", "category": "Tools",
                           "quantity": "3", "purchase_price": 10, "sales_price": 15 });

        let first = put(&pool, id, body).await.unwrap();
        assert_eq!(first, UpdateResult::upsert(id, true));
        assert_eq!(first.upserted_id, Some(id));

        let second = put(&pool, id, json!({ "product_name": "Widget", "category": "Tools",
                                            "quantity": 5, "purchase_price": "4", "sales_price": 6 }))
            .await
            .unwrap();
        assert_eq!(second.matched_count, 1);
        assert_eq!(second.upserted_count, 0);

        let stored = get_product(Path(id), State(AppState::new(pool))).await.unwrap().0.unwrap();
        assert_eq!(stored.quantity, 5);
        assert_eq!(stored.total_price, 20);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL"]
    async fn put_onto_an_existing_name_and_category_conflicts(pool: sqlx::PgPool) {
        let widget = json!({ "product_name": "Widget", "category": "Tools",
                             "quantity": 1, "purchase_price": 1, "sales_price": 1 });
        put(&pool, Uuid::new_v4(), widget.clone()).await.unwrap();

        let gadget = Uuid::new_v4();
        put(&pool, gadget, json!({ "product_name": "Gadget", "category": "Tools",
                                   "quantity": 1, "purchase_price": 1, "sales_price": 1 }))
            .await
            .unwrap();

        let renamed = put(&pool, gadget, widget).await;
        assert!(matches!(renamed, Err(AppError::Conflict(_))));
        assert_eq!(renamed.err().map(|e| e.status()), Some(axum::http::StatusCode::CONFLICT));
    }
}
