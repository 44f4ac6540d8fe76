use axum::{extract::{Path, Query, State}, Json};
use uuid::Uuid;
use crate::state::AppState;
use crate::error::AppError;
use crate::dtos::common::{DeleteResult, InsertOneResult, UpdateResult};
use crate::dtos::sale::{CreateSaleRequest, SaleAmounts, UpdateSaleRequest};
use crate::models::sale::{self, Sale};
use crate::services::query::{build_list_query, ListParams, ListTarget};

const LIST: ListTarget = ListTarget {
    table: "sales",
    columns: sale::COLUMNS,
    search_column: "customer_name",
    sort_column: "recorded_at",
    filter_by_category: false,
};

pub async fn list_sales(
    State(AppState { db_pool }): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Sale>>, AppError> {
    let sales = build_list_query(&LIST, &params)
        .build_query_as::<Sale>()
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(sales))
}

pub async fn get_sale(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Sale>>, AppError> {
    let sale = sqlx::query_as::<_, Sale>(&format!("SELECT {} FROM sales WHERE id = $1", sale::COLUMNS))
        .bind(id)
        .fetch_optional(&db_pool)
        .await?;

    Ok(Json(sale))
}

pub async fn create_sale(
    State(AppState { db_pool }): State<AppState>,
    Json(req): Json<CreateSaleRequest>,
) -> Result<Json<InsertOneResult>, AppError> {
    let amounts = SaleAmounts::from_raw(&req.quantity, &req.price)?;

    let id = sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO sales (id, customer_name, category, product_name, price, quantity, total_price)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id"#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.customer_name)
    .bind(&req.category)
    .bind(&req.product_name)
    .bind(amounts.price)
    .bind(amounts.quantity)
    .bind(amounts.total_price)
    .fetch_one(&db_pool)
    .await?;

    tracing::info!(%id, total = amounts.total_price, "Sale recorded");
    Ok(Json(InsertOneResult::new(id)))
}

pub async fn update_sale(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSaleRequest>,
) -> Result<Json<UpdateResult>, AppError> {
    let amounts = SaleAmounts::from_raw(&req.quantity, &req.price)?;

    // Total is recalculated, never taken from the body
    let inserted = sqlx::query_scalar::<_, bool>(
        r#"INSERT INTO sales
            (id, customer_name, customer_phone, product_name, category, quantity, price, total_price)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (id) DO UPDATE SET
            customer_name = EXCLUDED.customer_name,
            customer_phone = EXCLUDED.customer_phone,
            product_name = EXCLUDED.product_name,
            category = EXCLUDED.category,
            quantity = EXCLUDED.quantity,
            price = EXCLUDED.price,
            total_price = EXCLUDED.total_price
        RETURNING (xmax = 0) AS inserted"#,
    )
    .bind(id)
    .bind(&req.customer_name)
    .bind(&req.customer_phone)
    .bind(&req.product_name)
    .bind(&req.category)
    .bind(amounts.quantity)
    .bind(amounts.price)
    .bind(amounts.total_price)
    .fetch_one(&db_pool)
    .await?;

    Ok(Json(UpdateResult::upsert(id, inserted)))
}

pub async fn delete_sale(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = sqlx::query("DELETE FROM sales WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await?;

    Ok(Json(DeleteResult::new(result.rows_affected())))
}
