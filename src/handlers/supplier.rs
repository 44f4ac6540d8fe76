use axum::{extract::{Path, Query, State}, Json};
use uuid::Uuid;
use crate::state::AppState;
use crate::error::AppError;
use crate::dtos::common::{DeleteResult, InsertOneResult, UpdateResult};
use crate::dtos::supplier::SupplierRequest;
use crate::models::supplier::{self, Supplier};
use crate::services::query::{build_list_query, ListParams, ListTarget};

const LIST: ListTarget = ListTarget {
    table: "suppliers",
    columns: supplier::COLUMNS,
    search_column: "supplier_name",
    sort_column: "time_added",
    filter_by_category: false,
};

pub async fn list_suppliers(
    State(AppState { db_pool }): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Supplier>>, AppError> {
    let suppliers = build_list_query(&LIST, &params)
        .build_query_as::<Supplier>()
        .fetch_all(&db_pool)
        .await?;

    Ok(Json(suppliers))
}

pub async fn create_supplier(
    State(AppState { db_pool }): State<AppState>,
    Json(req): Json<SupplierRequest>,
) -> Result<Json<InsertOneResult>, AppError> {
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"INSERT INTO suppliers (id, supplier_name, phone, email, time_added)
        VALUES ($1, $2, $3, $4, now())
        RETURNING id"#,
    )
    .bind(Uuid::new_v4())
    .bind(req.supplier_name.trim())
    .bind(&req.phone)
    .bind(&req.email)
    .fetch_one(&db_pool)
    .await?;

    Ok(Json(InsertOneResult::new(id)))
}

pub async fn get_supplier(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Option<Supplier>>, AppError> {
    let supplier = sqlx::query_as::<_, Supplier>(&format!(
        "SELECT {} FROM suppliers WHERE id = $1",
        supplier::COLUMNS
    ))
    .bind(id)
    .fetch_optional(&db_pool)
    .await?;

    Ok(Json(supplier))
}

pub async fn update_supplier(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SupplierRequest>,
) -> Result<Json<UpdateResult>, AppError> {
    let inserted = sqlx::query_scalar::<_, bool>(
        r#"INSERT INTO suppliers (id, supplier_name, phone, email)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (id) DO UPDATE SET
            supplier_name = EXCLUDED.supplier_name,
            phone = EXCLUDED.phone,
            email = EXCLUDED.email
        RETURNING (xmax = 0) AS inserted"#,
    )
    .bind(id)
    .bind(req.supplier_name.trim())
    .bind(&req.phone)
    .bind(&req.email)
    .fetch_one(&db_pool)
    .await?;

    Ok(Json(UpdateResult::upsert(id, inserted)))
}

pub async fn delete_supplier(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await?;

    Ok(Json(DeleteResult::new(result.rows_affected())))
}
