// src/handlers/category.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{error, instrument};
use uuid::Uuid;
use crate::dtos::category::CreateCategoryRequest;
use crate::dtos::common::{DeleteResult, InsertOneResult};
use crate::error::AppError;
use crate::models::category::{self, Category};
use crate::services::query::{build_list_query, ListParams, ListTarget};
use crate::state::AppState;

const LIST: ListTarget = ListTarget {
    table: "categories",
    columns: category::COLUMNS,
    search_column: "name",
    sort_column: "start_date",
    filter_by_category: false,
};

// GET /category - search by name, sort by start_date
#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Category>>, AppError> {
    match build_list_query(&LIST, &params)
        .build_query_as::<Category>()
        .fetch_all(&state.db_pool)
        .await {
        Ok(categories) => Ok(Json(categories)),
        Err(e) => {
            error!(?e, "Failed to fetch categories");
            Err(e.into())
        }
    }
}

// GET /category/:id
#[instrument(skip(state))]
pub async fn get_category(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<Option<Category>>, AppError> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name, image_url, start_date FROM categories WHERE id = $1"
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?;

    Ok(Json(category))
}

// POST /category
#[instrument(skip(state, payload))]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<Json<InsertOneResult>, AppError> {
    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO categories (id, name, image_url, start_date)
         VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE))
         RETURNING id"
    )
    .bind(Uuid::new_v4())
    .bind(&payload.name)
    .bind(&payload.image_url)
    .bind(payload.start_date())
    .fetch_one(&state.db_pool)
    .await?;

    Ok(Json(InsertOneResult::new(id)))
}

// DELETE /category/:id - a missing id still answers 200 with deletedCount 0
#[instrument(skip(state))]
pub async fn delete_category(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    Ok(Json(DeleteResult::new(result.rows_affected())))
}
