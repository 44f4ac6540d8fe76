use axum::{extract::{Path, State}, Json};
use tracing::info;
use uuid::Uuid;
use crate::dtos::common::{DeleteResult, UpdateResult};
use crate::dtos::user::{PatchUserRequest, UpsertUserRequest, UpsertUserResponse};
use crate::error::AppError;
use crate::models::user::{self, User};
use crate::state::AppState;

pub async fn list_users(
    State(AppState { db_pool }): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users ORDER BY recorded_at",
        user::COLUMNS
    ))
    .fetch_all(&db_pool)
    .await?;

    Ok(Json(users))
}

// PUT /users: register on first sight, otherwise only a role change writes
pub async fn upsert_user(
    State(AppState { db_pool }): State<AppState>,
    Json(payload): Json<UpsertUserRequest>,
) -> Result<Json<UpsertUserResponse>, AppError> {
    if payload.email.trim().is_empty() {
        return Err(AppError::validation("Email required"));
    }

    let existing = find_by_email(&db_pool, &payload.email).await?;

    if let Some(existing) = existing {
        return match payload.requested_role() {
            Some(role) => {
                let result = sqlx::query(
                    "UPDATE users SET role = $2, recorded_at = now() WHERE email = $1"
                )
                .bind(&payload.email)
                .bind(role)
                .execute(&db_pool)
                .await?;

                info!(email = %payload.email, %role, "User role updated");
                Ok(Json(UpsertUserResponse::Written(UpdateResult::matched(result.rows_affected()))))
            }
            None => Ok(Json(UpsertUserResponse::Existing(existing))),
        };
    }

    // A concurrent registration of the same email lands on the conflict arm.
    let (id, inserted) = sqlx::query_as::<_, (Uuid, bool)>(
        "INSERT INTO users (id, email, name, role, recorded_at)
         VALUES ($1, $2, $3, $4, now())
         ON CONFLICT (email) DO UPDATE SET recorded_at = EXCLUDED.recorded_at
         RETURNING id, (xmax = 0) AS inserted"
    )
    .bind(Uuid::new_v4())
    .bind(&payload.email)
    .bind(&payload.name)
    .bind(payload.requested_role())
    .fetch_one(&db_pool)
    .await?;

    if inserted {
        info!(email = %payload.email, "User registered");
    }
    Ok(Json(UpsertUserResponse::Written(UpdateResult::upsert(id, inserted))))
}

pub async fn get_user_by_email(
    State(AppState { db_pool }): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Option<User>>, AppError> {
    Ok(Json(find_by_email(&db_pool, &email).await?))
}

// PATCH /users/update/:email - writes whichever fields were sent, always bumps the timestamp
pub async fn patch_user(
    State(AppState { db_pool }): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<PatchUserRequest>,
) -> Result<Json<UpdateResult>, AppError> {
    let result = sqlx::query(
        "UPDATE users SET
            name = COALESCE($2, name),
            role = COALESCE($3, role),
            recorded_at = now()
         WHERE email = $1"
    )
    .bind(&email)
    .bind(&payload.name)
    .bind(&payload.role)
    .execute(&db_pool)
    .await?;

    Ok(Json(UpdateResult::matched(result.rows_affected())))
}

pub async fn delete_user(
    State(AppState { db_pool }): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(&db_pool)
        .await?;

    Ok(Json(DeleteResult::new(result.rows_affected())))
}

async fn find_by_email(db_pool: &sqlx::PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE email = $1", user::COLUMNS))
        .bind(email)
        .fetch_optional(db_pool)
        .await
}
