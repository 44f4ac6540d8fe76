use axum::{extract::{Query, State}, Json};
use tracing::{error, instrument};
use crate::dtos::dashboard::{DashboardQuery, DashboardStats};
use crate::error::AppError;
use crate::services::dashboard::{fetch_stats, GroupPeriod};
use crate::state::AppState;

// GET /dashboard-stats
#[instrument(skip(state))]
pub async fn dashboard_stats(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardStats>, AppError> {
    let period = GroupPeriod::from_param(query.period.as_deref());

    fetch_stats(&state.db_pool, period)
        .await
        .map(Json)
        .map_err(|e| {
            error!(?e, "Failed to fetch dashboard stats");
            AppError::failed("Failed to fetch dashboard stats")
        })
}
