use axum::{routing::get, Router};
use crate::handlers::dashboard::dashboard_stats;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard-stats", get(dashboard_stats))
}
