use axum::{routing::get, Router};
use crate::handlers::category::{create_category, delete_category, get_category, list_categories};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/category", get(list_categories).post(create_category))
        .route("/category/{id}", get(get_category).delete(delete_category))
}
