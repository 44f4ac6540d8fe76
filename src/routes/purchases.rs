use axum::{routing::get, Router};
use crate::handlers::purchase::{
    delete_purchase, get_purchase, list_purchases, reconcile, update_purchase,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/purchase", get(list_purchases).post(reconcile))
        .route("/purchase/{id}", get(get_purchase).put(update_purchase).delete(delete_purchase))
}
