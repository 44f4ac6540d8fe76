use axum::{Router, routing::{get, patch}};
use crate::state::AppState;
use crate::handlers::user::{
    delete_user, get_user_by_email, list_users, patch_user, upsert_user,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).put(upsert_user))
        // GET looks the segment up as an email, DELETE as an id
        .route("/users/{key}", get(get_user_by_email).delete(delete_user))
        .route("/users/update/{email}", patch(patch_user))
}
