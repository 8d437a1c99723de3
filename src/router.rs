use crate::{
    routes::{
        all_students::get_students,
        student::{delete_student, get_student, post_new_student, put_update_student},
    },
    state::RosterState,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub fn build_router(state: RosterState) -> Router {
    Router::new()
        .route(
            "/student/{id}",
            get(get_student)
                .post(post_new_student)
                .put(put_update_student)
                .delete(delete_student),
        )
        .route("/students", get(get_students))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
