use crate::{data::student::StudentSummary, error::RosterResult, state::RosterState};
use axum::{Json, extract::State};
use std::collections::BTreeMap;

///`GET /students` - every student, keyed by id
///
///json object keys are always strings, so `1` comes out as `"1"`
pub async fn get_students(
    State(state): State<RosterState>,
) -> RosterResult<Json<BTreeMap<i32, StudentSummary>>> {
    let students = state.store().get_all().await?;

    Ok(Json(
        students
            .into_iter()
            .map(|student| (student.id, student.summary()))
            .collect(),
    ))
}
