use crate::{
    data::student::{Student, StudentPayload},
    error::{MissingStudentSnafu, RosterResult, StudentIdTakenSnafu},
    state::RosterState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use snafu::{OptionExt, ensure};

pub async fn get_student(
    State(state): State<RosterState>,
    Path(id): Path<i32>,
) -> RosterResult<Json<Student>> {
    let student = state
        .store()
        .get_by_id(id)
        .await?
        .context(MissingStudentSnafu { id })?;

    Ok(Json(student))
}

pub async fn post_new_student(
    State(state): State<RosterState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentPayload>,
) -> RosterResult<(StatusCode, Json<Student>)> {
    //validate before the existence check, so a missing field is reported even
    //when the id also happens to be taken
    let student = payload.into_new_student(id)?;

    ensure!(
        state.store().get_by_id(id).await?.is_none(),
        StudentIdTakenSnafu { id }
    );

    state.store().insert(student.clone()).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

pub async fn put_update_student(
    State(state): State<RosterState>,
    Path(id): Path<i32>,
    Json(payload): Json<StudentPayload>,
) -> RosterResult<Json<Student>> {
    let mut student = state
        .store()
        .get_by_id(id)
        .await?
        .context(MissingStudentSnafu { id })?;

    payload.apply_to(&mut student);
    state.store().update(student.clone()).await?;

    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Path(id): Path<i32>,
) -> RosterResult<Json<Student>> {
    let student = state
        .store()
        .get_by_id(id)
        .await?
        .context(MissingStudentSnafu { id })?;

    state.store().remove(id).await?;

    //last known values of the row that just went away
    Ok(Json(student))
}
