use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse DB port"))]
    ParsePort { source: ParseIntError },
    #[snafu(display("Unable to find student with id: {}", id))]
    MissingStudent { id: i32 },
    #[snafu(display("Student id {} is already taken", id))]
    StudentIdTaken { id: i32 },
    #[snafu(display("{} is required", field))]
    MissingField { field: &'static str },
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let status_code = match &self {
            Self::OpenDatabase { .. } | Self::MigrateError { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::BadEnvVar { .. } | Self::ParsePort { .. } => ISE,
            Self::MissingStudent { .. } => NF,
            Self::StudentIdTaken { .. } => StatusCode::CONFLICT,
            Self::MissingField { .. } => BI,
        };

        error!(?self, "Error!");
        (status_code, Json(json!({"message": self.to_string()}))).into_response()
    }
}
