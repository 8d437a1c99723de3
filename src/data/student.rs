use crate::error::{MissingFieldSnafu, RosterResult};
use serde::{Deserialize, Serialize};
use snafu::OptionExt;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub course: String,
}

///value half of the `GET /students` mapping - the id is the key, so it stays out
#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub first_name: String,
    pub last_name: String,
    pub course: String,
}

impl Student {
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            course: self.course.clone(),
        }
    }
}

///body of a `POST`/`PUT` - every field optional so we can name the one that's missing,
///rather than letting serde reject the whole body
#[derive(Debug, Default, Deserialize)]
pub struct StudentPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub course: Option<String>,
}

impl StudentPayload {
    pub fn into_new_student(self, id: i32) -> RosterResult<Student> {
        let Self {
            first_name,
            last_name,
            course,
        } = self;

        Ok(Student {
            id,
            first_name: first_name.context(MissingFieldSnafu {
                field: "first_name",
            })?,
            last_name: last_name.context(MissingFieldSnafu { field: "last_name" })?,
            course: course.context(MissingFieldSnafu { field: "course" })?,
        })
    }

    ///update semantics: only the fields actually supplied overwrite the entity
    pub fn apply_to(self, student: &mut Student) {
        if let Some(first_name) = self.first_name {
            student.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            student.last_name = last_name;
        }
        if let Some(course) = self.course {
            student.course = course;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    fn full_payload() -> StudentPayload {
        StudentPayload {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            course: Some("Math".to_string()),
        }
    }

    #[test]
    fn full_payload_becomes_a_student() {
        let student = full_payload().into_new_student(1).unwrap();
        assert_eq!(
            student,
            Student {
                id: 1,
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                course: "Math".to_string(),
            }
        );
    }

    #[test]
    fn missing_course_names_the_field() {
        let payload = StudentPayload {
            course: None,
            ..full_payload()
        };

        match payload.into_new_student(1) {
            Err(RosterError::MissingField { field }) => assert_eq!(field, "course"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn partial_update_leaves_other_fields_alone() {
        let mut student = full_payload().into_new_student(1).unwrap();

        StudentPayload {
            course: Some("CS".to_string()),
            ..StudentPayload::default()
        }
        .apply_to(&mut student);

        assert_eq!(student.first_name, "Ada");
        assert_eq!(student.last_name, "Lovelace");
        assert_eq!(student.course, "CS");
    }

    #[test]
    fn empty_update_changes_nothing() {
        let mut student = full_payload().into_new_student(1).unwrap();
        let before = student.clone();

        StudentPayload::default().apply_to(&mut student);

        assert_eq!(student, before);
    }
}
