use crate::{
    data::student::Student,
    error::{MakeQuerySnafu, MigrateSnafu, OpenDatabaseSnafu, RosterResult},
    store::StudentStore,
};
use async_trait::async_trait;
use snafu::ResultExt;
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

#[derive(Debug)]
pub struct PostgresStudentStore {
    pool: Pool<Postgres>,
}

impl PostgresStudentStore {
    pub async fn new(options: PgPoolOptions, url: &str) -> RosterResult<Self> {
        let pool = options.connect(url).await.context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl StudentStore for PostgresStudentStore {
    async fn get_by_id(&self, id: i32) -> RosterResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, course FROM public.students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn get_all(&self) -> RosterResult<Vec<Student>> {
        sqlx::query_as::<_, Student>("SELECT id, first_name, last_name, course FROM public.students")
            .fetch_all(&self.pool)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert(&self, student: Student) -> RosterResult<()> {
        sqlx::query(
            "INSERT INTO public.students (id, first_name, last_name, course) VALUES ($1, $2, $3, $4)",
        )
        .bind(student.id)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.course)
        .execute(&self.pool)
        .await
        .context(MakeQuerySnafu)?;

        Ok(())
    }

    async fn update(&self, student: Student) -> RosterResult<()> {
        sqlx::query(
            "UPDATE public.students SET first_name = $2, last_name = $3, course = $4 WHERE id = $1",
        )
        .bind(student.id)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.course)
        .execute(&self.pool)
        .await
        .context(MakeQuerySnafu)?;

        Ok(())
    }

    async fn remove(&self, id: i32) -> RosterResult<()> {
        sqlx::query("DELETE FROM public.students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(MakeQuerySnafu)?;

        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
