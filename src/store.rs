use crate::{data::student::Student, error::RosterResult};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod memory;
pub mod postgres;

///single source of truth for student rows
///
///handlers only ever talk to this, so the integration tests can swap the
///postgres store for [`memory::MemoryStudentStore`] without touching them
#[async_trait]
pub trait StudentStore: Debug + Send + Sync {
    async fn get_by_id(&self, id: i32) -> RosterResult<Option<Student>>;
    async fn get_all(&self) -> RosterResult<Vec<Student>>;
    async fn insert(&self, student: Student) -> RosterResult<()>;
    async fn update(&self, student: Student) -> RosterResult<()>;
    async fn remove(&self, id: i32) -> RosterResult<()>;
    async fn close(&self) {}
}
