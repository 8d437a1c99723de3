use crate::{data::student::Student, error::RosterResult, store::StudentStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

///map-backed store with the same contract as the postgres one, used by tests
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    rows: RwLock<BTreeMap<i32, Student>>,
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn get_by_id(&self, id: i32) -> RosterResult<Option<Student>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> RosterResult<Vec<Student>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn insert(&self, student: Student) -> RosterResult<()> {
        self.rows.write().await.insert(student.id, student);
        Ok(())
    }

    async fn update(&self, student: Student) -> RosterResult<()> {
        self.rows.write().await.insert(student.id, student);
        Ok(())
    }

    async fn remove(&self, id: i32) -> RosterResult<()> {
        self.rows.write().await.remove(&id);
        Ok(())
    }
}
