use crate::models::Submission;
use crate::store::SubmissionStore;
use anyhow::anyhow;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Keeps submissions in insertion order in process memory.
#[derive(Default)]
pub struct InMemorySubmissionStore {
    records: Mutex<Vec<Submission>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> anyhow::Result<MutexGuard<'_, Vec<Submission>>> {
        self.records
            .lock()
            .map_err(|_| anyhow!("The in-memory submission store is poisoned."))
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn insert(&self, submission: Submission) -> anyhow::Result<Submission> {
        let mut records = self.records()?;
        if records.iter().any(|r| r.id == submission.id) {
            return Err(anyhow!("A submission with id {} already exists.", submission.id));
        }
        records.push(submission.clone());
        Ok(submission)
    }

    async fn list(&self) -> anyhow::Result<Vec<Submission>> {
        // Later inserts come first among records sharing a date.
        let mut submissions: Vec<Submission> = self.records()?.iter().rev().cloned().collect();
        submissions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(submissions)
    }

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<Submission>> {
        Ok(self.records()?.iter().find(|r| r.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut records = self.records()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }
}
