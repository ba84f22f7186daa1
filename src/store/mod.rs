mod memory;
mod postgres;

pub use memory::InMemorySubmissionStore;
pub use postgres::PgSubmissionStore;

use crate::models::Submission;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence for submissions.
///
/// Implementations own the records once inserted; callers never cache them.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persists `submission` and returns the record as stored.
    async fn insert(&self, submission: Submission) -> anyhow::Result<Submission>;

    /// All records, most recent `date` first.
    async fn list(&self) -> anyhow::Result<Vec<Submission>>;

    async fn find(&self, id: Uuid) -> anyhow::Result<Option<Submission>>;

    /// Returns `false` when no record had that id.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
}
