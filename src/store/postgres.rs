use crate::configuration::DatabaseSettings;
use crate::models::{NewSubmissionRecord, Submission};
use crate::store::SubmissionStore;
use anyhow::Context;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use std::time::Duration;
use uuid::Uuid;

embed_migrations!();

type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Submissions stored in PostgreSQL through a diesel connection pool.
///
/// Diesel is blocking, so every query runs on tokio's blocking thread pool.
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    /// Builds the pool without opening a connection. An unreachable or
    /// misconfigured database therefore does not stop the server from
    /// starting; each store call fails instead.
    pub fn connect_lazy(settings: &DatabaseSettings) -> Self {
        let manager = ConnectionManager::<PgConnection>::new(settings.connection_string());
        let pool = Pool::builder()
            .max_size(settings.max_connections)
            .connection_timeout(Duration::from_secs(settings.connect_timeout_seconds))
            .build_unchecked(manager);
        Self { pool }
    }

    #[tracing::instrument(name = "Running database migrations", skip(self))]
    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        self.with_connection(|conn| {
            embedded_migrations::run(conn).context("Failed to run database migrations.")
        })
        .await
    }

    async fn with_connection<T, F>(&self, query: F) -> anyhow::Result<T>
    where
        F: FnOnce(&PgConnection) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool
                .get()
                .context("Failed to acquire a database connection from the pool.")?;
            query(&*conn)
        })
        .await
        .context("The database task was cancelled or panicked.")?
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    #[tracing::instrument(name = "Saving new submission in the database", skip(self, submission))]
    async fn insert(&self, submission: Submission) -> anyhow::Result<Submission> {
        use crate::schema::submissions;
        self.with_connection(move |conn| {
            diesel::insert_into(submissions::table)
                .values(NewSubmissionRecord::from(&submission))
                .get_result::<Submission>(conn)
                .map_err(|e| {
                    tracing::error!("Failed to execute query: {:?}", e);
                    e
                })
                .context("Failed to insert the submission.")
        })
        .await
    }

    #[tracing::instrument(name = "Loading all submissions", skip(self))]
    async fn list(&self) -> anyhow::Result<Vec<Submission>> {
        use crate::schema::submissions::dsl::*;
        self.with_connection(|conn| {
            submissions
                .order(date.desc())
                .load::<Submission>(conn)
                .context("Failed to load submissions.")
        })
        .await
    }

    #[tracing::instrument(name = "Loading a submission by id", skip(self))]
    async fn find(&self, submission_id: Uuid) -> anyhow::Result<Option<Submission>> {
        use crate::schema::submissions::dsl::*;
        self.with_connection(move |conn| {
            submissions
                .find(submission_id)
                .first::<Submission>(conn)
                .optional()
                .context("Failed to load the submission.")
        })
        .await
    }

    #[tracing::instrument(name = "Deleting a submission by id", skip(self))]
    async fn delete(&self, submission_id: Uuid) -> anyhow::Result<bool> {
        use crate::schema::submissions::dsl::*;
        self.with_connection(move |conn| {
            diesel::delete(submissions.find(submission_id))
                .execute(conn)
                .map(|deleted| deleted > 0)
                .context("Failed to delete the submission.")
        })
        .await
    }
}
