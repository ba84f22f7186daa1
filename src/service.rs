use crate::domain::{NewSubmission, SubmissionForm};
use crate::models::Submission;
use crate::store::SubmissionStore;
use anyhow::Context;
use chrono::{SubsecRound, Utc};
use rocket::http::Status;
use std::sync::Arc;
use uuid::Uuid;

/// Create, list, fetch and delete contact-form submissions.
///
/// Holds no state of its own besides the store handle; every read goes to
/// the store.
pub struct SubmissionService {
    store: Arc<dyn SubmissionStore>,
}

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(String),
    #[error("Submission not found")]
    NotFound,
    #[error("Invalid submission id: {0}")]
    InvalidIdentifier(String),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl SubmissionError {
    pub fn status(&self) -> Status {
        match self {
            SubmissionError::Validation(_) => Status::BadRequest,
            SubmissionError::NotFound => Status::NotFound,
            SubmissionError::InvalidIdentifier(_) => Status::NotFound,
            SubmissionError::Storage(_) => Status::InternalServerError,
        }
    }

    /// The text sent back to the client. Storage failures carry their whole
    /// context chain.
    pub fn client_message(&self) -> String {
        match self {
            SubmissionError::Storage(e) => format!("{:#}", e),
            other => other.to_string(),
        }
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

impl SubmissionService {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// Validates `form` and stores it under a fresh id and the current time.
    /// Nothing reaches the store when validation fails.
    #[tracing::instrument(
        name = "Creating a submission",
        skip(self, form),
        fields(submission_email = ?form.email, submission_service = ?form.service)
    )]
    pub async fn create(&self, form: SubmissionForm) -> Result<Submission, SubmissionError> {
        let new_submission: NewSubmission =
            form.try_into().map_err(SubmissionError::Validation)?;
        let submission = stamp(new_submission);
        let stored = self
            .store
            .insert(submission)
            .await
            .context("Failed to save the new submission.")?;
        Ok(stored)
    }

    #[tracing::instrument(name = "Listing submissions", skip(self))]
    pub async fn list(&self) -> Result<Vec<Submission>, SubmissionError> {
        let submissions = self
            .store
            .list()
            .await
            .context("Failed to fetch submissions.")?;
        Ok(submissions)
    }

    #[tracing::instrument(name = "Fetching a submission", skip(self))]
    pub async fn get(&self, id: &str) -> Result<Submission, SubmissionError> {
        let id = parse_id(id)?;
        self.store
            .find(id)
            .await
            .context("Failed to fetch the submission.")?
            .ok_or(SubmissionError::NotFound)
    }

    #[tracing::instrument(name = "Deleting a submission", skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), SubmissionError> {
        let id = parse_id(id)?;
        let deleted = self
            .store
            .delete(id)
            .await
            .context("Failed to delete the submission.")?;
        match deleted {
            true => Ok(()),
            false => Err(SubmissionError::NotFound),
        }
    }
}

fn parse_id(id: &str) -> Result<Uuid, SubmissionError> {
    Uuid::parse_str(id).map_err(|_| SubmissionError::InvalidIdentifier(id.to_string()))
}

/// Stored timestamps have microsecond precision, so the assigned date is
/// truncated to match what a later read returns.
fn stamp(new_submission: NewSubmission) -> Submission {
    Submission {
        id: Uuid::new_v4(),
        fullname: new_submission.fullname.into(),
        email: new_submission.email.into(),
        phone: new_submission.phone.into(),
        service: new_submission.service.into(),
        message: new_submission.message.into(),
        date: Utc::now().trunc_subsecs(6),
    }
}
