use crate::schema::submissions;
use chrono::offset::Utc;
use chrono::DateTime;

/// A stored contact-form submission, as read back from the store and as
/// returned to clients.
#[derive(Debug, Clone, PartialEq, Queryable, serde::Serialize, serde::Deserialize)]
pub struct Submission {
    pub id: uuid::Uuid,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
    pub date: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "submissions"]
pub struct NewSubmissionRecord<'a> {
    pub id: &'a uuid::Uuid,
    pub fullname: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub service: &'a str,
    pub message: &'a str,
    pub date: &'a DateTime<Utc>,
}

impl<'a> From<&'a Submission> for NewSubmissionRecord<'a> {
    fn from(submission: &'a Submission) -> Self {
        NewSubmissionRecord {
            id: &submission.id,
            fullname: &submission.fullname,
            email: &submission.email,
            phone: &submission.phone,
            service: &submission.service,
            message: &submission.message,
            date: &submission.date,
        }
    }
}
