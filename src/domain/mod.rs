mod new_submission;
mod required_text;
mod submission_email;
mod submission_form;

pub use new_submission::NewSubmission;
pub use required_text::RequiredText;
pub use submission_email::SubmissionEmail;
pub use submission_form::SubmissionForm;
