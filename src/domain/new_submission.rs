use crate::domain::{RequiredText, SubmissionEmail, SubmissionForm};

pub const MISSING_FIELDS: &str = "All fields required";
pub const INVALID_EMAIL: &str = "Invalid email";

/// A submission whose fields have passed validation but which has not been
/// stored yet, so it has neither an id nor a date.
#[derive(Debug)]
pub struct NewSubmission {
    pub fullname: RequiredText,
    pub email: SubmissionEmail,
    pub phone: RequiredText,
    pub service: RequiredText,
    pub message: RequiredText,
}

impl TryFrom<SubmissionForm> for NewSubmission {
    type Error = String;

    /// Presence of all five fields is checked before the email shape.
    fn try_from(form: SubmissionForm) -> Result<Self, Self::Error> {
        let fields = (
            RequiredText::parse(form.fullname),
            RequiredText::parse(form.email),
            RequiredText::parse(form.phone),
            RequiredText::parse(form.service),
            RequiredText::parse(form.message),
        );
        let (fullname, email, phone, service, message) = match fields {
            (Some(fullname), Some(email), Some(phone), Some(service), Some(message)) => {
                (fullname, email, phone, service, message)
            }
            _ => return Err(MISSING_FIELDS.to_string()),
        };
        let email = SubmissionEmail::parse(email).map_err(|_| INVALID_EMAIL.to_string())?;
        Ok(NewSubmission {
            fullname,
            email,
            phone,
            service,
            message,
        })
    }
}
