use crate::domain::RequiredText;

/// Only the shape is checked: the address has to contain an `@`.
#[derive(Debug)]
pub struct SubmissionEmail(String);

impl SubmissionEmail {
    pub fn parse(s: RequiredText) -> Result<SubmissionEmail, String> {
        if s.as_ref().contains('@') {
            Ok(Self(s.into()))
        } else {
            Err(format!("{} is not a valid email address.", s.as_ref()))
        }
    }
}

impl AsRef<str> for SubmissionEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SubmissionEmail> for String {
    fn from(email: SubmissionEmail) -> Self {
        email.0
    }
}
