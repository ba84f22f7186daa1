/// A contact form as posted by a client.
///
/// Every field is optional on the wire so that a missing field surfaces as a
/// validation error instead of a body deserialization failure.
#[derive(Debug, Default, serde::Deserialize)]
pub struct SubmissionForm {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub service: Option<String>,
    pub message: Option<String>,
}
