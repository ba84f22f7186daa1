/// A caller-supplied text field that must be present and not blank.
///
/// The original value is kept as-is; whitespace only counts against it when
/// there is nothing else.
#[derive(Debug)]
pub struct RequiredText(String);

impl RequiredText {
    pub fn parse(s: Option<String>) -> Option<RequiredText> {
        match s {
            Some(s) if !s.trim().is_empty() => Some(Self(s)),
            _ => None,
        }
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RequiredText> for String {
    fn from(text: RequiredText) -> Self {
        text.0
    }
}
