use crate::common::error::{PayloadResult, PushError};
use crate::common::validation::require_non_blank;

/// Immutable alert content: an optional title and a mandatory body.
///
/// This is the strict construction path. `PushNotification::add_alert`
/// accepts a missing body and deliberately bypasses this check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushAlert {
    title: Option<String>,
    body: String,
}

impl PushAlert {
    pub fn new(title: Option<&str>, body: &str) -> PayloadResult<Self> {
        require_non_blank("alert body", body)?;
        Ok(Self {
            title: title.map(str::to_string),
            body: body.to_string(),
        })
    }

    pub fn body_only(body: &str) -> PayloadResult<Self> {
        Self::new(None, body)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
