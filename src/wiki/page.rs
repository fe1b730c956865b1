//! Page entity module

use super::title::Title;

/// One wiki article: a validated title plus its raw body bytes.
///
/// Pages are constructed per request and dropped once the response is
/// written; there is no cross-request cache.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: Title,
    pub body: Vec<u8>,
}

impl Page {
    pub const fn new(title: Title, body: Vec<u8>) -> Self {
        Self { title, body }
    }

    /// An existing title with no stored content yet (edit-form fallback)
    pub const fn empty(title: Title) -> Self {
        Self {
            title,
            body: Vec::new(),
        }
    }

    /// Body as text for template rendering; invalid UTF-8 is replaced
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
