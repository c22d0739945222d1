use serde::Deserialize;

/// Rendered HTML supplied by the CMS and injected verbatim into the page.
///
/// Nothing in this crate sanitizes the fragment; the CMS is the trust
/// boundary. Keeping these fields behind a newtype makes every injection
/// point easy to find.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct HtmlFragment(String);

impl HtmlFragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The fragment as plain text: tags removed, entities decoded.
    pub fn to_plain_text(&self) -> String {
        crate::text::plain_text(&self.0)
    }
}

impl From<&str> for HtmlFragment {
    fn from(html: &str) -> Self {
        Self::new(html)
    }
}
