//! Per-call options for URL conversion.

/// How a single `convert` call should behave.
///
/// `Default` means: no alias, errors are returned, full request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    alias: Option<String>,
    pub silently_fail: bool,
    pub quick_link: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a custom alias. An empty alias means none.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = (!alias.is_empty()).then_some(alias);
        self
    }

    /// Returns the original URL instead of an error on failure.
    pub fn silently_fail(mut self, silently_fail: bool) -> Self {
        self.silently_fail = silently_fail;
        self
    }

    /// Routes the call through the quick-link path.
    pub fn quick_link(mut self, quick_link: bool) -> Self {
        self.quick_link = quick_link;
        self
    }

    pub fn requested_alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}
