/// One leg of a pipeline: the provider to query and how to pick from its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageDescriptor {
    /// Provider username as written, e.g. `@filtersbot`. Empty means "this bot".
    pub provider_handle: String,
    /// Numeric index, empty (take everything) or a regular expression.
    pub selector: String,
}

impl StageDescriptor {
    pub fn new(provider_handle: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            provider_handle: provider_handle.into(),
            selector: selector.into(),
        }
    }

    /// An empty handle addresses the bot itself.
    pub fn is_self_referential(&self) -> bool {
        self.provider_handle.is_empty()
    }
}

/// A query split into its leading free text and ordered stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub text: String,
    pub stages: Vec<StageDescriptor>,
}

impl ParsedQuery {
    /// A query with no pipe syntax at all.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            stages: Vec::new(),
        }
    }

    pub fn is_piped(&self) -> bool {
        !self.stages.is_empty()
    }
}
