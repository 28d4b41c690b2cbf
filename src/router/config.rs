use super::path::normalize;
use super::tokenize::DEFAULT_CONSTRAINT;

/// Settings fixed when a [`Router`](super::Router) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterConfig {
    /// Mounted in front of every route when matching. `/` means no base.
    pub base_path: String,
    /// Regex fragment used for placeholders without their own constraint.
    pub default_constraint: String,
    pub case_insensitive: bool,
    /// Run every matching route instead of stopping at the first one.
    pub multimatch: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_owned(),
            default_constraint: DEFAULT_CONSTRAINT.to_owned(),
            case_insensitive: false,
            multimatch: false,
        }
    }
}

impl RouterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_path(mut self, base: &str) -> Self {
        self.base_path = normalize(base);
        self
    }

    pub fn default_constraint(mut self, constraint: &str) -> Self {
        self.default_constraint = constraint.to_owned();
        self
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn multimatch(mut self, yes: bool) -> Self {
        self.multimatch = yes;
        self
    }
}
