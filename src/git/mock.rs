use crate::error::Result;
use crate::git::TagSupplier;
use std::cell::RefCell;

/// Mock tag supplier for testing without a repository
pub struct MockTagSupplier {
    tag: Option<String>,
    requests: RefCell<Vec<String>>,
}

impl MockTagSupplier {
    /// Supplier that reports no tags
    pub fn new() -> Self {
        MockTagSupplier {
            tag: None,
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Supplier that always answers with `tag`
    pub fn with_tag(tag: impl Into<String>) -> Self {
        MockTagSupplier {
            tag: Some(tag.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Prefixes passed to [`TagSupplier::latest_tag`], in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Default for MockTagSupplier {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSupplier for MockTagSupplier {
    fn latest_tag(&self, prefix: &str) -> Result<Option<String>> {
        self.requests.borrow_mut().push(prefix.to_string());
        Ok(self.tag.clone())
    }
}
