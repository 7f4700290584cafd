use crate::error::{ImageTagsError, Result};
use crate::git::TagSource;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory tag source for testing without network access
pub struct MockTagSource {
    tags: Vec<String>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockTagSource {
    /// Create a source that always returns `tags`
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a source whose every call fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: Some(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Add a tag to the listing
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Number of times the tags have been listed
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self, repository_url: &str) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(ImageTagsError::fetch(
                repository_url,
                git2::Error::from_str(reason),
            )),
            None => Ok(self.tags.clone()),
        }
    }
}
