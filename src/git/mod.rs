//! Remote tag enumeration
//!
//! This module provides a trait-based abstraction over listing the tags of a
//! remote repository, so tag resolution can run against real remotes and
//! in-memory fixtures alike.
//!
//! # Overview
//!
//! The primary abstraction is the [TagSource] trait. The concrete
//! implementations include:
//!
//! - [remote::RemoteTagSource]: reads the remote's advertised refs via `git2`
//! - [mock::MockTagSource]: a fixed tag list for testing
//!
//! # Usage
//!
//! ```rust
//! # use image_tags::git::{MockTagSource, TagSource};
//! let source = MockTagSource::new(["v1.0.0", "v1.1.0"]);
//! let tags = source.list_tags("https://example.com/acme/widget.git").unwrap();
//! assert_eq!(tags.len(), 2);
//! ```

pub mod mock;
pub mod remote;

pub use mock::MockTagSource;
pub use remote::RemoteTagSource;

use crate::domain::reference::TAG_REF_PREFIX;
use crate::error::Result;
use std::collections::BTreeSet;

/// Suffix git appends to the peeled entry of an annotated tag
const PEELED_SUFFIX: &str = "^{}";

/// Lists the tags published in a repository.
///
/// ## Error Handling
///
/// Any failure to reach or read the remote is returned as
/// [crate::error::ImageTagsError::Fetch] with the underlying cause attached.
/// Implementations do not retry.
pub trait TagSource: Send + Sync {
    /// Return the bare tag names (without `refs/tags/`) of the repository at `repository_url`
    fn list_tags(&self, repository_url: &str) -> Result<Vec<String>>;
}

/// Extract bare, de-duplicated tag names from full ref names.
///
/// Non-tag refs are ignored and peeled entries (`refs/tags/v1^{}`) collapse
/// onto their tag.
pub fn tag_names_from_refs<I, S>(refs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: BTreeSet<String> = refs
        .into_iter()
        .filter_map(|r| {
            let name = r.as_ref().strip_prefix(TAG_REF_PREFIX)?;
            let name = name.strip_suffix(PEELED_SUFFIX).unwrap_or(name);
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect();
    names.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_from_refs() {
        let names = tag_names_from_refs([
            "HEAD",
            "refs/heads/main",
            "refs/tags/v1.0.0",
            "refs/tags/v1.1.0",
            "refs/tags/v1.1.0^{}",
            "refs/pull/3/head",
        ]);
        assert_eq!(names, vec!["v1.0.0", "v1.1.0"]);
    }

    #[test]
    fn test_tag_names_from_refs_empty() {
        assert!(tag_names_from_refs(Vec::<String>::new()).is_empty());
        assert!(tag_names_from_refs(["refs/tags/"]).is_empty());
    }
}
