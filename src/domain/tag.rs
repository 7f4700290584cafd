use crate::error::{ImageTagsError, Result};
use std::fmt;
use std::str::FromStr;

/// Separator used when tags are written to or read from an output sink
pub const TAG_SEPARATOR: &str = ",";

/// Ordered, duplicate-free list of image tags.
///
/// The first entry is the canonical (exact) tag; any following entries are
/// floating tags in decreasing specificity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Create a tag set whose canonical entry is `canonical`
    pub fn new(canonical: impl Into<String>) -> Self {
        TagSet {
            tags: vec![canonical.into()],
        }
    }

    /// Append a tag, ignoring it if already present. Returns whether it was added.
    pub fn push(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// The exact tag every set begins with
    pub fn canonical(&self) -> &str {
        &self.tags[0]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tags.join(TAG_SEPARATOR))
    }
}

/// Parses a comma-separated tag list as produced by [`TagSet`]'s `Display`.
///
/// Whitespace around entries is trimmed; empty entries are rejected and
/// repeated entries collapse onto their first occurrence.
impl FromStr for TagSet {
    type Err = ImageTagsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(ImageTagsError::output("Tags cannot be empty"));
        }

        let mut entries = s.split(TAG_SEPARATOR).map(str::trim);
        let first = entries
            .next()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ImageTagsError::output("Tags cannot contain empty values"))?;

        let mut set = TagSet::new(first);
        for entry in entries {
            if entry.is_empty() {
                return Err(ImageTagsError::output("Tags cannot contain empty values"));
            }
            set.push(entry);
        }
        Ok(set)
    }
}
