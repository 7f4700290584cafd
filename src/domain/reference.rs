/// Prefix of branch references
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Prefix of tag references
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// The ref being published, classified once per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetRef {
    /// A protected branch such as `main`; publishes the development tag
    ProtectedBranch(String),
    /// A tag reference; holds the bare tag name (e.g. "v1.2.3")
    VersionTag(String),
    /// Anything else; nothing is published
    Other(String),
}

impl TargetRef {
    /// Classify a raw ref (e.g. "refs/heads/main", "refs/tags/v1.2.3")
    pub fn classify<S: AsRef<str>>(raw: &str, protected_branches: &[S]) -> Self {
        if let Some(branch) = raw.strip_prefix(BRANCH_REF_PREFIX) {
            if protected_branches.iter().any(|b| b.as_ref() == branch) {
                return TargetRef::ProtectedBranch(branch.to_string());
            }
        }

        if let Some(tag) = raw.strip_prefix(TAG_REF_PREFIX) {
            return TargetRef::VersionTag(tag.to_string());
        }

        TargetRef::Other(raw.to_string())
    }

    /// Tag name with a single leading 'v' removed, for version tags only
    pub fn version_text(&self) -> Option<&str> {
        match self {
            TargetRef::VersionTag(tag) => Some(tag.strip_prefix('v').unwrap_or(tag)),
            _ => None,
        }
    }
}
