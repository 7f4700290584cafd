use crate::domain::{TagSet, Version};

/// Default name of the floating tag that follows the newest release
pub const DEFAULT_LATEST_TAG: &str = "latest";

/// Decides which floating tags a release may claim
pub struct TagResolver {
    latest_tag: String,
}

impl TagResolver {
    /// Create a resolver that grants `latest_tag` to the newest release
    pub fn new(latest_tag: impl Into<String>) -> Self {
        TagResolver {
            latest_tag: latest_tag.into(),
        }
    }

    /// Resolve the tags for `target` given the already published versions.
    ///
    /// The exact version is always the first tag. Floating tags are granted
    /// strictly from most to least specific:
    /// - `{major}.{minor}` unless a newer patch exists on the same minor line
    /// - `{major}` unless a newer minor exists on the same major line
    /// - the latest tag unless a newer major exists
    ///
    /// Qualified targets (prerelease or metadata) only ever get their exact tag.
    pub fn resolve(&self, target: &Version, available: &[Version]) -> TagSet {
        let mut tags = TagSet::new(target.to_string());

        if !target.is_release() {
            return tags;
        }

        let mut has_newer_major = false;
        let mut has_newer_minor = false;
        let mut has_newer_patch = false;

        for version in available {
            if version.major() > target.major() {
                has_newer_major = true;
            }
            if version.major() == target.major() && version.minor() > target.minor() {
                has_newer_minor = true;
            }
            if version.major() == target.major()
                && version.minor() == target.minor()
                && version.patch() > target.patch()
            {
                has_newer_patch = true;
            }
        }

        if !has_newer_patch {
            tags.push(format!("{}.{}", target.major(), target.minor()));

            if !has_newer_minor {
                tags.push(target.major().to_string());

                if !has_newer_major {
                    tags.push(self.latest_tag.clone());
                }
            }
        }

        tags
    }
}

impl Default for TagResolver {
    fn default() -> Self {
        TagResolver::new(DEFAULT_LATEST_TAG)
    }
}
