use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::domain::{Version, VersionParser};
use crate::error::Result;

/// Release-only versions extracted from a tag list, plus what was skipped
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredVersions {
    pub versions: Vec<Version>,
    pub diagnostics: Diagnostics,
}

/// Turns raw repository tag names into release-only versions
pub struct VersionFilter {
    parser: VersionParser,
}

impl VersionFilter {
    pub fn new() -> Result<Self> {
        Ok(VersionFilter {
            parser: VersionParser::new()?,
        })
    }

    /// Parse every tag, keeping only versions without prerelease or metadata.
    ///
    /// Unparsable tags are dropped and recorded as diagnostics. The result is
    /// de-duplicated and ordered by version, so input order never matters.
    pub fn filter<I, S>(&self, tags: I) -> FilteredVersions
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut versions = Vec::new();
        let mut diagnostics = Diagnostics::new();

        for tag in tags {
            let tag = tag.as_ref();
            let text = tag.strip_prefix('v').unwrap_or(tag);
            match self.parser.parse(text) {
                Ok(version) if version.is_release() => versions.push(version),
                Ok(_) => {}
                Err(e) => diagnostics.record(Diagnostic::UnparsableTag {
                    tag: tag.to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        versions.sort_by(|a, b| {
            a.triple()
                .cmp(&b.triple())
                .then_with(|| a.segments().cmp(b.segments()))
                .then_with(|| a.original().cmp(b.original()))
        });
        versions.dedup_by(|a, b| a.to_string() == b.to_string());

        FilteredVersions {
            versions,
            diagnostics,
        }
    }
}
