use crate::error::{ImageTagsError, Result};
use regex::Regex;
use std::fmt;

/// Dotted numeric core, optional prerelease, optional `+metadata`.
///
/// A prerelease starting with a digit needs a `-`; one starting with a letter,
/// `-` or `~` may follow the core directly (`2.1.0rc1`).
const VERSION_PATTERN: &str = concat!(
    r"^v?(?P<core>[0-9]+(?:\.[0-9]+)*)",
    r"(?:-(?P<pre_num>[0-9]+[0-9A-Za-z\-~]*(?:\.[0-9A-Za-z\-~]+)*)",
    r"|-?(?P<pre_alpha>[A-Za-z\-~]+[0-9A-Za-z\-~]*(?:\.[0-9A-Za-z\-~]+)*))?",
    r"(?:\+(?P<meta>[0-9A-Za-z\-~]+(?:\.[0-9A-Za-z\-~]+)*))?$",
);

/// Numeric segments every version is padded to
const MIN_SEGMENTS: usize = 3;

/// A parsed version with its numeric segments, qualifiers and original text.
///
/// Only the first three segments take part in comparisons. Prerelease and
/// metadata labels are kept verbatim and only ever checked for presence, so
/// leading zeros and `~` are accepted in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    segments: Vec<u64>,
    prerelease: String,
    metadata: String,
    original: String,
}

impl Version {
    /// Create a release version from its numeric triple
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            segments: vec![major, minor, patch],
            prerelease: String::new(),
            metadata: String::new(),
            original: format!("{}.{}.{}", major, minor, patch),
        }
    }

    /// Parse a version string (e.g. "1.2.3", "v2.0.0-rc1", "1.2.3+build.5")
    pub fn parse(input: &str) -> Result<Self> {
        VersionParser::new()?.parse(input)
    }

    pub fn major(&self) -> u64 {
        self.segments[0]
    }

    pub fn minor(&self) -> u64 {
        self.segments[1]
    }

    pub fn patch(&self) -> u64 {
        self.segments[2]
    }

    /// All numeric segments, padded to at least three
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    /// The (major, minor, patch) triple used for ordering
    pub fn triple(&self) -> (u64, u64, u64) {
        (self.major(), self.minor(), self.patch())
    }

    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// The text this version was parsed from, minus a leading `v`
    pub fn original(&self) -> &str {
        &self.original
    }

    /// True when the version carries neither a prerelease nor build metadata
    pub fn is_release(&self) -> bool {
        self.prerelease.is_empty() && self.metadata.is_empty()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", core.join("."))?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }
        Ok(())
    }
}

/// Reusable parser holding the compiled version pattern
pub struct VersionParser {
    pattern: Regex,
}

impl VersionParser {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(VERSION_PATTERN)
            .map_err(|e| ImageTagsError::version(format!("Invalid version pattern: {}", e)))?;
        Ok(VersionParser { pattern })
    }

    /// Parse a single version string
    pub fn parse(&self, input: &str) -> Result<Version> {
        let caps = self.pattern.captures(input).ok_or_else(|| {
            ImageTagsError::version(format!("Malformed version: '{}'", input))
        })?;

        let mut segments = caps["core"]
            .split('.')
            .map(|part| {
                part.parse::<u64>().map_err(|e| {
                    ImageTagsError::version(format!("Invalid segment '{}' in '{}': {}", part, input, e))
                })
            })
            .collect::<Result<Vec<u64>>>()?;
        if segments.len() < MIN_SEGMENTS {
            segments.resize(MIN_SEGMENTS, 0);
        }

        let prerelease = caps
            .name("pre_num")
            .or_else(|| caps.name("pre_alpha"))
            .map_or_else(String::new, |m| m.as_str().to_string());
        let metadata = caps
            .name("meta")
            .map_or_else(String::new, |m| m.as_str().to_string());

        Ok(Version {
            segments,
            prerelease,
            metadata,
            original: input.strip_prefix('v').unwrap_or(input).to_string(),
        })
    }
}
