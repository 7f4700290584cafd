//! Main workflow orchestration logic
//!
//! Classifies the ref being built, fetches published tags when needed and
//! resolves the image tags. Kept apart from `main.rs` so the workflow can be
//! driven programmatically without depending on clap or the environment.

use crate::analyzer::{TagResolver, VersionFilter};
use crate::config::Config;
use crate::diagnostics::Diagnostics;
use crate::domain::{TagSet, TargetRef, Version};
use crate::error::{ImageTagsError, Result};
use crate::git::TagSource;
use crate::output::OutputSink;

/// Inputs for the tag workflow
#[derive(Debug, Clone, PartialEq)]
pub struct TagWorkflowArgs {
    /// Ref being built (e.g. "refs/tags/v1.2.3")
    pub git_ref: String,

    /// Repository whose published tags are consulted
    pub repository_url: String,
}

/// Outcome of a successful tag workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// How the ref was classified
    pub target: TargetRef,

    /// Tags to publish; `None` means nothing should be published
    pub tags: Option<TagSet>,

    /// Non-fatal issues found along the way
    pub diagnostics: Diagnostics,
}

/// Compute the tags for a ref without writing them anywhere.
///
/// - Protected branches get the development tag; no remote is contacted.
/// - Tag refs must parse as a version; existing tags are then fetched,
///   filtered to releases and used to resolve floating tags.
/// - Any other ref yields no tags.
///
/// # Errors
/// * The ref is a tag that does not parse as a version
/// * Listing the repository's tags fails
pub fn compute_tags<S>(args: &TagWorkflowArgs, config: &Config, source: &S) -> Result<WorkflowResult>
where
    S: TagSource + ?Sized,
{
    let target = TargetRef::classify(&args.git_ref, &config.protected_branches);
    let mut diagnostics = Diagnostics::new();

    let tags = match &target {
        TargetRef::ProtectedBranch(branch) => {
            tracing::debug!(branch = branch.as_str(), "Using dev tag for protected branch");
            Some(TagSet::new(config.dev_tag.clone()))
        }
        TargetRef::VersionTag(tag) => {
            let text = target.version_text().unwrap_or(tag);
            tracing::debug!(tag = text, "Processing version tag");

            let target_version = Version::parse(text).map_err(|e| match e {
                ImageTagsError::Version(reason) => ImageTagsError::version(format!(
                    "Tag '{}' is not a valid version: {}",
                    tag, reason
                )),
                other => other,
            })?;

            if !target_version.is_release() {
                tracing::info!(
                    version = target_version.original(),
                    prerelease = target_version.prerelease(),
                    metadata = target_version.metadata(),
                    "Tagged version is not an ordinary release, using tag directly"
                );
            }

            let published = source.list_tags(&args.repository_url)?;
            tracing::debug!(
                count = published.len(),
                "Fetched repository tags for version resolution"
            );

            let filtered = VersionFilter::new()?.filter(&published);
            diagnostics.extend(filtered.diagnostics);

            let resolver = TagResolver::new(config.latest_tag.clone());
            Some(resolver.resolve(&target_version, &filtered.versions))
        }
        TargetRef::Other(raw) => {
            tracing::debug!(git_ref = raw.as_str(), "Ref is neither a protected branch nor a tag");
            None
        }
    };

    Ok(WorkflowResult {
        target,
        tags,
        diagnostics,
    })
}

/// Compute the tags for a ref and write them to `sink` under the configured key.
///
/// Diagnostics are logged as warnings. When no tags are produced nothing is
/// written, which downstream steps read as "skip publishing".
pub fn run_tag_workflow<S>(
    args: &TagWorkflowArgs,
    config: &Config,
    source: &S,
    sink: &mut dyn OutputSink,
) -> Result<WorkflowResult>
where
    S: TagSource + ?Sized,
{
    tracing::info!(git_ref = args.git_ref.as_str(), "Generating image tags");

    let result = compute_tags(args, config, source)?;
    result.diagnostics.log();

    match &result.tags {
        Some(tags) => {
            let joined = tags.to_string();
            tracing::info!(tags = joined.as_str(), "Generated tags");
            sink.write_outputs(&[(config.output_key.as_str(), joined.as_str())])?;
        }
        None => tracing::info!("No tags generated"),
    }

    Ok(result)
}
