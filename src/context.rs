//! CI environment handling.
//!
//! Reads the forge-provided environment (Forgejo Actions or GitHub Actions)
//! into an immutable [`Context`] used by the rest of the workflow.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{ImageTagsError, Result};
use serde::Deserialize;
use std::fs;

/// CI host the job is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Forge {
    Forgejo,
    GitHub,
}

impl Forge {
    /// Environment variable prefix used by this forge
    pub fn prefix(&self) -> &'static str {
        match self {
            Forge::Forgejo => "FORGEJO",
            Forge::GitHub => "GITHUB",
        }
    }

    /// Detect the forge from its job marker variable; Forgejo wins if both are set
    pub fn detect<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup("FORGEJO_JOB").is_some() {
            Ok(Forge::Forgejo)
        } else if lookup("GITHUB_JOB").is_some() {
            Ok(Forge::GitHub)
        } else {
            Err(ImageTagsError::context(
                "unable to determine forge: neither FORGEJO_JOB nor GITHUB_JOB set",
            ))
        }
    }
}

/// Values the forge exposes to a running job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub forge: Forge,
    pub workspace: String,
    pub token: String,
    pub server_url: String,
    pub repository: String,
    /// Source repository of a pull request, when it differs from the base
    pub head_repository: String,
    pub git_ref: String,
    pub head_ref: String,
    pub sha: String,
    pub output_file: String,
}

#[derive(Debug, Deserialize)]
struct PullRequestEvent {
    pull_request: PullRequest,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    head: PullRequestHead,
}

#[derive(Debug, Deserialize)]
struct PullRequestHead {
    repo: PullRequestRepo,
    #[serde(rename = "ref")]
    git_ref: String,
}

#[derive(Debug, Deserialize)]
struct PullRequestRepo {
    full_name: String,
}

impl Context {
    /// Build the context from the process environment
    pub fn from_env(diagnostics: &mut Diagnostics) -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok(), diagnostics)
    }

    /// Build the context from an arbitrary variable lookup.
    ///
    /// Missing variables read as empty strings. A pull request event that
    /// cannot be read is recorded as a diagnostic and the base repository is kept.
    pub fn from_vars<F>(lookup: F, diagnostics: &mut Diagnostics) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let forge = Forge::detect(&lookup)?;
        let var = |key: &str| lookup(&format!("{}_{}", forge.prefix(), key)).unwrap_or_default();

        let mut ctx = Context {
            forge,
            workspace: var("WORKSPACE"),
            token: var("TOKEN"),
            server_url: var("SERVER_URL"),
            repository: var("REPOSITORY"),
            head_repository: String::new(),
            git_ref: var("REF"),
            head_ref: String::new(),
            sha: var("SHA"),
            output_file: var("OUTPUT"),
        };

        let event_path = var("EVENT_PATH");
        if var("EVENT_NAME") == "pull_request" && !event_path.is_empty() {
            match parse_pull_request_event(&event_path) {
                Ok((head_repo, head_ref)) => {
                    ctx.head_repository = head_repo;
                    ctx.head_ref = head_ref;
                }
                Err(e) => diagnostics.record(Diagnostic::UnreadableEvent {
                    path: event_path,
                    reason: e.to_string(),
                }),
            }
        }

        Ok(ctx)
    }

    /// Clone URL of the repository being built, preferring a pull request's head repository
    pub fn repo_url(&self) -> String {
        let repo = if self.head_repository.is_empty() {
            &self.repository
        } else {
            &self.head_repository
        };
        format!("{}/{}.git", self.server_url.trim_end_matches('/'), repo)
    }

    /// Bare tag name when the ref is a tag reference
    pub fn tag(&self) -> Option<&str> {
        self.git_ref.strip_prefix(crate::domain::reference::TAG_REF_PREFIX)
    }
}

fn parse_pull_request_event(path: &str) -> Result<(String, String)> {
    let data = fs::read_to_string(path)?;
    let event: PullRequestEvent = serde_json::from_str(&data)?;
    Ok((
        event.pull_request.head.repo.full_name,
        event.pull_request.head.git_ref,
    ))
}
