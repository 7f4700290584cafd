use crate::error::{ImageTagsError, Result};
use crate::git::{tag_names_from_refs, TagSource};
use git2::{Cred, Direction, Remote, RemoteCallbacks};

/// Username paired with a forge token for HTTP authentication
const TOKEN_USERNAME: &str = "x-access-token";

/// Lists tags straight from a remote's ref advertisement, without cloning
pub struct RemoteTagSource {
    token: Option<String>,
}

impl RemoteTagSource {
    /// Anonymous access, for public repositories
    pub fn new() -> Self {
        RemoteTagSource { token: None }
    }

    /// Authenticate with a forge token; an empty token means anonymous access
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        RemoteTagSource {
            token: (!token.is_empty()).then_some(token),
        }
    }

    fn callbacks(&self) -> RemoteCallbacks<'static> {
        let mut callbacks = RemoteCallbacks::new();
        if let Some(token) = self.token.clone() {
            callbacks.credentials(move |_url, _username_from_url, _allowed_types| {
                Cred::userpass_plaintext(TOKEN_USERNAME, &token)
            });
        }
        callbacks
    }
}

impl Default for RemoteTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for RemoteTagSource {
    fn list_tags(&self, repository_url: &str) -> Result<Vec<String>> {
        let fetch_error = |e: git2::Error| ImageTagsError::fetch(repository_url, e);

        let mut remote = Remote::create_detached(repository_url).map_err(fetch_error)?;
        let connection = remote
            .connect_auth(Direction::Fetch, Some(self.callbacks()), None)
            .map_err(fetch_error)?;
        let heads = connection.list().map_err(fetch_error)?;

        Ok(tag_names_from_refs(heads.iter().map(|head| head.name())))
    }
}
