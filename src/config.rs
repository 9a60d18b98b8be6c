// Client configuration. The authorization token travels inside the
// configuration value handed to `ApiClient::new`; there is no process-wide
// token.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.put.io/v2";

const TOKEN_FILE_NAME: &str = ".putio_token";

/// Everything an [`ApiClient`](crate::api::ApiClient) needs to talk to the API.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    /// Upper bound for a whole request. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.into(),
            token: token.into(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a configuration from `PUTIO_TOKEN`, `PUTIO_API_URL` and
    /// `PUTIO_TIMEOUT_SECS`. A missing token yields an empty one; callers
    /// usually fill it from a [`TokenStore`] or an OAuth exchange.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("PUTIO_TOKEN").unwrap_or_default();
        let base_url = std::env::var("PUTIO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout = match std::env::var("PUTIO_TIMEOUT_SECS") {
            Ok(secs) => Some(Duration::from_secs(
                secs.trim()
                    .parse()
                    .with_context(|| format!("PUTIO_TIMEOUT_SECS is not a number: {secs}"))?,
            )),
            Err(_) => None,
        };
        Ok(ClientConfig {
            base_url,
            token,
            timeout,
        })
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }
}

/// OAuth application credentials registered with put.io.
#[derive(Clone, Debug)]
pub struct AppCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl AppCredentials {
    /// Read `PUTIO_CLIENT_ID`, `PUTIO_CLIENT_SECRET` and `PUTIO_REDIRECT_URI`.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| std::env::var(name).with_context(|| format!("{name} is not set"));
        Ok(AppCredentials {
            client_id: var("PUTIO_CLIENT_ID")?,
            client_secret: var("PUTIO_CLIENT_SECRET")?,
            redirect_uri: var("PUTIO_REDIRECT_URI")?,
        })
    }
}

/// Persists the access token between runs, in `~/.putio_token` by default.
#[derive(Clone, Debug)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    /// Token file in the user's home directory, or the working directory
    /// when there is no home.
    pub fn in_home_dir() -> Self {
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        TokenStore::new(dir.join(TOKEN_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, token: &str) -> Result<()> {
        std::fs::write(&self.path, token)
            .with_context(|| format!("Failed to write token to {}", self.path.display()))
    }

    /// Stored token, if one exists and is not blank.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read token from {}", self.path.display()))?;
        let token = data.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}
