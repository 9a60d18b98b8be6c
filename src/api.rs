// API client module: a small blocking HTTP client for the put.io v2 API.
//
// Every endpoint method in the submodules goes through the two helpers
// defined here: `get` (query-string parameters) and `post_form`
// (form-encoded body). Both append `oauth_token` to the URL query and decode
// the JSON body into the requested type. Nothing in this layer retries,
// paginates or inspects the API's own `status` field.

mod account;
mod files;
mod friends;
mod transfers;

use crate::config::ClientConfig;
use crate::error::{PutioError, Result};
use log::{debug, warn};
use reqwest::blocking::{Client, Response};
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Query or form parameters, in the order they are sent.
pub type Params<'a> = [(&'a str, String)];

/// Blocking client holding the reqwest clients, the API base URL and the
/// access token sent with every call.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    /// Never follows redirects; used to read `Location` on downloads.
    redirect_client: Client,
    base_url: Url,
    token: String,
    timeout: Option<Duration>,
}

impl ApiClient {
    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        Ok(ApiClient {
            client: http_client(config.timeout, Policy::default())?,
            redirect_client: http_client(config.timeout, Policy::none())?,
            base_url,
            token: config.token,
            timeout: config.timeout,
        })
    }

    /// Create a client configured from the environment. See
    /// [`ClientConfig::from_env`].
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;
        Ok(ApiClient::new(config)?)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Same client, authorized with another token.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        ApiClient {
            token: token.into(),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Configuration equivalent to this client, e.g. for the OAuth helpers.
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.to_string(),
            token: self.token.clone(),
            timeout: self.timeout,
        }
    }

    /// URL for `path` under the base URL with `query` followed by the token.
    pub fn endpoint(&self, path: &[&str], query: &Params) -> Result<Url> {
        let mut url = build_url(&self.base_url, path, query)?;
        url.query_pairs_mut().append_pair("oauth_token", &self.token);
        Ok(url)
    }

    /// GET `path` with `query` in the query string.
    pub fn get<T: DeserializeOwned>(&self, path: &[&str], query: &Params) -> Result<T> {
        let url = self.endpoint(path, query)?;
        debug!("GET /{}", path.join("/"));
        let res = self.client.get(url).send()?;
        decode_response(res)
    }

    /// POST `form` as `application/x-www-form-urlencoded` to `path`. The token
    /// stays in the URL query, never in the body.
    pub fn post_form<T: DeserializeOwned>(&self, path: &[&str], form: &Params) -> Result<T> {
        let url = self.endpoint(path, &[])?;
        debug!("POST /{} ({} fields)", path.join("/"), form.len());
        let res = self.client.post(url).form(form).send()?;
        decode_response(res)
    }

    /// GET `path` and return the target of the redirect it answers with.
    /// The redirect itself is not followed, so the target host is never
    /// contacted.
    pub(crate) fn resolve_redirect(&self, path: &[&str]) -> Result<String> {
        let url = self.endpoint(path, &[])?;
        debug!("GET /{} (redirect only)", path.join("/"));
        let res = self.redirect_client.get(url.clone()).send()?;
        let status = res.status();
        if status.is_redirection() {
            let location = res
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(|location| url.join(location));
            if let Some(target) = location {
                return Ok(target?.to_string());
            }
        }
        let body = res.text()?;
        Err(PutioError::NotRedirected { status, body })
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

/// reqwest client bounded by `timeout` with the given redirect policy.
pub(crate) fn http_client(timeout: Option<Duration>, redirects: Policy) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).redirect(redirects).build()?)
}

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }
    Ok(url)
}

/// Append `path` to `base` as individually encoded segments and set `query`.
/// A `/` inside a segment is percent-encoded and cannot add path levels.
pub(crate) fn build_url(base: &Url, path: &[&str], query: &Params) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| PutioError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(path);
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

/// Read the full body and decode it. Non-2xx statuses are logged but still
/// decoded: the API reports its own failures inside the JSON.
pub(crate) fn decode_response<T: DeserializeOwned>(res: Response) -> Result<T> {
    let status = res.status();
    let body = res.text()?;
    if !status.is_success() {
        warn!("put.io answered HTTP {status}");
    }
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(source) => {
            debug!("undecodable body: {body}");
            Err(PutioError::Decode { source, body })
        }
    }
}

/// Comma-separated id list as the API expects for `file_ids`/`transfer_ids`.
pub(crate) fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
