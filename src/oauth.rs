// OAuth2 authorization-code flow: send the user to `authorize_url`, then
// trade the code put.io hands back for an access token.

use crate::api::{build_url, decode_response, http_client, parse_base_url, ApiClient};
use crate::config::{AppCredentials, ClientConfig};
use crate::error::Result;
use log::debug;
use reqwest::redirect::Policy;
use serde::Deserialize;
use url::Url;

/// Token endpoint answer, e.g. `{"access_token": "ABV9KDHN"}`.
#[derive(Deserialize, Debug)]
struct AccessToken {
    access_token: String,
}

/// Page where the user grants access to the app.
pub fn authorize_url(base_url: &str, app: &AppCredentials) -> Result<Url> {
    let base = parse_base_url(base_url)?;
    build_url(
        &base,
        &["oauth2", "authenticate"],
        &[
            ("client_id", app.client_id.clone()),
            ("response_type", "code".to_string()),
            ("redirect_uri", app.redirect_uri.clone()),
        ],
    )
}

/// Exchange an authorization `code` for an access token, using the base URL
/// and timeout of `config`. Its token is ignored.
pub fn exchange_code(config: &ClientConfig, app: &AppCredentials, code: &str) -> Result<String> {
    let base = parse_base_url(&config.base_url)?;
    let url = build_url(
        &base,
        &["oauth2", "access_token"],
        &[
            ("client_id", app.client_id.clone()),
            ("client_secret", app.client_secret.clone()),
            ("grant_type", "authorization_code".to_string()),
            ("redirect_uri", app.redirect_uri.clone()),
            ("code", code.to_string()),
        ],
    )?;
    debug!("GET /oauth2/access_token");
    let res = http_client(config.timeout, Policy::default())?.get(url).send()?;
    let token: AccessToken = decode_response(res)?;
    Ok(token.access_token)
}

/// Exchange `code` and return a client for `config` authorized with the
/// resulting token.
pub fn login(config: ClientConfig, app: &AppCredentials, code: &str) -> Result<ApiClient> {
    let token = exchange_code(&config, app, code)?;
    ApiClient::new(ClientConfig { token, ..config })
}
