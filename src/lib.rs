// Library root
// -----------
// Blocking client for the put.io v2 REST API plus the terminal front end
// built on it. The binary (`main.rs`) only wires these together.
//
// Module responsibilities:
// - `api`: the `ApiClient`, its GET/POST-form helpers and one method per
//   put.io endpoint (files, transfers, account, friends).
// - `models`: typed snapshots of the JSON responses.
// - `error`: `PutioError`, the transport/decode failure type.
// - `config`: client configuration from the environment and the on-disk
//   token store.
// - `oauth`: authorization URL and code-for-token exchange.
// - `ui`: interactive menus that delegate every request to `api`.
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod oauth;
pub mod ui;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::PutioError;
