use super::ApiClient;
use crate::error::Result;
use crate::models::{AccountInfoResponse, SettingsResponse};

impl ApiClient {
    /// Identity and disk quota of the token's owner.
    pub fn account_info(&self) -> Result<AccountInfoResponse> {
        self.get(&["account", "info"], &[])
    }

    pub fn account_settings(&self) -> Result<SettingsResponse> {
        self.get(&["account", "settings"], &[])
    }
}
