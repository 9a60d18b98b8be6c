use super::{join_ids, ApiClient};
use crate::error::Result;
use crate::models::{NewTransfer, StatusResponse, TransferList, TransferResponse};

impl ApiClient {
    pub fn list_transfers(&self) -> Result<TransferList> {
        self.get(&["transfers", "list"], &[])
    }

    /// Start a server-side download of `transfer.url`.
    pub fn add_transfer(&self, transfer: &NewTransfer) -> Result<TransferResponse> {
        let mut form = vec![
            ("url", transfer.url.clone()),
            ("save_parent_id", transfer.save_parent_id.to_string()),
            ("extract", transfer.extract.to_string()),
        ];
        if let Some(callback) = &transfer.callback_url {
            form.push(("callback_url", callback.clone()));
        }
        self.post_form(&["transfers", "add"], &form)
    }

    pub fn cancel_transfer(&self, id: i64) -> Result<StatusResponse> {
        self.post_form(&["transfers", "cancel"], &[("transfer_ids", join_ids(&[id]))])
    }

    pub fn get_transfer(&self, id: i64) -> Result<TransferResponse> {
        let id = id.to_string();
        self.get(&["transfers", id.as_str()], &[])
    }
}
