use super::ApiClient;
use crate::error::Result;
use crate::models::{FriendList, StatusResponse};

impl ApiClient {
    pub fn list_friends(&self) -> Result<FriendList> {
        self.get(&["friends", "list"], &[])
    }

    /// Requests other users have sent and that are still unanswered.
    pub fn waiting_friend_requests(&self) -> Result<FriendList> {
        self.get(&["friends", "waiting-requests"], &[])
    }

    pub fn send_friend_request(&self, username: &str) -> Result<StatusResponse> {
        self.post_form(&["friends", username, "request"], &[])
    }

    pub fn deny_friend_request(&self, username: &str) -> Result<StatusResponse> {
        self.post_form(&["friends", username, "deny"], &[])
    }
}
