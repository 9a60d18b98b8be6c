// Response shapes returned by the put.io v2 API. Every struct is a plain
// snapshot of one response; nothing here is cached or mutated by the client.
//
// Envelopes keep the API's `status` string verbatim and collect any top-level
// field we don't map into `extra`, so callers can look at data the client
// doesn't model without a second request.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unmapped top-level fields of a response.
pub type Extra = Map<String, Value>;

/// A file or folder stored on put.io.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct File {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub crc32: Option<String>,
    #[serde(default)]
    pub opensubtitles_hash: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub first_accessed_at: Option<String>,
    #[serde(default)]
    pub is_mp4_available: bool,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub screenshot: Option<String>,
}

impl File {
    pub fn is_folder(&self) -> bool {
        self.content_type.as_deref() == Some("application/x-directory")
    }
}

/// Result of `/files/list`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<File>,
    #[serde(default)]
    pub parent: Option<File>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Result of `/files/search/{query}/page/{page}`. `next` is the URL of the
/// following page exactly as the API returns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub files: Vec<File>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Single-file envelope (`/files/{id}`, `/files/create-folder`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileResponse {
    #[serde(default)]
    pub file: Option<File>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// MP4 transcode state of a file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mp4 {
    pub status: String,
    #[serde(default)]
    pub stream_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub percent_done: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mp4Response {
    #[serde(default)]
    pub mp4: Option<Mp4>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Result of `/files/zip`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ZipResponse {
    #[serde(default)]
    pub zip_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A server-side download job.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Transfer {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub percent_done: Option<i64>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub downloaded: Option<i64>,
    #[serde(default)]
    pub uploaded: Option<i64>,
    #[serde(default)]
    pub down_speed: Option<i64>,
    #[serde(default)]
    pub up_speed: Option<i64>,
    #[serde(default)]
    pub peers_connected: Option<i64>,
    #[serde(default)]
    pub peers_getting_from_us: Option<i64>,
    #[serde(default)]
    pub peers_sending_to_us: Option<i64>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub file_id: Option<i64>,
    #[serde(default)]
    pub save_parent_id: Option<i64>,
    #[serde(default)]
    pub extract: Option<bool>,
    #[serde(default)]
    pub estimated_time: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransferList {
    #[serde(default)]
    pub transfers: Vec<Transfer>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransferResponse {
    #[serde(default)]
    pub transfer: Option<Transfer>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Parameters for `/transfers/add`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransfer {
    pub url: String,
    pub save_parent_id: i64,
    pub extract: bool,
    pub callback_url: Option<String>,
}

impl NewTransfer {
    /// Transfer into the root folder, without extraction.
    pub fn new(url: impl Into<String>) -> Self {
        NewTransfer {
            url: url.into(),
            save_parent_id: 0,
            extract: false,
            callback_url: None,
        }
    }
}

/// Storage quota, in bytes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Disk {
    #[serde(default)]
    pub avail: i64,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub used: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub username: String,
    #[serde(default)]
    pub mail: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub days_until_files_deletion: Option<i64>,
    #[serde(default)]
    pub plan_expiration_date: Option<String>,
    #[serde(default)]
    pub subtitle_languages: Vec<String>,
    #[serde(default)]
    pub default_subtitle_language: Option<String>,
    #[serde(default)]
    pub disk: Disk,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccountInfoResponse {
    #[serde(default)]
    pub info: Option<AccountInfo>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub default_download_folder: Option<i64>,
    #[serde(default)]
    pub is_invisible: bool,
    #[serde(default)]
    pub extraction_default: bool,
    #[serde(default)]
    pub subtitle_languages: Vec<String>,
    #[serde(default)]
    pub default_subtitle_language: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SettingsResponse {
    #[serde(default)]
    pub settings: Option<Settings>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Friend {
    pub name: String,
}

/// Result of `/friends/list` and `/friends/waiting-requests`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FriendList {
    #[serde(default)]
    pub friends: Vec<Friend>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Bare acknowledgement returned by write endpoints that carry no payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl StatusResponse {
    /// `true` when the API reported `"status": "OK"`.
    pub fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("OK")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_file_list_with_parent() {
        let body = r#"{
            "files": [{
                "id": 42,
                "name": "movie.mkv",
                "parent_id": 0,
                "size": 1048576,
                "content_type": "video/x-matroska",
                "is_shared": true,
                "crc32": "deadbeef",
                "opensubtitles_hash": "8e245d9679d31e12",
                "created_at": "2014-02-07T12:34:56",
                "first_accessed_at": null,
                "is_mp4_available": true,
                "icon": "https://put.io/icon.png",
                "screenshot": null
            }],
            "parent": {"id": 0, "name": "Your Files", "parent_id": null,
                       "size": 0, "content_type": "application/x-directory"},
            "status": "OK"
        }"#;

        let list: FileList = serde_json::from_str(body).unwrap();
        assert_eq!(list.status.as_deref(), Some("OK"));
        assert!(list.extra.is_empty());

        let file = &list.files[0];
        assert_eq!(file.id, 42);
        assert_eq!(file.name, "movie.mkv");
        assert_eq!(file.parent_id, Some(0));
        assert_eq!(file.size, 1048576);
        assert_eq!(file.content_type.as_deref(), Some("video/x-matroska"));
        assert!(file.is_shared);
        assert_eq!(file.crc32.as_deref(), Some("deadbeef"));
        assert_eq!(file.opensubtitles_hash.as_deref(), Some("8e245d9679d31e12"));
        assert_eq!(file.created_at.as_deref(), Some("2014-02-07T12:34:56"));
        assert_eq!(file.first_accessed_at, None);
        assert!(file.is_mp4_available);
        assert!(!file.is_folder());

        let parent = list.parent.unwrap();
        assert!(parent.is_folder());
        assert_eq!(parent.parent_id, None);
    }

    #[test]
    fn keeps_unmapped_fields_in_extra() {
        let body = r#"{"files": [], "status": "OK", "total": 7, "cursor": "abc"}"#;
        let list: FileList = serde_json::from_str(body).unwrap();
        assert_eq!(list.extra.get("total"), Some(&Value::from(7)));
        assert_eq!(list.extra.get("cursor"), Some(&Value::from("abc")));
        assert!(!list.extra.contains_key("status"));
    }

    #[test]
    fn decodes_transfer() {
        let body = r#"{"transfer": {
            "id": 9, "name": "ubuntu.iso", "source": "magnet:?xt=urn:btih:abc",
            "status": "DOWNLOADING", "status_message": "1.2 MB/s",
            "percent_done": 37, "size": 1000, "downloaded": 370, "uploaded": 12,
            "down_speed": 1200000, "up_speed": 3000,
            "peers_connected": 14, "peers_getting_from_us": 2, "peers_sending_to_us": 9,
            "error_message": null, "file_id": null, "save_parent_id": 0,
            "extract": false, "estimated_time": 120,
            "created_at": "2014-02-07T12:00:00", "callback_url": null
        }, "status": "OK"}"#;

        let resp: TransferResponse = serde_json::from_str(body).unwrap();
        let t = resp.transfer.unwrap();
        assert_eq!(t.id, 9);
        assert_eq!(t.source.as_deref(), Some("magnet:?xt=urn:btih:abc"));
        assert_eq!(t.status.as_deref(), Some("DOWNLOADING"));
        assert_eq!(t.percent_done, Some(37));
        assert_eq!(t.down_speed, Some(1200000));
        assert_eq!(t.up_speed, Some(3000));
        assert_eq!(t.peers_connected, Some(14));
        assert_eq!(t.peers_getting_from_us, Some(2));
        assert_eq!(t.peers_sending_to_us, Some(9));
        assert_eq!(t.error_message, None);
        assert_eq!(t.file_id, None);
        assert_eq!(t.extract, Some(false));
        assert_eq!(t.estimated_time, Some(120));
    }

    #[test]
    fn decodes_account_info_and_settings() {
        let body = r#"{"info": {
            "username": "cenk", "mail": "cenk@example.com",
            "avatar_url": "https://put.io/a.png",
            "days_until_files_deletion": 0,
            "plan_expiration_date": "2030-01-01T00:00:00",
            "subtitle_languages": ["eng", "tur"],
            "default_subtitle_language": "eng",
            "disk": {"avail": 20, "size": 100, "used": 80}
        }, "status": "OK"}"#;
        let info = serde_json::from_str::<AccountInfoResponse>(body)
            .unwrap()
            .info
            .unwrap();
        assert_eq!(info.username, "cenk");
        assert_eq!(info.subtitle_languages, vec!["eng", "tur"]);
        assert_eq!(info.disk, Disk { avail: 20, size: 100, used: 80 });

        let body = r#"{"settings": {
            "default_download_folder": 12, "is_invisible": true,
            "extraction_default": false, "subtitle_languages": ["eng"],
            "default_subtitle_language": "eng"
        }, "status": "OK"}"#;
        let settings = serde_json::from_str::<SettingsResponse>(body)
            .unwrap()
            .settings
            .unwrap();
        assert_eq!(settings.default_download_folder, Some(12));
        assert!(settings.is_invisible);
        assert!(!settings.extraction_default);
    }

    #[test]
    fn decodes_mp4_and_friends() {
        let body = r#"{"mp4": {"status": "CONVERTING", "percent_done": 45}, "status": "OK"}"#;
        let mp4 = serde_json::from_str::<Mp4Response>(body).unwrap().mp4.unwrap();
        assert_eq!(mp4.status, "CONVERTING");
        assert_eq!(mp4.percent_done, Some(45));
        assert_eq!(mp4.stream_url, None);

        let body = r#"{"friends": [{"name": "alice"}, {"name": "bob"}], "status": "OK"}"#;
        let friends: FriendList = serde_json::from_str(body).unwrap();
        let names: Vec<_> = friends.friends.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["alice", "bob"]);
    }

    #[test]
    fn api_error_status_is_decoded_not_rejected() {
        let body = r#"{"status": "ERROR", "error_message": "File not found", "error_type": "NotFound"}"#;
        let resp: StatusResponse = serde_json::from_str(body).unwrap();
        assert!(!resp.is_ok());
        assert_eq!(resp.extra["error_type"], "NotFound");
    }
}
