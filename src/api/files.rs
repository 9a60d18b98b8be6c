// File endpoints: listing, search, folder management, MP4 and downloads.

use super::{join_ids, ApiClient};
use crate::error::Result;
use crate::models::{FileList, FileResponse, Mp4Response, SearchResult, StatusResponse, ZipResponse};

impl ApiClient {
    /// List the children of `parent_id`, or of the root folder when `None`.
    pub fn list_files(&self, parent_id: Option<i64>) -> Result<FileList> {
        let query: Vec<_> = parent_id
            .map(|id| ("parent_id", id.to_string()))
            .into_iter()
            .collect();
        self.get(&["files", "list"], &query)
    }

    /// One page of search results. The API's `next` link is returned as-is.
    pub fn search_files(&self, query: &str, page: i64) -> Result<SearchResult> {
        let page = page.to_string();
        self.get(&["files", "search", query, "page", page.as_str()], &[])
    }

    pub fn create_folder(&self, name: &str, parent_id: i64) -> Result<FileResponse> {
        self.post_form(
            &["files", "create-folder"],
            &[("name", name.to_string()), ("parent_id", parent_id.to_string())],
        )
    }

    pub fn get_file(&self, id: i64) -> Result<FileResponse> {
        let id = id.to_string();
        self.get(&["files", id.as_str()], &[])
    }

    pub fn delete_file(&self, id: i64) -> Result<StatusResponse> {
        self.post_form(&["files", "delete"], &[("file_ids", id.to_string())])
    }

    pub fn rename_file(&self, id: i64, name: &str) -> Result<StatusResponse> {
        self.post_form(
            &["files", "rename"],
            &[("file_id", id.to_string()), ("name", name.to_string())],
        )
    }

    pub fn move_file(&self, id: i64, parent_id: i64) -> Result<StatusResponse> {
        self.post_form(
            &["files", "move"],
            &[("file_ids", id.to_string()), ("parent_id", parent_id.to_string())],
        )
    }

    /// Ask the server to start transcoding `id` to MP4.
    pub fn convert_to_mp4(&self, id: i64) -> Result<StatusResponse> {
        let id = id.to_string();
        self.post_form(&["files", id.as_str(), "mp4"], &[])
    }

    pub fn get_mp4_status(&self, id: i64) -> Result<Mp4Response> {
        let id = id.to_string();
        self.get(&["files", id.as_str(), "mp4"], &[])
    }

    /// Where the bytes of `id` can be fetched from. The file itself is never
    /// downloaded.
    pub fn download_url(&self, id: i64) -> Result<String> {
        let id = id.to_string();
        self.resolve_redirect(&["files", id.as_str(), "download"])
    }

    /// Request a zip archive of `ids`.
    pub fn create_zip(&self, ids: &[i64]) -> Result<ZipResponse> {
        self.post_form(&["files", "zip"], &[("file_ids", join_ids(ids))])
    }
}
