//! Files API client.
//!
//! Wraps the backend's `/files` endpoints: upload, listing, rename, delete,
//! public and per-user sharing, access checks, download, and the storage
//! usage summary. Obtained from [`AuthClient::files`]; it borrows the auth
//! client's HTTP handle and base URL, so a cookie-store-enabled client set
//! via [`AuthClient::with_http_client`] covers both.
//!
//! The response contract is the same as the auth operations: bodies are the
//! backend's JSON envelope, parsed without any status-code inspection, and
//! `download` hands back the raw [`reqwest::Response`] since the backend
//! streams the file itself rather than JSON.

use crate::error::Result;
use crate::types::{RenameRequest, ShareMode, ShareUserRequest};
use crate::AuthClient;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

/// Client for the `/files` endpoints. Everything here except
/// [`FilesClient::public_access`] requires the HTTP client to carry the
/// backend's `session` cookie.
#[derive(Debug, Clone, Copy)]
pub struct FilesClient<'a> {
    client: &'a AuthClient,
}

impl<'a> FilesClient<'a> {
    pub(crate) fn new(client: &'a AuthClient) -> Self {
        Self { client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/files{}", self.client.base_url(), path)
    }

    /// Upload a file as `multipart/form-data` under the `upload` field.
    /// The backend stores it in the account's directory and responds with
    /// the new file record.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<Value> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("upload", part);

        debug!(file_name, "Uploading file");
        let response = self
            .client
            .http_client()
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await?;

        Ok(response.json().await?)
    }

    /// List the account's files. The envelope carries `documents` and
    /// `total`.
    pub async fn list(&self) -> Result<Value> {
        debug!("Listing files");
        self.client.get_json("/files/").await
    }

    /// Delete a file owned by the current user.
    pub async fn delete(&self, file_id: &str) -> Result<Value> {
        debug!(file_id, "Deleting file");
        let response = self
            .client
            .http_client()
            .delete(self.url(&format!("/{file_id}")))
            .send()
            .await?;

        Ok(response.json().await?)
    }

    /// Rename a file owned by the current user.
    pub async fn rename(&self, file_id: &str, name: &str) -> Result<Value> {
        let request = RenameRequest {
            name: name.to_string(),
        };

        debug!(file_id, name, "Renaming file");
        let response = self
            .client
            .http_client()
            .put(self.url(&format!("/rename/{file_id}")))
            .json(&request)
            .send()
            .await?;

        Ok(response.json().await?)
    }

    /// Generate (or return the existing) public share link for a file.
    /// The envelope carries `token` and `shareUrl`.
    pub async fn share_public(&self, file_id: &str) -> Result<Value> {
        debug!(file_id, "Generating public share link");
        self.post_empty(&format!("/share/{file_id}/public")).await
    }

    /// Disable a file's public share link.
    pub async fn disable_public_link(&self, file_id: &str) -> Result<Value> {
        debug!(file_id, "Disabling public share link");
        self.post_empty(&format!("/share/{file_id}/disable")).await
    }

    /// Resolve a public share token to the shared file's metadata. The one
    /// operation here that needs no session.
    pub async fn public_access(&self, token: &str) -> Result<Value> {
        debug!("Resolving public share token");
        self.client.get_json(&format!("/files/public/{token}")).await
    }

    /// Grant or revoke another user's access to a file by email.
    pub async fn share_with_user(
        &self,
        file_id: &str,
        email: &str,
        mode: ShareMode,
    ) -> Result<Value> {
        let request = ShareUserRequest {
            email: email.to_string(),
            mode,
        };

        debug!(file_id, email, ?mode, "Updating file share");
        let response = self
            .client
            .http_client()
            .post(self.url(&format!("/share-user/{file_id}")))
            .json(&request)
            .send()
            .await?;

        Ok(response.json().await?)
    }

    /// Check the current user's access to a file. The envelope carries
    /// `access` and `role` (`owner` or `shared-user`).
    pub async fn check_access(&self, file_id: &str) -> Result<Value> {
        debug!(file_id, "Checking file access");
        self.client.get_json(&format!("/files/access/{file_id}")).await
    }

    /// Download a file. Returns the raw response: the backend streams the
    /// file body with a `Content-Disposition` header, so there is nothing
    /// to parse here and callers read the bytes themselves.
    pub async fn download(&self, file_id: &str) -> Result<reqwest::Response> {
        debug!(file_id, "Downloading file");
        let response = self
            .client
            .http_client()
            .get(self.url(&format!("/download/{file_id}")))
            .send()
            .await?;

        Ok(response)
    }

    /// Per-category storage usage summary for the account.
    pub async fn usage(&self) -> Result<Value> {
        debug!("Fetching storage usage");
        self.client.get_json("/files/usage").await
    }

    /// POST with no body and parse the envelope regardless of status.
    async fn post_empty(&self, path: &str) -> Result<Value> {
        let response = self
            .client
            .http_client()
            .post(self.url(path))
            .send()
            .await?;

        Ok(response.json().await?)
    }
}
