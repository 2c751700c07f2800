//! Pure auth backend REST API client.
//!
//! A clean, minimal client for the MyDrive backend API with no
//! domain-specific logic. Covers registration, login, email OTP send/verify,
//! Google ID-token verification, logout, session and user lookups, and the
//! `/files` storage endpoints via [`AuthClient::files`].
//!
//! Response bodies are server-defined JSON and are returned as
//! [`serde_json::Value`] without any status-code inspection: the backend
//! reports failures inside its JSON envelope (`success`, `message`, ...),
//! so a non-2xx response still parses and is handed back as data. Callers
//! check the envelope themselves. The one exception is [`AuthClient::send_email_otp`],
//! which hands back the raw [`reqwest::Response`] unparsed.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth_client::AuthClient;
//!
//! let client = AuthClient::new("https://api.example.com");
//!
//! let created = client.register("Ada Lovelace", "ada@example.com").await?;
//! let account_id = created["data"]["accountId"].as_str().unwrap_or_default();
//!
//! client.send_email_otp("ada@example.com").await?;
//! let session = client.verify_otp(account_id, "123456").await?;
//! ```

pub mod error;
pub mod files;
pub mod types;

pub use error::{AuthError, Result};
pub use files::FilesClient;
pub use types::{
    GoogleVerifyRequest, LoginRequest, RegisterRequest, RenameRequest, SendOtpRequest, ShareMode,
    ShareUserRequest, VerifyOtpRequest,
};

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Pure auth API client.
///
/// Holds only an HTTP client and the backend base URL; cheap to clone, and
/// calls are independent so it can be shared across tasks freely.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http_client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from the `BACKEND_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("BACKEND_URL")
            .map_err(|_| AuthError::Config("BACKEND_URL not set".into()))?;
        Ok(Self::new(base_url))
    }

    /// Replace the HTTP client, e.g. with one built with a cookie store so
    /// the backend's `session` cookie survives across calls.
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Access the `/files` endpoints with the same HTTP client and session.
    pub fn files(&self) -> FilesClient<'_> {
        FilesClient::new(self)
    }

    /// Register a new account. The backend responds with the new
    /// `accountId` and sends an OTP to the email.
    pub async fn register(&self, full_name: &str, email: &str) -> Result<Value> {
        let request = RegisterRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
        };

        debug!(email, "Registering account");
        self.post_json("/auth/register", &request).await
    }

    /// Start an email login. The backend responds with the `accountId` and
    /// sends an OTP to the email.
    pub async fn login(&self, email: &str) -> Result<Value> {
        let request = LoginRequest {
            email: email.to_string(),
        };

        debug!(email, "Logging in");
        self.post_json("/auth/login", &request).await
    }

    /// Request an email OTP. Unlike the other operations this returns the
    /// raw response unparsed; callers inspect the status or parse the body
    /// themselves.
    pub async fn send_email_otp(&self, email: &str) -> Result<reqwest::Response> {
        let request = SendOtpRequest {
            email: email.to_string(),
        };

        debug!(email, "Sending email OTP");
        let response = self
            .http_client
            .post(format!("{}/auth/send-otp", self.base_url))
            .json(&request)
            .send()
            .await?;

        Ok(response)
    }

    /// Verify an email OTP. On success the backend creates a session and
    /// responds with its token.
    pub async fn verify_otp(&self, account_id: &str, passcode: &str) -> Result<Value> {
        let request = VerifyOtpRequest {
            account_id: account_id.to_string(),
            passcode: passcode.to_string(),
        };

        debug!(account_id, "Verifying OTP");
        self.post_json("/auth/verify-otp", &request).await
    }

    /// Verify a Google ID token obtained from Google Sign-In. The backend
    /// finds or creates the account and responds with a session.
    pub async fn verify_google(&self, id_token: &str) -> Result<Value> {
        let request = GoogleVerifyRequest {
            id_token: id_token.to_string(),
        };

        debug!("Verifying Google ID token");
        self.post_json("/auth/google/verify", &request).await
    }

    /// Log out the current session. Requires the HTTP client to carry the
    /// backend's `session` cookie (see [`AuthClient::with_http_client`]).
    pub async fn logout(&self) -> Result<Value> {
        debug!("Logging out");
        let response = self
            .http_client
            .post(format!("{}/auth/logout", self.base_url))
            .send()
            .await?;

        Ok(response.json().await?)
    }

    /// Fetch the authenticated user's profile. Requires the HTTP client to
    /// carry the backend's `session` cookie.
    pub async fn current_user(&self) -> Result<Value> {
        debug!("Fetching current user");
        self.get_json("/users/me").await
    }

    /// Verify the current session and fetch its user. Requires the HTTP
    /// client to carry the backend's `session` cookie.
    pub async fn current_session(&self) -> Result<Value> {
        debug!("Checking session");
        self.get_json("/sessions/me").await
    }

    /// POST a JSON body and parse the response body as JSON regardless of
    /// HTTP status. The backend reports failures inside its JSON envelope,
    /// so a non-2xx error body comes back as data, not as `Err`.
    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        Ok(response.json().await?)
    }

    /// GET and parse the response body as JSON regardless of HTTP status.
    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;

        Ok(response.json().await?)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.http_client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = AuthClient::new("https://api.example.com");

        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = AuthClient::new("https://api.example.com/");

        assert_eq!(client.base_url(), "https://api.example.com");
    }

    // Both branches in one test so no other test can race the variable.
    #[test]
    fn test_from_env() {
        std::env::remove_var("BACKEND_URL");
        let err = AuthClient::from_env().unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));

        std::env::set_var("BACKEND_URL", "https://api.example.com/");
        let client = AuthClient::from_env().unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");

        std::env::remove_var("BACKEND_URL");
    }
}
