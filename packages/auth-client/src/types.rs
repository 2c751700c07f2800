//! Auth backend request payloads.
//!
//! Field names follow the backend's wire format exactly; `#[serde(rename)]`
//! covers the spots where it differs from Rust naming.

use serde::Serialize;

/// Body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    #[serde(rename = "fullname")]
    pub full_name: String,
    pub email: String,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Body for `POST /auth/send-otp`.
#[derive(Debug, Clone, Serialize)]
pub struct SendOtpRequest {
    pub email: String,
}

/// Body for `POST /auth/verify-otp`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub passcode: String,
}

/// Body for `POST /auth/google/verify`. The `id_token` comes from Google
/// Sign-In on the caller's side.
#[derive(Debug, Clone, Serialize)]
pub struct GoogleVerifyRequest {
    pub id_token: String,
}

/// Body for `PUT /files/rename/{file_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct RenameRequest {
    pub name: String,
}

/// Whether a per-user share is being granted or revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareMode {
    Share,
    Unshare,
}

/// Body for `POST /files/share-user/{file_id}`.
#[derive(Debug, Clone, Serialize)]
pub struct ShareUserRequest {
    pub email: String,
    pub mode: ShareMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_wire_format() {
        let req = RegisterRequest {
            full_name: "Ada".to_string(),
            email: "a@x.com".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"fullname": "Ada", "email": "a@x.com"})
        );
    }

    #[test]
    fn test_verify_otp_wire_format() {
        let req = VerifyOtpRequest {
            account_id: "123".to_string(),
            passcode: "000000".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"accountId": "123", "passcode": "000000"})
        );
    }

    #[test]
    fn test_share_user_wire_format() {
        let req = ShareUserRequest {
            email: "b@x.com".to_string(),
            mode: ShareMode::Unshare,
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"email": "b@x.com", "mode": "unshare"})
        );
    }

    #[test]
    fn test_google_verify_wire_format() {
        let req = GoogleVerifyRequest {
            id_token: "tok".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"id_token": "tok"})
        );
    }
}
