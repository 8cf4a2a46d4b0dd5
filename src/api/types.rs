//! Request and response bodies for the authentication backend

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Response to `POST /api/register`. `token` is the verification token the
/// OTP screen needs; present on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub token: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendOtpRequest {
    pub token: String,
}

/// Response to `POST /api/resend-otp`. The backend rotates the verification
/// token on success and returns the replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendOtpResponse {
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to `POST /api/login`. `token` is the session token; present on
/// success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_uses_camel_case() {
        let request = RegisterRequest {
            email: "user@example.com".to_string(),
            username: "user".to_string(),
            password: "Passw0rd!".to_string(),
            confirm_password: "Passw0rd!".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["confirmPassword"], "Passw0rd!");
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn test_login_failure_body_parses() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#)
                .unwrap();

        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
        assert!(response.token.is_none());
    }

    #[test]
    fn test_register_success_body_parses() {
        let response: RegisterResponse = serde_json::from_str(
            r#"{"success": true, "message": "OTP has been sent to your email!", "token": "abc.def.ghi"}"#,
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(response.token.as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_resend_response_carries_rotated_token() {
        let response: ResendOtpResponse = serde_json::from_str(
            r#"{"success": true, "message": "OTP has been resent to your email!", "token": "new-token"}"#,
        )
        .unwrap();

        assert_eq!(response.token.as_deref(), Some("new-token"));

        // Failure responses omit the token.
        let response: ResendOtpResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid token"}"#).unwrap();
        assert!(response.token.is_none());
    }
}
