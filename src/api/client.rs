//! HTTP client for the authentication backend

use serde::{de::DeserializeOwned, Serialize};
use std::sync::OnceLock;

use super::types::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ResendOtpRequest,
    ResendOtpResponse, VerifyOtpRequest, VerifyOtpResponse,
};

static API_BASE: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup.
pub fn init_api_base(url: String) {
    API_BASE.set(url).ok();
}

/// Get the configured API base URL.
pub fn api_base() -> &'static str {
    API_BASE
        .get()
        .map(|s| s.as_str())
        .unwrap_or("http://localhost:5000/api")
}

/// Shown when no response was received at all.
pub const CONNECTIVITY_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Shown for any failure the backend did not explain.
pub const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

/// Error type for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Backend(String),

    #[error("unexpected response from the server")]
    Unexpected,
}

impl ApiError {
    /// The message shown to the user for this failure: backend messages
    /// verbatim, a connectivity message when no response arrived, and a
    /// generic retry message for everything else.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend(message) => message.clone(),
            ApiError::Network(source) if !source.is_decode() => CONNECTIVITY_MESSAGE.to_string(),
            _ => RETRY_MESSAGE.to_string(),
        }
    }
}

/// Map a `success: false` response body to an error.
fn rejection(message: Option<String>) -> ApiError {
    match message {
        Some(message) if !message.is_empty() => ApiError::Backend(message),
        _ => ApiError::Unexpected,
    }
}

/// Client for the authentication endpoints.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client against a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Submit a registration. Returns the verification-token response on
    /// success; a `success: false` body becomes `ApiError::Backend`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let response: RegisterResponse = self.post("/register", request).await?;
        if !response.success {
            return Err(rejection(response.message));
        }
        Ok(response)
    }

    /// Confirm a registration with the 4-digit code.
    pub async fn verify_otp(
        &self,
        request: &VerifyOtpRequest,
    ) -> Result<VerifyOtpResponse, ApiError> {
        let response: VerifyOtpResponse = self.post("/verify-otp", request).await?;
        if !response.success {
            return Err(rejection(response.message));
        }
        Ok(response)
    }

    /// Request a fresh code for a pending registration.
    pub async fn resend_otp(
        &self,
        request: &ResendOtpRequest,
    ) -> Result<ResendOtpResponse, ApiError> {
        let response: ResendOtpResponse = self.post("/resend-otp", request).await?;
        if !response.success {
            return Err(rejection(response.message));
        }
        Ok(response)
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.post("/login", request).await?;
        if !response.success {
            return Err(rejection(response.message));
        }
        Ok(response)
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|error| {
                tracing::warn!("request to {} failed: {}", path, error);
                ApiError::Network(error)
            })?;

        // Failure responses reuse the same JSON shape on non-2xx statuses;
        // the `success` flag is authoritative, not the status code.
        response.json().await.map_err(ApiError::from)
    }
}

/// Client pointed at the configured backend.
pub fn client() -> ApiClient {
    ApiClient::new(api_base())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_surfaces_verbatim() {
        let error = rejection(Some("Invalid credentials".to_string()));
        assert_eq!(error.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_missing_backend_message_falls_back_to_retry() {
        assert_eq!(rejection(None).user_message(), RETRY_MESSAGE);
        assert_eq!(rejection(Some(String::new())).user_message(), RETRY_MESSAGE);
    }

    #[test]
    fn test_unexpected_maps_to_retry_message() {
        assert_eq!(ApiError::Unexpected.user_message(), RETRY_MESSAGE);
    }
}
