use reqwest::{Client, Response};

use crate::{api::types::ApiError, config};

/// Thin wrapper over `reqwest::Client` that resolves the service base URL
/// from runtime config unless a test override is supplied.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// A send that never reached the server; surfaces as status 0 so callers
    /// can distinguish connectivity loss from a server-side rejection.
    pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
        ApiError::connection(format!("Request failed: {}", err))
    }

    /// Maps a non-2xx response to an `ApiError`, preferring the server's own
    /// error payload when the body parses as one.
    pub(crate) async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let fallback = format!("Request failed with status {}", status);
        let mut error = match response.json::<ApiError>().await {
            Ok(parsed) if !parsed.error.is_empty() => parsed,
            _ => ApiError::unknown(fallback),
        };
        error.status = Some(status);
        error
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
