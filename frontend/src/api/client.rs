use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::api::types::ApiError;
use crate::config;

/// Shared HTTP client. Per-concern request methods live in `auth.rs` and
/// `company.rs`; everything funnels through `dispatch` so host tests can
/// intercept requests without opening sockets.
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

    /// Builds and sends a request. Registered test responders take the
    /// request instead of the network when one matches the URL.
    pub(crate) async fn dispatch(&self, builder: RequestBuilder) -> Result<HttpResponse, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        {
            if let Some(responder) = find_responder(request.url().as_str()) {
                return responder.respond(&request).map(HttpResponse::Mock);
            }
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Ok(HttpResponse::Network(response))
    }

    /// Sends a request and parses the JSON body, turning non-2xx statuses
    /// into the `ApiError` the server put in the body.
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(builder).await?;
        if response.is_success() {
            response.json().await
        } else {
            Err(response.error_body().await)
        }
    }
}

pub(crate) enum HttpResponse {
    Network(reqwest::Response),
    #[cfg(all(test, not(target_arch = "wasm32")))]
    Mock(MockResponse),
}

impl HttpResponse {
    pub(crate) fn status(&self) -> u16 {
        match self {
            HttpResponse::Network(response) => response.status().as_u16(),
            #[cfg(all(test, not(target_arch = "wasm32")))]
            HttpResponse::Mock(response) => response.status(),
        }
    }

    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }

    pub(crate) async fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            HttpResponse::Network(response) => response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e))),
            #[cfg(all(test, not(target_arch = "wasm32")))]
            HttpResponse::Mock(response) => response.json_into(),
        }
    }

    async fn error_body(self) -> ApiError {
        let status = self.status();
        match self.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::unknown(format!("Request failed with status {}", status)),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_seam::{register_mock, MockResponse, TestResponder};


#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_seam::find_responder;
