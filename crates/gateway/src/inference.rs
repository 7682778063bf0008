//! REST client for the model inference API.
//!
//! Wraps the hosted prediction endpoints (Replicate-style
//! `POST /v1/models/{model}/predictions`) using [`reqwest`]. The request
//! blocks server-side until the prediction resolves (`Prefer: wait`), so
//! a single call yields the model output.

use serde::Deserialize;

/// HTTP client for the inference service.
pub struct InferenceClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

/// Response body of a resolved prediction.
#[derive(Debug, Deserialize)]
struct PredictionResponse {
    output: Option<serde_json::Value>,
    error: Option<String>,
}

/// Errors from the inference REST layer.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Inference API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The prediction resolved but reported a model-side failure.
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}

impl InferenceClient {
    /// Create a new client.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `https://api.replicate.com`.
    /// * `token`   - API token sent as a bearer credential.
    pub fn new(api_url: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            token,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, api_url: String, token: String) -> Self {
        Self {
            client,
            api_url,
            token,
        }
    }

    /// Run a model synchronously and return its raw output value.
    ///
    /// `model` is an `owner/name` slug. The returned value is whatever
    /// the model produced; pass it through
    /// [`normalize_output`](crate::output::normalize_output) to obtain a
    /// canonical payload.
    pub async fn run(
        &self,
        model: &str,
        input: &serde_json::Value,
    ) -> Result<serde_json::Value, InferenceError> {
        let body = serde_json::json!({ "input": input });

        let response = self
            .client
            .post(format!("{}/v1/models/{model}/predictions", self.api_url))
            .bearer_auth(&self.token)
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await?;

        let prediction: PredictionResponse = Self::parse_response(response).await?;
        if let Some(err) = prediction.error {
            return Err(InferenceError::PredictionFailed(err));
        }
        prediction
            .output
            .ok_or_else(|| InferenceError::PredictionFailed("prediction has no output".into()))
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`InferenceError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, InferenceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(InferenceError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, InferenceError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
