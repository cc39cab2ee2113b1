use crate::config::ClientConfig;
use crate::upload::types::{
    Classification, ClassifyOutcome, ImageFile, UploadError, GENERIC_FAILURE,
};
use async_trait::async_trait;
use reqwest::{multipart, StatusCode};
use serde_json::Value;

/// Anything that can turn an image into a classification.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, image: ImageFile) -> ClassifyOutcome;
}

#[derive(Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClassifier {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: config.classify_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, image: ImageFile) -> ClassifyOutcome {
        let mime = image.mime();
        let (file_name, bytes) = image.into_bytes().await?;
        tracing::debug!(
            file = %file_name,
            bytes = bytes.len(),
            mime = %mime,
            endpoint = %self.endpoint,
            "posting image"
        );

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.essence_str())?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(e) => {
                tracing::warn!(status = %status, "failed to read response body: {}", e);
                Vec::new()
            }
        };

        interpret_response(status, &body)
    }
}

/// Maps a status and raw body onto the single outcome of a request.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> ClassifyOutcome {
    if status.is_success() {
        return serde_json::from_slice::<Classification>(body).map_err(|e| {
            tracing::warn!(status = %status, "unparseable classification body: {}", e);
            UploadError::MalformedResponse
        });
    }

    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_owned))
        .filter(|d| !d.is_empty());

    tracing::warn!(status = %status, detail = ?detail, "classification rejected");
    Err(UploadError::Rejected(
        detail.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
    ))
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
