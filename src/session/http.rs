use crate::{
    error::{GatewayError, Result},
    models::{ErrorResponse, GenerateRequest, GenerateResponse, GenerationRequest},
    session::GatewayClient,
};
use async_trait::async_trait;
use reqwest::Client;

/// HTTP client of the gateway's `/generate` route.
#[derive(Clone)]
pub struct HttpGatewayClient {
    client: Client,
    base_url: String,
}

impl HttpGatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Only the prompt crosses the wire; size/style shape the local record
    /// while the server generates with its own fixed configuration.
    fn wire_request(request: &GenerationRequest) -> GenerateRequest {
        GenerateRequest {
            prompt: request.prompt.clone(),
        }
    }
}

#[async_trait]
impl GatewayClient for HttpGatewayClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse> {
        let response = self
            .client
            .post(&format!("{}/generate", self.base_url))
            .json(&Self::wire_request(request))
            .send()
            .await
            .map_err(|e| GatewayError::RequestError(format!("Gateway request failed: {}", e)))?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "Failed to generate image.".to_string());
            return Err(GatewayError::ProviderError(message));
        }

        response.json::<GenerateResponse>().await.map_err(|e| {
            GatewayError::ResponseError(format!("Failed to parse gateway response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageSize, ImageStyle};

    #[test]
    fn test_wire_request_carries_prompt_only() {
        let request = GenerationRequest {
            prompt: "a red fox in snow".to_string(),
            size: ImageSize::Square1024,
            style: ImageStyle::Anime,
        };

        let wire = serde_json::to_value(HttpGatewayClient::wire_request(&request)).unwrap();
        assert_eq!(wire, serde_json::json!({ "prompt": "a red fox in snow" }));
    }
}
