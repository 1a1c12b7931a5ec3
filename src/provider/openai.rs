use crate::{
    config::{GenerationDefaults, OpenAiConfig},
    error::{GatewayError, Result},
    models::{
        ImageGenerationRequest, ImageGenerationResponse, OpenAiImageRequest, OpenAiImageResponse,
    },
    provider::ImageProvider,
};
use async_trait::async_trait;
use reqwest::Client;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct OpenAiImageClient {
    client: Client,
    api_key: String,
    organization: Option<String>,
    base_url: String,
    defaults: GenerationDefaults,
}

impl OpenAiImageClient {
    pub fn new(config: OpenAiConfig, defaults: GenerationDefaults) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| GatewayError::ConfigError("OpenAI API key is required".into()))?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client: Client::new(),
            api_key,
            organization: config.organization,
            base_url,
            defaults,
        })
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("dall-e-3", "DALL-E 3", "OpenAI"),
            ("dall-e-2", "DALL-E 2", "OpenAI"),
        ]
    }

    fn build_headers(&self) -> Result<reqwest::header::HeaderMap> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", self.api_key)
                .parse()
                .map_err(|_| GatewayError::ConfigError("API key is not a valid header".into()))?,
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json"
                .parse()
                .map_err(|_| GatewayError::InternalError("invalid content type header".into()))?,
        );
        if let Some(organization) = &self.organization {
            headers.insert(
                "OpenAI-Organization",
                organization.parse().map_err(|_| {
                    GatewayError::ConfigError("organization is not a valid header".into())
                })?,
            );
        }
        Ok(headers)
    }

    fn request_payload(&self, request: &ImageGenerationRequest) -> OpenAiImageRequest {
        OpenAiImageRequest {
            model: request
                .model_id
                .clone()
                .unwrap_or_else(|| self.defaults.model.clone()),
            prompt: request.prompt.clone(),
            n: request.num_images.unwrap_or(self.defaults.num_images),
            size: request
                .size
                .clone()
                .unwrap_or_else(|| self.defaults.size.clone()),
        }
    }
}

#[async_trait]
impl ImageProvider for OpenAiImageClient {
    async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse> {
        let payload = self.request_payload(&request);

        log::info!("Generating image with model: {}", payload.model);
        log::debug!("Prompt: {}", payload.prompt);

        let response = self
            .client
            .post(&format!("{}/images/generations", self.base_url))
            .headers(self.build_headers()?)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GatewayError::RequestError(format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GatewayError::ProviderError(format!(
                "OpenAI returned {}: {}",
                status, error_text
            )));
        }

        let api_response: OpenAiImageResponse = response.json().await.map_err(|e| {
            GatewayError::ResponseError(format!("Failed to parse OpenAI response: {}", e))
        })?;

        // The API may legitimately return no usable reference; that is the
        // caller's decision point, not an error here.
        let image_url = api_response
            .data
            .into_iter()
            .next()
            .and_then(|image| image.url);

        if image_url.is_none() {
            log::warn!("OpenAI response contained no image URL");
        }

        Ok(ImageGenerationResponse {
            image_url,
            model: payload.model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OpenAiImageClient {
        OpenAiImageClient::new(
            OpenAiConfig::new().with_api_key("sk-test"),
            GenerationDefaults::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_requires_api_key() {
        let result = OpenAiImageClient::new(OpenAiConfig::new(), GenerationDefaults::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_uses_server_defaults() {
        let payload = client().request_payload(&ImageGenerationRequest::from_prompt("a red fox"));
        assert_eq!(payload.model, "dall-e-3");
        assert_eq!(payload.size, "1024x1024");
        assert_eq!(payload.n, 1);
        assert_eq!(payload.prompt, "a red fox");
    }

    #[test]
    fn test_payload_respects_explicit_fields() {
        let request = ImageGenerationRequest {
            prompt: "a red fox".to_string(),
            model_id: Some("dall-e-2".to_string()),
            size: Some("512x512".to_string()),
            num_images: Some(2),
        };
        let payload = client().request_payload(&request);
        assert_eq!(payload.model, "dall-e-2");
        assert_eq!(payload.size, "512x512");
        assert_eq!(payload.n, 2);
    }

    #[test]
    fn test_supported_models() {
        let models = OpenAiImageClient::supported_models();
        assert!(models.iter().any(|(id, _, _)| *id == "dall-e-3"));
    }
}
