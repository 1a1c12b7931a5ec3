use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub model_id: Option<String>,
    pub size: Option<String>,
    pub num_images: Option<u32>,
}

impl ImageGenerationRequest {
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        ImageGenerationRequest {
            prompt: prompt.into(),
            model_id: None,
            size: None,
            num_images: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageGenerationResponse {
    pub image_url: Option<String>,
    pub model: String,
}

/// Request body for the OpenAI `images/generations` endpoint.
#[derive(Debug, Serialize)]
pub struct OpenAiImageRequest {
    pub model: String,
    pub prompt: String,
    pub n: u32,
    pub size: String,
}

#[derive(Serialize, Deserialize)]
pub struct OpenAiImageResponse {
    pub data: Vec<OpenAiImageData>,
}

/// One generated image. The API returns `url` or `b64_json` depending on the
/// requested response format; this gateway only passes URLs through, so
/// `b64_json` is never decoded.
#[derive(Serialize, Deserialize)]
pub struct OpenAiImageData {
    pub url: Option<String>,
    pub b64_json: Option<String>,
    pub revised_prompt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_response_with_url() {
        let body = r#"{"data":[{"url":"https://x/img1.png","revised_prompt":"a red fox"}]}"#;
        let response: OpenAiImageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].url.as_deref(), Some("https://x/img1.png"));
        assert!(response.data[0].b64_json.is_none());
    }

    #[test]
    fn test_openai_response_empty_data() {
        let response: OpenAiImageResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert!(response.data.is_empty());
    }

    #[test]
    fn test_openai_request_payload_shape() {
        let request = OpenAiImageRequest {
            model: "dall-e-3".to_string(),
            prompt: "a red fox in snow".to_string(),
            n: 1,
            size: "1024x1024".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "dall-e-3");
        assert_eq!(json["n"], 1);
        assert_eq!(json["size"], "1024x1024");
    }
}
