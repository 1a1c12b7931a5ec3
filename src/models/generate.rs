use serde::{Deserialize, Serialize};

/// Wire request for `POST /generate`. Only the prompt crosses this boundary;
/// client-side size/style settings stay client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Wire success response. `imageUrl` is omitted entirely when the provider
/// returned no image reference; an empty result is still a success here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Wire failure response. The message is static; the underlying provider
/// failure is logged server-side and never disclosed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn generation_failed() -> Self {
        ErrorResponse {
            error: "Failed to generate image.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_omits_absent_image_url() {
        let response = GenerateResponse { image_url: None };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, "{}");

        let response = GenerateResponse {
            image_url: Some("https://x/img1.png".to_string()),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"imageUrl":"https://x/img1.png"}"#);
    }

    #[test]
    fn test_request_round_trip() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"prompt":"a red fox in snow"}"#).unwrap();
        assert_eq!(request.prompt, "a red fox in snow");
    }

    #[test]
    fn test_error_response_message() {
        let body = serde_json::to_string(&ErrorResponse::generation_failed()).unwrap();
        assert_eq!(body, r#"{"error":"Failed to generate image."}"#);
    }
}
