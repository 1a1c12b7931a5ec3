use std::fmt;

#[derive(Debug)]
pub enum GatewayError {
    ConfigError(String),
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    ProviderError(String),
    InternalError(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GatewayError::RequestError(msg) => write!(f, "Request error: {}", msg),
            GatewayError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GatewayError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            GatewayError::ProviderError(msg) => write!(f, "Provider error: {}", msg),
            GatewayError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::ProviderError("quota exceeded".into());
        assert_eq!(err.to_string(), "Provider error: quota exceeded");

        let err = GatewayError::ConfigError("OpenAI API key is required".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: OpenAI API key is required"
        );
    }
}
