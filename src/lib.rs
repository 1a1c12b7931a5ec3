pub mod config;
pub mod error;
pub mod gateway;
pub mod logger;
pub mod models;
pub mod provider;
pub mod session;

pub use config::{Config, GenerationDefaults, OpenAiConfig};
pub use error::{GatewayError, Result};
pub use gateway::{GatewayServer, GatewayState};
pub use models::{
    ErrorResponse, GenerateRequest, GenerateResponse, GenerationRequest, GenerationResult,
    GenerationSettings, ImageGenerationRequest, ImageGenerationResponse, ImageSize, ImageStyle,
    SessionState,
};
pub use provider::{ImageProvider, OpenAiImageClient};
pub use session::{GatewayClient, HttpGatewayClient, SessionController, SubmitOutcome};
