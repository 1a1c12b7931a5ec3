pub mod openai;

use crate::{
    error::Result,
    models::{ImageGenerationRequest, ImageGenerationResponse},
};
use async_trait::async_trait;

pub use openai::OpenAiImageClient;

/// Image generation from a text prompt. The gateway talks to the external
/// provider only through this seam.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse>;
}
