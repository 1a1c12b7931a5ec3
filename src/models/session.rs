use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    Square256,
    #[serde(rename = "512x512")]
    Square512,
    #[serde(rename = "1024x1024")]
    Square1024,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Square256 => "256x256",
            ImageSize::Square512 => "512x512",
            ImageSize::Square1024 => "1024x1024",
        }
    }

    pub fn all() -> &'static [ImageSize] {
        &[
            ImageSize::Square256,
            ImageSize::Square512,
            ImageSize::Square1024,
        ]
    }
}

impl Default for ImageSize {
    fn default() -> Self {
        ImageSize::Square512
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Realistic,
    Artistic,
    Anime,
    Abstract,
}

impl ImageStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStyle::Realistic => "realistic",
            ImageStyle::Artistic => "artistic",
            ImageStyle::Anime => "anime",
            ImageStyle::Abstract => "abstract",
        }
    }

    pub fn all() -> &'static [ImageStyle] {
        &[
            ImageStyle::Realistic,
            ImageStyle::Artistic,
            ImageStyle::Anime,
            ImageStyle::Abstract,
        ]
    }
}

impl Default for ImageStyle {
    fn default() -> Self {
        ImageStyle::Realistic
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub size: ImageSize,
    pub style: ImageStyle,
}

/// Snapshot taken at submit time. Immutable once created; later settings
/// edits do not touch an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub size: ImageSize,
    pub style: ImageStyle,
}

/// One successful generation, owned by the session history. Never mutated
/// after construction; dropped only with the session itself.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub id: Uuid,
    pub image_reference: String,
    pub prompt: String,
    pub created_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn new(prompt: impl Into<String>, image_reference: impl Into<String>) -> Self {
        GenerationResult {
            id: Uuid::new_v4(),
            image_reference: image_reference.into(),
            prompt: prompt.into(),
            created_at: Utc::now(),
        }
    }
}

/// State owned by the session controller. `pending` is true exactly while a
/// dispatched request has not yet settled. History is newest-first and is
/// never reordered or deduplicated.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub prompt: String,
    pub settings: GenerationSettings,
    pub pending: bool,
    pub history: Vec<GenerationResult>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn latest(&self) -> Option<&GenerationResult> {
        self.history.first()
    }
}
