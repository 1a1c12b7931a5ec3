use std::env;

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub organization: Option<String>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            api_key: None,
            base_url: None,
            organization: None,
        }
    }
}

impl OpenAiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY").ok();
        let base_url = env::var("OPENAI_BASE_URL").ok();
        let organization = env::var("OPENAI_ORGANIZATION").ok();

        OpenAiConfig {
            api_key,
            base_url,
            organization,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }
}

/// Fixed server-side provider call configuration. Request-level settings do
/// not override these; the gateway always generates with this shape.
#[derive(Debug, Clone)]
pub struct GenerationDefaults {
    pub model: String,
    pub size: String,
    pub num_images: u32,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        GenerationDefaults {
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            num_images: 1,
        }
    }
}

impl GenerationDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_num_images(mut self, num_images: u32) -> Self {
        self.num_images = num_images;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub openai: Option<OpenAiConfig>,
    pub generation: GenerationDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            openai: None,
            generation: GenerationDefaults::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());

        Config {
            port,
            openai: Some(OpenAiConfig::from_env()),
            generation: GenerationDefaults::default(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_openai(mut self, config: OpenAiConfig) -> Self {
        self.openai = Some(config);
        self
    }

    pub fn with_generation(mut self, defaults: GenerationDefaults) -> Self {
        self.generation = defaults;
        self
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(5000)
    }
}
