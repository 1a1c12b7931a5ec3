use dreamcanvas::{Config, GatewayServer, OpenAiConfig, OpenAiImageClient};
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    dreamcanvas::logger::init_with_config(
        dreamcanvas::logger::LoggerConfig::development()
            .with_level(dreamcanvas::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking OpenAI environment...");

    // Check the credential without printing its actual value
    match env::var("OPENAI_API_KEY") {
        Ok(api_key) => {
            log::info!("✅ OpenAI API key found in environment");
            log::debug!(
                "API key starts with: {}...",
                &api_key[..5.min(api_key.len())]
            );
        }
        Err(_) => {
            log::warn!("⚠️  OPENAI_API_KEY is not set");
            log::error!("❌ This will cause authentication failures at the provider");
        }
    }

    if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
        log::info!("OPENAI_BASE_URL: {}", base_url);
    }

    let config = Config::from_env();
    dreamcanvas::logger::log_config_info(&config);

    let openai_config = config.openai.clone().unwrap_or_else(OpenAiConfig::from_env);

    log::info!("🔄 Creating OpenAI image client...");
    let client = match OpenAiImageClient::new(openai_config, config.generation.clone()) {
        Ok(client) => {
            log::info!("✅ OpenAI image client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize OpenAI image client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🖼️  Available image generation models:");
    for (id, name, provider) in OpenAiImageClient::supported_models() {
        log::info!("  {} - {} ({})", id, name, provider);
    }

    GatewayServer::new(config, Arc::new(client)).run().await?;

    Ok(())
}
