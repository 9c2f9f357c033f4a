//! `jotter status`: show effective configuration.

use jotter_config::{AppConfig, redact};

use super::load_config;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    println!("📓 Jotter Status");
    println!("================");
    println!("  Config file:     {}", AppConfig::config_path().display());
    println!("  Provider:        {}", config.provider);
    println!("  Model:           {}", config.model);
    println!("  API key:         {}", redact(&config.api_key));
    if let Some(url) = &config.api_url {
        println!("  API URL:         {url}");
    }
    println!("  Temperature:     {}", config.temperature);
    println!("  Max tokens:      {}", config.max_tokens);
    println!("  Max iterations:  {}", config.assistant.max_iterations);
    println!("  Gateway:         {}:{}", config.gateway.host, config.gateway.port);
    println!(
        "  System prompt:   {}",
        if config.assistant.system_prompt_override.is_some() { "custom" } else { "built-in" }
    );

    if AppConfig::config_path().exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file: run `jotter init` to create one");
    }

    Ok(())
}
