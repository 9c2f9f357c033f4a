//! `jotter serve`: start the HTTP gateway and web client.

use super::load_config;

pub async fn run(
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config()?;

    if let Some(host) = host_override {
        config.gateway.host = host;
    }
    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("📓 Jotter");
    println!("   Open:   http://{}:{}/", config.gateway.host, config.gateway.port);
    println!("   Model:  {}", config.model);
    if !config.has_api_key() {
        println!("   ⚠️  No API key set: chat requests will fail until one is configured");
    }

    jotter_gateway::start(config).await?;

    Ok(())
}
