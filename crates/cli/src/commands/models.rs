//! `jotter models`: list models that support `generateContent`.

use super::{load_config, print_missing_key_help};

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    if !config.has_api_key() {
        print_missing_key_help();
        return Err("No API key found. See above for setup instructions.".into());
    }

    let provider = jotter_providers::build_from_config(&config)?;
    let models = provider.list_models().await?;

    println!("🤖 Available models ({})", provider.name());
    println!("========================");
    if models.is_empty() {
        println!("  (none reported)");
    }
    for model in &models {
        let marker = if *model == config.model { "*" } else { " " };
        println!("  {marker} {model}");
    }
    println!();
    println!("  * = configured model");

    Ok(())
}
