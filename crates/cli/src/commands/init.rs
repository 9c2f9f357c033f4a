//! `jotter init`: write the default config file.

use jotter_config::AppConfig;

pub async fn run(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let path = AppConfig::config_path();

    AppConfig::write_default(&path, force)?;

    println!("✅ Created config at: {}", path.display());
    println!("\n📝 Next steps:");
    println!("   1. Set GOOGLE_GENERATIVE_AI_API_KEY (or add api_key to the file)");
    println!("   2. Run: jotter serve");
    println!("   3. Open the printed address and start journaling\n");

    Ok(())
}
