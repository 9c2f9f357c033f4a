pub mod chat;
pub mod init;
pub mod models;
pub mod serve;
pub mod status;

use jotter_config::AppConfig;

/// Load config or explain why it could not be loaded.
pub(crate) fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    AppConfig::load().map_err(|e| format!("Failed to load config: {e}").into())
}

/// Print setup help when no API key is available.
pub(crate) fn print_missing_key_help() {
    eprintln!();
    eprintln!("  ERROR: No API key configured!");
    eprintln!();
    eprintln!("  Set one of these environment variables:");
    eprintln!("    GOOGLE_GENERATIVE_AI_API_KEY=...");
    eprintln!("    GEMINI_API_KEY=...");
    eprintln!("    JOTTER_API_KEY=...");
    eprintln!();
    eprintln!("  Or add `api_key` to your config file:");
    eprintln!("    {}", AppConfig::config_path().display());
    eprintln!();
}
