//! LLM provider implementations for Jotter.
//!
//! Providers implement the `jotter_core::Provider` trait. The router builds
//! the configured one from an `AppConfig`.

pub mod gemini;
pub mod router;

pub use gemini::GeminiProvider;
pub use router::{MISSING_API_KEY, build_from_config};
