//! AI fallback powered by the Gemini API

pub mod client;
pub mod fallback;

pub use client::GeminiClient;
