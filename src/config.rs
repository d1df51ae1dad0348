// src/config.rs

use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 5000);
const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_OLLAMA_MODEL: &str = "gemma3:4b";

/// Service configuration, sourced from the environment with local-dev
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub ollama_base_url: String,
    pub ollama_model: String,
}

impl Config {
    /// Reads `SEOLENS_BIND_ADDR`, `SEOLENS_OLLAMA_URL`, and
    /// `SEOLENS_OLLAMA_MODEL`, falling back to defaults for anything unset
    /// or unparseable.
    pub fn from_env() -> Self {
        let bind_addr = env::var("SEOLENS_BIND_ADDR")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_BIND_ADDR));
        let ollama_base_url =
            env::var("SEOLENS_OLLAMA_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string());
        let ollama_model =
            env::var("SEOLENS_OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.to_string());

        Self {
            bind_addr,
            ollama_base_url,
            ollama_model,
        }
    }
}
