//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use payflow::backend::HttpBackend;
use payflow::config::{BackendConfig, Config, ProviderConfig};
use payflow::flow::{FlowDefaults, PaymentFlowController};
use payflow::sdk::StripeSdk;
use std::path::PathBuf;
use tempfile::TempDir;

pub type LiveController = PaymentFlowController<HttpBackend, StripeSdk>;

/// Config pointing both the demo backend and the provider API at `base_url`.
pub fn config_for(base_url: &str) -> Config {
    Config {
        backend: BackendConfig {
            base_url: base_url.to_string(),
            ..BackendConfig::default()
        },
        provider: ProviderConfig {
            api_base: base_url.to_string(),
        },
        ..Config::default()
    }
}

/// Controller wired to real HTTP clients against `base_url`.
pub fn live_controller(base_url: &str) -> LiveController {
    let config = config_for(base_url);
    PaymentFlowController::new(
        HttpBackend::new(&config.backend).expect("backend client"),
        StripeSdk::new(&config.provider).expect("sdk client"),
        FlowDefaults::from(&config),
    )
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
