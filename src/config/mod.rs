//! TOML configuration for the checkout walkthrough.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{BackendConfig, Config, MerchantConfig, PaymentMethodConfig, ProviderConfig};
