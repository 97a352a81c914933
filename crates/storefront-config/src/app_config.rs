//! Application configuration structures.

use serde::{Deserialize, Serialize};
use storefront_core::telemetry::TelemetryConfig;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Logging configuration.
    #[serde(default)]
    pub observability: TelemetryConfig,

    /// Stock rules applied to purchases.
    #[serde(default)]
    pub inventory: InventoryConfig,

    /// Entity/DTO mapping behaviour.
    #[serde(default)]
    pub mapping: MappingConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "storefront".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Inventory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Reject new purchases whose items exceed the product stock.
    pub enforce_stock_check: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            enforce_stock_check: true,
        }
    }
}

/// Mapping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingConfig {
    /// Log discarded changes to immutable purchase item fields at `warn`
    /// level instead of `debug`.
    pub warn_on_ignored_changes: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            warn_on_ignored_changes: true,
        }
    }
}
