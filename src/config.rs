use std::env;
use std::path::PathBuf;

/// AppConfig
///
/// Holds the console's entire configuration state. This struct is designed to be
/// immutable once loaded, ensuring consistency across all components (e.g., Session Store,
/// API Client). It is embedded into the shared AppContext, embodying the "immutable
/// AppConfig" part of the Unified Context Pattern.
#[derive(Clone)]
pub struct AppConfig {
    // Origin of the wellbeing API server. The fixed `/api` base path is joined
    // onto this by the HTTP client, never stored here.
    pub api_base_url: String,
    // Directory holding the persisted credential slots (access token and role).
    pub state_dir: PathBuf,
    // Runtime environment marker. Controls log formatting and required settings.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between development conveniences
/// (localhost API fallback, pretty logs) and explicit, production-grade settings
/// (mandatory API origin, JSON logs).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for test setup.
    /// This allows us to instantiate the configuration without needing to set environment
    /// variables for lightweight unit or integration testing scaffolding.
    fn default() -> Self {
        // Provide safe, non-panicking dummy values for test setup
        Self {
            // Default dev server origin for local/testing convenience.
            api_base_url: "http://127.0.0.1:5000".to_string(),
            state_dir: env::temp_dir().join("wellbeing-console-test"),
            env: Env::Local,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the console configuration at startup.
    /// It reads all parameters from environment variables and implements the **fail-fast**
    /// principle.
    ///
    /// # Panics
    /// Panics if a critical environment variable required for the current runtime
    /// environment (especially Production) is not found. This prevents the console from
    /// starting pointed at nothing, with every request doomed to fail.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // API Origin Resolution
        // The production origin is mandatory and must be explicitly set.
        let api_base_url = match env {
            Env::Production => env::var("WELLBEING_API_URL")
                .expect("FATAL: WELLBEING_API_URL must be set in production."),
            // In local, we fall back to the dev server's default bind address.
            _ => env::var("WELLBEING_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string()),
        };

        // State Directory Resolution
        // Both environments accept an override; the fallback is a dotted directory
        // under the working directory, created on first persisted write.
        let state_dir = env::var("WELLBEING_STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".wellbeing-console"));

        Self {
            api_base_url,
            state_dir,
            env,
        }
    }
}
