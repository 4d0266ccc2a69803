use std::sync::Arc;

// --- Module Structure ---

// Core application services and components.
pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod session;

// Navigation: the static route table and the guard that polices it.
pub mod guard;
pub mod routes;

// The interactive surface.
pub mod shell;

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry point (main.rs).
pub use config::AppConfig;
pub use error::ApiError;
pub use guard::Navigator;
pub use http::ApiClient;
pub use session::{CredentialState, FileCredentialStore, MockCredentialStore, SessionStore};

/// AppContext
///
/// Implements the **Unified Context Pattern**. This is the single, thread-safe, and
/// immutable container holding all essential long-lived services. Every screen and
/// command works through this one context; cloning it clones cheap shared handles.
#[derive(Clone)]
pub struct AppContext {
    /// Configuration: The loaded, immutable environment configuration.
    pub config: AppConfig,
    /// Session Layer: Authenticated state plus its persistence backend.
    pub session: Arc<SessionStore>,
    /// Navigation Layer: The current screen and the guard policing moves.
    pub navigator: Arc<Navigator>,
    /// API Layer: The signing HTTP client for every remote call.
    pub api: Arc<ApiClient>,
}
