use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wellbeing_console::{
    config::{AppConfig, Env},
    routes,
    session::{CredentialState, FileCredentialStore, SessionStore},
    shell::Shell,
    ApiClient, AppContext, Navigator,
};

/// main
///
/// The asynchronous entry point for the console, responsible for initializing
/// all core components: Configuration, Logging, Session, Navigation, API Client,
/// and the interactive shell.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    // AppConfig::load() implements the fail-fast principle for missing Production settings.
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Sets the default log level. It prioritizes the RUST_LOG environment variable,
    // falling back to sensible defaults for local development.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wellbeing_console=debug,reqwest=info".into());

    // 3. Initialize Logging based on Environment
    // The structured logging format is dynamically selected based on the APP_ENV.
    // Logs go to stderr in both modes; stdout belongs to the rendered screens.
    match config.env {
        Env::Local => {
            // LOCAL: Pretty print output for human readability during local debugging.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        Env::Production => {
            // PROD: JSON format output for ingestion by centralized log aggregators
            // (e.g., Datadog, AWS CloudWatch). This is essential for monitoring.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }

    tracing::info!("Console starting in {:?} mode", config.env);

    // 4. Session Store Initialization (Rehydration)
    // Opens the persisted credential slots and restores any previous sign-in.
    let backend =
        Arc::new(FileCredentialStore::new(config.state_dir.clone())) as CredentialState;
    let session = Arc::new(SessionStore::open(backend).await);

    if session.is_authenticated() {
        tracing::info!("Restored a persisted session.");
    }

    // 5. Navigation Initialization
    // The navigator starts on the sign-in screen until told otherwise below.
    let navigator = Arc::new(Navigator::new(session.clone()));

    // 6. API Client Initialization
    // One shared client signs every request and watches for expired sessions.
    let api = Arc::new(ApiClient::new(&config, session.clone(), navigator.clone()));

    // 7. Unified Context Assembly
    // Bundles all initialized dependencies into the shared AppContext.
    let ctx = AppContext {
        config,
        session: session.clone(),
        navigator: navigator.clone(),
        api,
    };

    // 8. Landing and Shell Startup
    // A restored session resumes on its landing screen; everyone else starts at
    // sign-in. The guard makes this decision, not us.
    let landing = routes::landing_for(&session.snapshot());
    navigator.navigate(landing).await;

    tracing::info!("Console ready.");

    // The long-running interactive loop.
    let mut shell = Shell::new(ctx);
    shell.run().await;
}
