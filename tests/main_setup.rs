use serial_test::serial;
use std::path::PathBuf;
use std::{env, panic};
use wellbeing_console::{config::Env, AppConfig};

// --- Setup/Teardown Utilities ---

/// Utility to run a test function and restore environment variables afterward
fn run_with_env<T, R>(test: T, cleanup_vars: Vec<&'static str>) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    // Save current environment variables
    let originals: Vec<(String, Option<String>)> = cleanup_vars
        .iter()
        .map(|&var| (var.to_string(), env::var(var).ok()))
        .collect();

    // Run the test
    let result = panic::catch_unwind(test);

    // Restore original environment variables
    for (key, original_value) in originals.into_iter().rev() {
        unsafe {
            if let Some(val) = original_value {
                env::set_var(&key, val);
            } else {
                env::remove_var(&key);
            }
        }
    }

    // Re-panic if the test failed
    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn test_app_config_production_fail_fast() {
    // We expect this to panic because the production API origin is not set
    let result = panic::catch_unwind(|| {
        unsafe {
            env::set_var("APP_ENV", "production");
            env::remove_var("WELLBEING_API_URL");
        }
        AppConfig::load()
    });

    // Cleanup
    unsafe {
        env::remove_var("APP_ENV");
    }

    // Assert that the config loading failed (panicked)
    assert!(
        result.is_err(),
        "Production config loading should panic without an API origin"
    );
}

#[test]
#[serial]
fn test_app_config_production_with_origin() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "production");
                env::set_var("WELLBEING_API_URL", "https://wellbeing.example.ac.uk");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "WELLBEING_API_URL"],
    );

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.api_base_url, "https://wellbeing.example.ac.uk");
}

#[test]
#[serial]
fn test_app_config_local_env_defaults() {
    // Local mode should not panic, and should use hardcoded defaults
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "local");
                // Clear other variables to test fallbacks
                env::remove_var("WELLBEING_API_URL");
                env::remove_var("WELLBEING_STATE_DIR");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "WELLBEING_API_URL", "WELLBEING_STATE_DIR"],
    );

    assert_eq!(config.env, Env::Local);
    // Check the dev server fallback origin
    assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
    // Check the dotted state directory fallback
    assert_eq!(config.state_dir, PathBuf::from(".wellbeing-console"));
}

#[test]
#[serial]
fn test_app_config_state_dir_override() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "local");
                env::set_var("WELLBEING_STATE_DIR", "/var/lib/wellbeing");
            }
            AppConfig::load()
        },
        vec!["APP_ENV", "WELLBEING_STATE_DIR"],
    );

    assert_eq!(config.state_dir, PathBuf::from("/var/lib/wellbeing"));
}

#[test]
#[serial]
fn test_app_config_unknown_env_falls_back_to_local() {
    let config = run_with_env(
        || {
            unsafe {
                env::set_var("APP_ENV", "staging");
            }
            AppConfig::load()
        },
        vec!["APP_ENV"],
    );

    assert_eq!(config.env, Env::Local);
}

#[test]
fn test_default_config_never_panics() {
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert!(!config.api_base_url.is_empty());
}
