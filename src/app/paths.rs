// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` and the diagnostics report live.
//!
//! The first of these wins: an explicit directory passed by the caller, the
//! `--config-dir` flag, `PRODUCT_SHOWCASE_CONFIG_DIR`, then the platform
//! config directory plus [`APP_NAME`].

use std::path::PathBuf;
use std::sync::OnceLock;

pub const APP_NAME: &str = "ProductShowcase";

pub const ENV_CONFIG_DIR: &str = "PRODUCT_SHOWCASE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records `--config-dir`. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

/// Resolves the config directory without an explicit override.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_NAME)))
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below share the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<R>(value: Option<&str>, check: impl FnOnce() -> R) -> R {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match value {
            Some(value) => std::env::set_var(ENV_CONFIG_DIR, value),
            None => std::env::remove_var(ENV_CONFIG_DIR),
        }
        let result = check();
        std::env::remove_var(ENV_CONFIG_DIR);
        result
    }

    #[test]
    fn explicit_directory_beats_environment() {
        let resolved = with_env(Some("/from/env"), || {
            get_app_config_dir_with_override(Some(PathBuf::from("/explicit")))
        });
        assert_eq!(resolved, Some(PathBuf::from("/explicit")));
    }

    #[test]
    fn environment_beats_platform_default() {
        let resolved = with_env(Some("/from/env"), get_app_config_dir);
        assert_eq!(resolved, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let resolved = with_env(Some(""), get_app_config_dir);
        if let Some(path) = resolved {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
