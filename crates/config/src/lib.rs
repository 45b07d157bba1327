pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::env;
use std::path::PathBuf;

pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Directory from `env_key` if set, else from the platform strategy, else a
/// per-app folder under the temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

pub fn config_dir<S: AppStrategy>(strategy: &S) -> PathBuf {
    resolve_dir("CONFIG_DIRECTORY", strategy, |s| Some(s.config_dir()))
}

pub fn data_dir<S: AppStrategy>(strategy: &S) -> PathBuf {
    resolve_dir("DATA_DIRECTORY", strategy, |s| Some(s.data_dir()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dir_uses_strategy() {
        let strategy = create_strategy().unwrap();
        let dir = resolve_dir("SYMDICT_TEST_UNSET_DIRECTORY", &strategy, |s| {
            Some(s.config_dir())
        });
        assert_eq!(dir, strategy.config_dir());
    }

    #[test]
    fn test_resolve_dir_falls_back_to_temp() {
        let strategy = create_strategy().unwrap();
        let dir = resolve_dir("SYMDICT_TEST_UNSET_DIRECTORY", &strategy, |_| None);
        assert_eq!(dir, env::temp_dir().join(constants::APP_NAME));
    }
}
