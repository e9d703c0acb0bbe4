//! Run settings loaded via OrthoConfig.
//!
//! Settings come from `SECRET_SANTA_*` environment variables (and any
//! OrthoConfig configuration file). Command-line flags take precedence and
//! are applied by [`crate::cli`].

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::output::DEFAULT_SEPARATOR;

/// Optional defaults for a generation run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SECRET_SANTA")]
pub struct SantaSettings {
    /// Seed for a reproducible run.
    pub seed: Option<u64>,
    /// Text placed between gifter and giftee in the output file.
    pub separator: Option<String>,
    /// Write every valid assignment instead of one.
    #[ortho_config(default = false)]
    pub all: bool,
}

impl SantaSettings {
    /// Return the configured separator, falling back to the default.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings loading.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> SantaSettings {
        SantaSettings::load_from_iter([OsString::from("secret-santa")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("SECRET_SANTA_SEED", None::<String>),
            ("SECRET_SANTA_SEPARATOR", None::<String>),
            ("SECRET_SANTA_ALL", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.seed.is_none());
        assert!(settings.separator.is_none());
        assert_eq!(settings.separator(), DEFAULT_SEPARATOR);
        assert!(!settings.all);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("SECRET_SANTA_SEED", Some("2026".to_owned())),
            ("SECRET_SANTA_SEPARATOR", Some("=>".to_owned())),
            ("SECRET_SANTA_ALL", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.seed, Some(2026));
        assert_eq!(settings.separator(), "=>");
        assert!(settings.all);
    }
}
