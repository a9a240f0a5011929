//! Viewer configuration.
//!
//! Read from `<config_dir>/prizeline/config.toml` when the `config` feature is enabled.
//! A missing file means defaults; a malformed one is a [`PrizelineError::ConfigError`].
//! Command-line flags are applied on top by the binary.

use crate::dataset::Category;
use crate::error::{PrizelineError, Result};
use crate::render::ui::theme::ThemeName;
use crate::session::SessionState;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_INPUT_POLL_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Dataset file; the bundled dataset is used when unset.
    pub data_path: Option<PathBuf>,
    pub theme: ThemeName,
    /// Initial category selection; every category when unset.
    pub categories: Option<Vec<Category>>,
    pub input_poll_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            theme: ThemeName::Default,
            categories: None,
            input_poll_ms: DEFAULT_INPUT_POLL_MS,
        }
    }
}

impl ViewerConfig {
    /// Load from the default location, falling back to defaults when there is no file.
    pub fn load() -> Result<Self> {
        #[cfg(feature = "config")]
        {
            if let Some(path) = Self::default_path() {
                if path.is_file() {
                    return Self::load_from_path(&path);
                }
                log::debug!("no config file at {}", path.display());
            }
        }
        Ok(Self::default())
    }

    /// `<config_dir>/prizeline/config.toml`, if the platform has a config directory.
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("prizeline").join("config.toml"))
    }

    #[cfg(feature = "config")]
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            PrizelineError::file_error(format!("Cannot read config {}", path.display()), e)
        })?;
        let config = Self::from_toml_str(&text).map_err(|e| match e {
            PrizelineError::ConfigError { message } => {
                PrizelineError::config(format!("{}: {}", path.display(), message))
            }
            other => other,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    #[cfg(feature = "config")]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| PrizelineError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.input_poll_ms == 0 {
            return Err(PrizelineError::config("input_poll_ms must be positive"));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.input_poll_ms)
    }

    pub fn data_path(&self) -> Option<&Path> {
        self.data_path.as_deref()
    }

    /// Session state the viewer starts in.
    pub fn initial_session(&self) -> SessionState {
        match &self.categories {
            Some(categories) => SessionState::with_categories(categories.iter().copied()),
            None => SessionState::default(),
        }
    }
}

#[cfg(all(test, feature = "config"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = ViewerConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.poll_interval(), Duration::from_millis(50));
        assert_eq!(config.initial_session().selected_categories.len(), 6);
    }

    #[test]
    fn test_full_document() {
        let config = ViewerConfig::from_toml_str(
            r#"
            data_path = "/srv/prize.json.gz"
            theme = "high-contrast"
            categories = ["physics", "peace"]
            input_poll_ms = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.data_path(), Some(Path::new("/srv/prize.json.gz")));
        assert_eq!(config.theme, ThemeName::HighContrast);
        let session = config.initial_session();
        assert!(session.is_selected(Category::Physics));
        assert!(session.is_selected(Category::Peace));
        assert!(!session.is_selected(Category::Economics));
    }

    #[test]
    fn test_rejects_unknown_category_and_fields() {
        assert!(matches!(
            ViewerConfig::from_toml_str(r#"categories = ["astronomy"]"#),
            Err(PrizelineError::ConfigError { .. })
        ));
        assert!(matches!(
            ViewerConfig::from_toml_str("colour = \"red\""),
            Err(PrizelineError::ConfigError { .. })
        ));
        assert!(matches!(
            ViewerConfig::from_toml_str("input_poll_ms = 0"),
            Err(PrizelineError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "theme = \"monochrome\"").unwrap();
        file.flush().unwrap();

        let config = ViewerConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.theme, ThemeName::Monochrome);
    }
}
