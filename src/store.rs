use crate::api::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT};
use crate::types::AppResult;
use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::{fs::File, path::Path, path::PathBuf, time::Duration};

pub static SETTINGS_FILENAME: &str = "settings.json";
pub static LOG_FILENAME: &str = "worldcup.log";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

pub fn store_path(filename: &str) -> AppResult<PathBuf> {
    let dirs = directories::ProjectDirs::from("org", "codit", "worldcup")
        .ok_or(anyhow!("Failed to get directories"))?;
    let config_dirs = dirs.config_dir();
    if !config_dirs.exists() {
        std::fs::create_dir_all(config_dirs)?;
    }
    let path = config_dirs.join(filename);
    Ok(path)
}

/// Loads the settings file from the config directory, falling back to defaults
/// when there is none.
pub fn load_settings() -> AppResult<Settings> {
    let path = store_path(SETTINGS_FILENAME)?;
    if !path.exists() {
        return Ok(Settings::default());
    }
    load_from_json(&path)
}

fn load_from_json<T: for<'a> Deserialize<'a>>(path: &Path) -> AppResult<T> {
    let file = File::open(path)?;
    let data: T = serde_json::from_reader(file)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::{load_from_json, Settings};
    use crate::types::AppResult;
    use std::io::Write;

    #[test]
    fn test_partial_settings_use_defaults() -> AppResult<()> {
        let settings: Settings = serde_json::from_str(r#"{"api_base_url": "http://example.org/api"}"#)?;
        assert_eq!(settings.api_base_url, "http://example.org/api");
        assert_eq!(
            settings.request_timeout_secs,
            Settings::default().request_timeout_secs
        );
        Ok(())
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let settings = Settings {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(settings.request_timeout().as_secs(), 1);
    }

    #[test]
    fn test_load_from_json_file() -> AppResult<()> {
        let path = std::env::temp_dir().join(format!("worldcup_settings_{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path)?;
        file.write_all(br#"{"api_base_url": "http://10.0.0.2/api", "request_timeout_secs": 3}"#)?;
        drop(file);

        let settings: Settings = load_from_json(&path)?;
        std::fs::remove_file(&path)?;
        assert_eq!(settings.request_timeout_secs, 3);
        assert_eq!(settings.api_base_url, "http://10.0.0.2/api");
        Ok(())
    }
}
