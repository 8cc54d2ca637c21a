use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Settings read from the config file, then overridden by the environment.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) database: Option<PathBuf>,
    #[serde(default)]
    pub(crate) sessions: Option<PathBuf>,
    #[serde(default)]
    pub(crate) volatile: bool,
    #[serde(default)]
    pub(crate) form: Option<String>,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    /// File the settings came from, if any
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Config {
    pub(crate) fn load() -> Self {
        let mut config = Self::load_file();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    fn load_file() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                // A broken file is skipped so the next location still applies
                match Self::parse(&path, &content) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Warning: {e}"),
                }
            }
        }

        Self::default()
    }

    fn parse(path: &Path, content: &str) -> Result<Self, AppError> {
        let mut config: Config = toml::from_str(content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Connection settings are supplied out of band; the environment wins
    /// over the config file.
    fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("APPLYBOT_DATABASE").filter(|v| !v.is_empty()) {
            self.database = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("APPLYBOT_SESSIONS").filter(|v| !v.is_empty()) {
            self.sessions = Some(PathBuf::from(path));
        }
        if let Some(form) = lookup("APPLYBOT_FORM").filter(|v| !v.is_empty()) {
            self.form = Some(form);
        }
        if let Some(debug) = lookup("APPLYBOT_DEBUG") {
            self.debug = env_flag(&debug);
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/applybot/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("applybot").join("config.toml"));
        }

        // 2. Platform config dir (macOS Application Support, Windows AppData)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("applybot").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.applybot.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".applybot.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.to_string_lossy().contains("applybot")));
    }

    #[test]
    fn parses_toml_file() {
        let config: Config = toml::from_str(
            r#"
database = "/srv/applybot/applications.db"
volatile = true
form = "short"
"#,
        )
        .unwrap();
        assert_eq!(
            config.database,
            Some(PathBuf::from("/srv/applybot/applications.db"))
        );
        assert!(config.volatile);
        assert_eq!(config.form.as_deref(), Some("short"));
        assert!(!config.debug);
        assert!(config.sessions.is_none());
    }

    #[test]
    fn parse_records_source_path() {
        let path = Path::new("/home/me/.applybot.toml");
        let config = Config::parse(path, "debug = true\n").unwrap();
        assert!(config.debug);
        assert_eq!(config.source.as_deref(), Some(path));
    }

    #[test]
    fn parse_failure_names_the_file() {
        let err = Config::parse(Path::new("/home/me/.applybot.toml"), "form = [").unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(
            err.to_string()
                .starts_with("Failed to parse /home/me/.applybot.toml:")
        );
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config {
            database: Some(PathBuf::from("from-file.db")),
            form: Some("full".to_string()),
            ..Config::default()
        };
        let vars = env(&[
            ("APPLYBOT_DATABASE", "from-env.db"),
            ("APPLYBOT_FORM", "short"),
            ("APPLYBOT_DEBUG", "true"),
        ]);
        config.apply_env(|key| vars.get(key).cloned());

        assert_eq!(config.database, Some(PathBuf::from("from-env.db")));
        assert_eq!(config.form.as_deref(), Some("short"));
        assert!(config.debug);
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = Config {
            sessions: Some(PathBuf::from("sessions.json")),
            ..Config::default()
        };
        let vars = env(&[("APPLYBOT_SESSIONS", ""), ("APPLYBOT_DEBUG", "0")]);
        config.apply_env(|key| vars.get(key).cloned());

        assert_eq!(config.sessions, Some(PathBuf::from("sessions.json")));
        assert!(!config.debug);
    }
}
