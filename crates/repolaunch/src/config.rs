use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use github_source::client::DEFAULT_API_URL;
use launcher_core::{RepositoryRecord, DEFAULT_WEB_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_SECONDS: u64 = 3600;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// GitHub account name, used for the starred listing
    pub user: Option<String>,
    /// API token
    pub token: Option<String>,
    /// Cache lifetime advertised to the launcher
    pub cache_seconds: u64,
    /// REST API base URL
    pub api_url: String,
    /// Web base URL items link to
    pub web_url: String,
    /// Repositories to list even when the token cannot see them
    #[serde(default)]
    pub supplemental: Vec<RepositoryRecord>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            cache_seconds: DEFAULT_CACHE_SECONDS,
            api_url: DEFAULT_API_URL.to_string(),
            web_url: DEFAULT_WEB_URL.to_string(),
            supplemental: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // GITHUB_USER / GITHUB_TOKEN are honoured, REPOLAUNCH_* wins over them
        figment = figment
            .merge(
                Env::raw()
                    .only(&["GITHUB_USER", "GITHUB_TOKEN"])
                    .map(|key| match key.as_str() {
                        "github_user" | "GITHUB_USER" => "user".into(),
                        "github_token" | "GITHUB_TOKEN" => "token".into(),
                        _ => key.into(),
                    }),
            )
            .merge(Env::prefixed("REPOLAUNCH_"));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(
        &mut self,
        cli_user: Option<String>,
        cli_token: Option<String>,
        cli_cache_seconds: Option<u64>,
        cli_api_url: Option<String>,
    ) {
        if let Some(user) = cli_user {
            self.user = Some(user);
        }
        if let Some(token) = cli_token {
            self.token = Some(token);
        }
        if let Some(seconds) = cli_cache_seconds {
            self.cache_seconds = seconds;
        }
        if let Some(url) = cli_api_url {
            self.api_url = url;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.token.as_deref().map_or(true, str::is_empty) {
            return Err(anyhow!(
                "GitHub token not configured. Set via --token, REPOLAUNCH_TOKEN or GITHUB_TOKEN env var, or config file"
            ));
        }
        Ok(())
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "repolaunch").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("repolaunch").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("repolaunch")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/repolaunch.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn explicit_config_supplies_supplemental_repositories() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
web_url = "https://git.example.com"

[[supplemental]]
identity = "corp/secret"
description = "Hidden by token scope"

[[supplemental]]
identity = "corp/mirror"
fork = true
"#,
        )
        .unwrap();

        // Act
        let config = Config::load(Some(path)).unwrap();

        // Assert
        assert_eq!(config.web_url, "https://git.example.com");
        assert_eq!(config.supplemental.len(), 2);
        assert_eq!(config.supplemental[0].identity, "corp/secret");
        assert_eq!(
            config.supplemental[0].description.as_deref(),
            Some("Hidden by token scope")
        );
        assert!(!config.supplemental[0].is_fork);
        assert!(config.supplemental[1].is_fork);
    }

    #[test]
    fn cli_overrides_win() {
        let mut config = Config::default();
        config.merge_with_cli(
            Some("octocat".to_string()),
            Some("tok".to_string()),
            Some(42),
            Some("http://localhost:1".to_string()),
        );

        assert_eq!(config.user.as_deref(), Some("octocat"));
        assert_eq!(config.token.as_deref(), Some("tok"));
        assert_eq!(config.cache_seconds, 42);
        assert_eq!(config.api_url, "http://localhost:1");
    }

    #[test]
    fn validate_requires_token() {
        let mut config = Config::default();
        assert!(config.validate().is_err());

        config.token = Some(String::new());
        assert!(config.validate().is_err());

        config.token = Some("tok".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn defaults_point_at_github() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.web_url, "https://github.com");
        assert_eq!(config.cache_seconds, DEFAULT_CACHE_SECONDS);
    }
}
