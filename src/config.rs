use crate::repository::Repository;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{io, path::Path, path::PathBuf};

const DEFAULT_CONFIG_FILE_NAME: &str = "prfeed.yaml";

const DEFAULT_USERNAME: &str = "krishnavbajoria02";
const DEFAULT_REPOSITORY_OWNER: &str = "SeedSigner";
const DEFAULT_REPOSITORY_NAME: &str = "seedsigner";
const DEFAULT_LABEL: &str = "SeedSigner";
const DEFAULT_PER_PAGE: u32 = 8;
const DEFAULT_API_URL: &str = "https://api.github.com";

const DEFAULT_CONTAINER_ID: &str = "seedsigner-prs";
const DEFAULT_OUTPUT: &str = "index.html";
const DEFAULT_TITLE: &str = "Open-source contributions";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed: FeedConfig::default(),
            page: PageConfig::default(),
            log_level: Config::default_log_level(),
        }
    }
}

impl Config {
    pub async fn load() -> Result<Config> {
        Config::load_from(DEFAULT_CONFIG_FILE_NAME).await
    }

    /// Reads the config file at `path`. A missing or blank file yields the
    /// defaults.
    pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
        let config_string = match tokio::fs::read_to_string(path.as_ref()).await {
            Ok(config_string) => config_string,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };

        if config_string.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_yaml::from_str::<Config>(&config_string)?;

        Ok(config)
    }

    /// Where the "unable to load" placeholder sends the viewer.
    pub fn profile_url(&self) -> String {
        self.page.profile_url.clone().unwrap_or_else(|| {
            format!(
                "https://github.com/pulls?q=is:pr+author:{}+repo:{}",
                self.feed.username,
                self.feed.repository.slug()
            )
        })
    }

    fn default_log_level() -> String {
        DEFAULT_LOG_LEVEL.to_owned()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "FeedConfig::default_username")]
    pub username: String,
    #[serde(default = "FeedConfig::default_repository")]
    pub repository: Repository,
    #[serde(default = "FeedConfig::default_label")]
    pub label: String,
    #[serde(default = "FeedConfig::default_per_page")]
    pub per_page: u32,
    #[serde(default = "FeedConfig::default_api_url")]
    pub api_url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        FeedConfig {
            username: FeedConfig::default_username(),
            repository: FeedConfig::default_repository(),
            label: FeedConfig::default_label(),
            per_page: FeedConfig::default_per_page(),
            api_url: FeedConfig::default_api_url(),
        }
    }
}

impl FeedConfig {
    fn default_username() -> String {
        DEFAULT_USERNAME.to_owned()
    }

    fn default_repository() -> Repository {
        Repository {
            owner: DEFAULT_REPOSITORY_OWNER.to_owned(),
            name: DEFAULT_REPOSITORY_NAME.to_owned(),
        }
    }

    fn default_label() -> String {
        DEFAULT_LABEL.to_owned()
    }

    fn default_per_page() -> u32 {
        DEFAULT_PER_PAGE
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "PageConfig::default_container_id")]
    pub container_id: String,
    #[serde(default = "PageConfig::default_output")]
    pub output: PathBuf,
    #[serde(default = "PageConfig::default_title")]
    pub title: String,
    pub profile_url: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            container_id: PageConfig::default_container_id(),
            output: PageConfig::default_output(),
            title: PageConfig::default_title(),
            profile_url: None,
        }
    }
}

impl PageConfig {
    fn default_container_id() -> String {
        DEFAULT_CONTAINER_ID.to_owned()
    }

    fn default_output() -> PathBuf {
        PathBuf::from(DEFAULT_OUTPUT)
    }

    fn default_title() -> String {
        DEFAULT_TITLE.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn should_default_to_seedsigner_feed() {
        let config = Config::default();

        assert_eq!(config.feed.username, "krishnavbajoria02");
        assert_eq!(config.feed.repository.slug(), "SeedSigner/seedsigner");
        assert_eq!(config.feed.per_page, 8);
        assert_eq!(config.feed.api_url, "https://api.github.com");
        assert_eq!(config.page.container_id, "seedsigner-prs");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config = serde_yaml::from_str::<Config>(
            r#"
feed:
  username: octocat
  repository:
    owner: rust-lang
    name: cargo
  label: Cargo
page:
  output: public/index.html
"#,
        )
        .unwrap();

        assert_eq!(config.feed.username, "octocat");
        assert_eq!(config.feed.repository.slug(), "rust-lang/cargo");
        assert_eq!(config.feed.label, "Cargo");
        assert_eq!(config.feed.per_page, 8);
        assert_eq!(config.page.output, PathBuf::from("public/index.html"));
        assert_eq!(config.page.container_id, "seedsigner-prs");
        assert_eq!(config.page.title, "Open-source contributions");
    }

    #[test]
    fn should_derive_profile_url_from_feed() {
        let config = Config::default();

        assert_eq!(
            config.profile_url(),
            "https://github.com/pulls?q=is:pr+author:krishnavbajoria02+repo:SeedSigner/seedsigner"
        );
    }

    #[test]
    fn should_prefer_configured_profile_url() {
        let mut config = Config::default();
        config.page.profile_url = Some("https://github.com/octocat".to_owned());

        assert_eq!(config.profile_url(), "https://github.com/octocat");
    }

    #[tokio::test]
    async fn should_use_defaults_when_file_is_missing() -> Result<()> {
        let dir = TempDir::new("config")?;

        let config = Config::load_from(dir.path().join("prfeed.yaml")).await?;

        assert_eq!(config.feed.username, "krishnavbajoria02");

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_load_config_file() -> Result<()> {
        let dir = TempDir::new("config")?;
        let path = dir.path().join("prfeed.yaml");
        std::fs::write(&path, "log_level: debug\nfeed:\n  per_page: 4\n")?;

        let config = Config::load_from(&path).await?;

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.feed.per_page, 4);
        assert_eq!(config.feed.label, "SeedSigner");

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_malformed_file() -> Result<()> {
        let dir = TempDir::new("config")?;
        let path = dir.path().join("prfeed.yaml");
        std::fs::write(&path, "feed:\n  per_page: many\n")?;

        assert!(Config::load_from(&path).await.is_err());

        dir.close()?;
        Ok(())
    }
}
