use std::{path::PathBuf, time::Duration};

use serde::Deserialize;
use serde_aux::field_attributes::{deserialize_bool_from_anything, deserialize_number_from_string};
use url::Url;

use crate::domain::{result_set::DEFAULT_TARGET, selectors::ListingSelectors};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub browser: BrowserSettings,
    #[serde(default)]
    pub listing: ListingSettings,
    #[serde(default)]
    pub extraction: ExtractionSettings,
    #[serde(default)]
    pub source: SourceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrowserSettings {
    pub webdriver_url: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub headless: bool,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_width: u32,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub window_height: u32,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        BrowserSettings {
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            window_width: 1366,
            window_height: 900,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingSettings {
    pub url: String,
    /// Tag applied through the listing filter and checked on every question.
    pub tag: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub target_count: usize,
    #[serde(default)]
    pub selectors: ListingSelectors,
}

impl Default for ListingSettings {
    fn default() -> Self {
        ListingSettings {
            url: "https://stackoverflow.com/questions".to_string(),
            tag: "javascript".to_string(),
            target_count: DEFAULT_TARGET,
            selectors: ListingSelectors::default(),
        }
    }
}

impl ListingSettings {
    /// The tag as typed into the filter and checked on every question.
    pub fn tag(&self) -> &str {
        self.tag.trim()
    }

    pub fn parsed_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }
}

/// What to do with an item whose title cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedItemPolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub content_timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub navigation_timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub consent_timeout_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub poll_interval_millis: u64,
    #[serde(default)]
    pub malformed_item: MalformedItemPolicy,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        ExtractionSettings {
            content_timeout_secs: 10,
            navigation_timeout_secs: 30,
            consent_timeout_secs: 3,
            poll_interval_millis: 250,
            malformed_item: MalformedItemPolicy::Abort,
        }
    }
}

impl ExtractionSettings {
    pub fn content_timeout(&self) -> Duration {
        Duration::from_secs(self.content_timeout_secs)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn consent_timeout(&self) -> Duration {
        Duration::from_secs(self.consent_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_millis)
    }
}

/// Where listing pages come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceSettings {
    /// A browser driven over WebDriver.
    #[default]
    Live,
    /// Saved listing pages, replayed in file name order.
    Snapshot { directory: PathBuf },
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("No current directory: {}", e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;

    if let Err(e) = settings.listing.parsed_url() {
        return Err(config::ConfigError::Message(format!(
            "listing.url `{}` is not a valid url: {}",
            settings.listing.url, e
        )));
    }

    Ok(settings)
}
