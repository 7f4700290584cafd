use crate::analyzer::DEFAULT_LATEST_TAG;
use crate::error::{ImageTagsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "./imagetags.toml";

/// Configuration file looked up in the user's config directory
pub const USER_CONFIG_FILE: &str = ".imagetags.toml";

/// Returns the default list of branches that publish the development tag.
fn default_protected_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

fn default_dev_tag() -> String {
    "dev".to_string()
}

fn default_latest_tag() -> String {
    DEFAULT_LATEST_TAG.to_string()
}

fn default_output_key() -> String {
    "tags".to_string()
}

/// Represents the complete configuration for image-tags.
///
/// Every key is optional; an absent file behaves exactly like the defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Branch names (without `refs/heads/`) that publish the development tag
    #[serde(default = "default_protected_branches")]
    pub protected_branches: Vec<String>,

    /// Tag published for protected branches
    #[serde(default = "default_dev_tag")]
    pub dev_tag: String,

    /// Floating tag given to the newest release
    #[serde(default = "default_latest_tag")]
    pub latest_tag: String,

    /// Key the tag list is written under in the CI output file
    #[serde(default = "default_output_key")]
    pub output_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            protected_branches: default_protected_branches(),
            dev_tag: default_dev_tag(),
            latest_tag: default_latest_tag(),
            output_key: default_output_key(),
        }
    }
}

impl Config {
    /// Reject values that would produce unusable output
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("dev_tag", &self.dev_tag),
            ("latest_tag", &self.latest_tag),
            ("output_key", &self.output_key),
        ] {
            if value.trim().is_empty() {
                return Err(ImageTagsError::config(format!("'{}' cannot be empty", name)));
            }
        }

        for (name, value) in [("dev_tag", &self.dev_tag), ("latest_tag", &self.latest_tag)] {
            if value.contains(',') {
                return Err(ImageTagsError::config(format!(
                    "'{}' cannot contain a comma: '{}'",
                    name, value
                )));
            }
        }

        if self.output_key.contains('=') || self.output_key.contains('\n') {
            return Err(ImageTagsError::config(format!(
                "'output_key' is not a valid output name: '{}'",
                self.output_key
            )));
        }

        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `imagetags.toml` in current directory
/// 3. `.imagetags.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            ImageTagsError::config(format!("Cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}
