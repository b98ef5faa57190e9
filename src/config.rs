use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HygieneError, Result};
use crate::version_file::DEFAULT_PROJECT_NAME;

/// File name looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = "hygiene.toml";
/// File name looked up in the user configuration directory.
pub const USER_CONFIG_FILE_NAME: &str = "release-hygiene.toml";

/// Represents the complete configuration for release-hygiene.
///
/// Every path is relative to the repository root the tool is pointed at.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_project_name")]
    pub project_name: String,

    #[serde(default = "default_version_file")]
    pub version_file: PathBuf,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default)]
    pub logo: LogoConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub checks: ChecksConfig,
}

fn default_project_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

fn default_version_file() -> PathBuf {
    PathBuf::from("src/email_signature/__version__.py")
}

fn default_tag_pattern() -> String {
    "v*".to_string()
}

/// Placeholder logo generation settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogoConfig {
    #[serde(default = "default_logo_path")]
    pub path: PathBuf,

    #[serde(default = "default_logo_size")]
    pub size: u32,

    /// TrueType fonts tried in order before the built-in glyphs.
    #[serde(default = "default_font_candidates")]
    pub font_candidates: Vec<PathBuf>,
}

fn default_logo_path() -> PathBuf {
    PathBuf::from("logo_temp.png")
}

fn default_logo_size() -> u32 {
    200
}

/// Returns the default font fallback chain.
pub fn default_font_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("Arial.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        PathBuf::from("/Library/Fonts/Arial.ttf"),
        PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
    ]
}

impl Default for LogoConfig {
    fn default() -> Self {
        LogoConfig {
            path: default_logo_path(),
            size: default_logo_size(),
            font_candidates: default_font_candidates(),
        }
    }
}

/// Test-data sanitization scan settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScanConfig {
    #[serde(default = "default_scan_files")]
    pub files: Vec<PathBuf>,
}

/// Returns the test sources scanned for personal data by default.
pub fn default_scan_files() -> Vec<PathBuf> {
    vec![
        PathBuf::from("tests/unit/test_cli.py"),
        PathBuf::from("tests/unit/test_use_cases.py"),
        PathBuf::from("tests/unit/test_preview_generator.py"),
        PathBuf::from("tests/property/test_profile_properties.py"),
    ]
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            files: default_scan_files(),
        }
    }
}

/// Documentation check settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ChecksConfig {
    /// Extra rule catalog appended to the bundled one.
    #[serde(default)]
    pub rules_file: Option<PathBuf>,

    /// Skip the bundled catalog and use only `rules_file`.
    #[serde(default)]
    pub replace_defaults: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project_name: default_project_name(),
            version_file: default_version_file(),
            tag_pattern: default_tag_pattern(),
            logo: LogoConfig::default(),
            scan: ScanConfig::default(),
            checks: ChecksConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `hygiene.toml` in the repository root
/// 3. `release-hygiene.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(repo_root: &Path, config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Some(path.to_path_buf())
    } else if repo_root.join(CONFIG_FILE_NAME).exists() {
        Some(repo_root.join(CONFIG_FILE_NAME))
    } else {
        dirs::config_dir()
            .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    };

    let Some(path) = path else {
        log::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    log::debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(&path).map_err(|e| {
        HygieneError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| HygieneError::config(format!("{}: {}", path.display(), e)))
}

/// Parses a TOML configuration document.
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}
