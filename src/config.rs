use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FoodyConfig {
    /// Which source to search: "edamam", "spoonacular" or "csv"
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub edamam: EdamamConfig,
    #[serde(default)]
    pub spoonacular: SpoonacularConfig,
    #[serde(default)]
    pub csv: CsvConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Credentials for the Edamam recipe search API
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EdamamConfig {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_key: String,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

/// Credentials for the Spoonacular complex search API
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SpoonacularConfig {
    #[serde(default)]
    pub app_key: String,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CsvConfig {
    /// Path to a `.csv` recipe file
    #[serde(default)]
    pub location: PathBuf,
}

/// Browsing and rendering settings
#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Number of results shown per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// How long a first/last page notice stays up before the page is redrawn
    #[serde(default = "default_notice_pause_ms")]
    pub notice_pause_ms: u64,
    /// Width passed to the ASCII image renderer
    #[serde(default = "default_image_width")]
    pub image_width: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            notice_pause_ms: default_notice_pause_ms(),
            image_width: default_image_width(),
        }
    }
}

fn default_page_size() -> usize {
    5
}

fn default_notice_pause_ms() -> u64 {
    2000
}

fn default_image_width() -> u32 {
    40
}

/// Values given on the command line; each one wins over every other layer
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source: Option<String>,
    pub spoonacular_app_key: Option<String>,
    pub edamam_app_id: Option<String>,
    pub edamam_app_key: Option<String>,
    pub csv_location: Option<PathBuf>,
}

impl FoodyConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None, ConfigOverrides::default())
    }
}

/// Load configuration from file, environment variables and overrides
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Command-line overrides
/// 2. Environment variables with FOODY__ prefix
/// 3. foody.toml in current directory, or the file passed in `path`
/// 4. Default values
///
/// Environment variable format: FOODY__EDAMAM__APP_KEY
pub fn load_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<FoodyConfig, ConfigError> {
    let file = match path {
        // An explicitly named file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("foody").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("FOODY")
                .prefix_separator("__")
                .separator("__"),
        )
        .set_override_option("source", overrides.source)?
        .set_override_option("spoonacular.app_key", overrides.spoonacular_app_key)?
        .set_override_option("edamam.app_id", overrides.edamam_app_id)?
        .set_override_option("edamam.app_key", overrides.edamam_app_key)?
        .set_override_option(
            "csv.location",
            overrides
                .csv_location
                .map(|p| p.to_string_lossy().into_owned()),
        )?
        .build()?;

    settings.try_deserialize()
}
