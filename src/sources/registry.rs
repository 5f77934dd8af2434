use crate::config::FoodyConfig;
use crate::error::{FoodyError, Result};
use crate::sources::{CsvSource, EdamamSource, RecipeSource, SpoonacularSource};
use log::info;
use std::fmt;
use std::str::FromStr;

/// The kinds of source a configuration can select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Edamam,
    Spoonacular,
    Csv,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Edamam, SourceKind::Spoonacular, SourceKind::Csv];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Edamam => "edamam",
            SourceKind::Spoonacular => "spoonacular",
            SourceKind::Csv => "csv",
        }
    }
}

impl FromStr for SourceKind {
    type Err = FoodyError;

    fn from_str(s: &str) -> Result<Self> {
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                FoodyError::Configuration(format!(
                    "'{}' is not a valid choice of source, expected one of: {}",
                    s,
                    SourceRegistry::available_sources().join(", ")
                ))
            })
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct SourceRegistry;

impl SourceRegistry {
    /// Create the source named by `config.source`, validating its settings
    pub fn create(config: &FoodyConfig) -> Result<Box<dyn RecipeSource>> {
        info!("input source is '{}'", config.source);

        let kind: SourceKind = config.source.parse()?;
        Self::create_kind(kind, config)
    }

    pub fn create_kind(kind: SourceKind, config: &FoodyConfig) -> Result<Box<dyn RecipeSource>> {
        match kind {
            SourceKind::Edamam => Ok(Box::new(EdamamSource::new(&config.edamam)?)),
            SourceKind::Spoonacular => Ok(Box::new(SpoonacularSource::new(&config.spoonacular)?)),
            SourceKind::Csv => Ok(Box::new(CsvSource::new(config.csv.location.clone())?)),
        }
    }

    /// List all available source names
    pub fn available_sources() -> Vec<&'static str> {
        SourceKind::ALL.iter().map(|kind| kind.as_str()).collect()
    }
}
