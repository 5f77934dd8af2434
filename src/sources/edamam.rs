use crate::config::EdamamConfig;
use crate::error::{FoodyError, Result};
use crate::model::Recipe;
use crate::sources::{get_ok_body, redacted, RecipeSource};
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;

// https://developer.edamam.com/edamam-docs-recipe-api

const DEFAULT_BASE_URL: &str = "https://api.edamam.com";

pub struct EdamamSource {
    client: Client,
    app_id: String,
    app_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct EdamamResponse {
    #[serde(default)]
    hits: Vec<EdamamHit>,
}

#[derive(Debug, Deserialize)]
struct EdamamHit {
    #[serde(default)]
    recipe: EdamamRecipe,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EdamamRecipe {
    label: Option<String>,
    image: Option<String>,
    url: Option<String>,
    ingredients: Option<Vec<serde_json::Value>>,
    #[serde(rename = "yield")]
    yields: Option<f64>,
}

impl From<EdamamRecipe> for Recipe {
    fn from(r: EdamamRecipe) -> Self {
        Recipe {
            name: r.label.unwrap_or_default(),
            url: r.url.unwrap_or_default(),
            image_url: r.image.unwrap_or_default(),
            num_ingredients: r.ingredients.map_or(0, |i| i.len() as u32),
            // float-to-int casts truncate and saturate, so negatives become 0
            yields: r.yields.map_or(0, |y| y as u32),
            ..Default::default()
        }
    }
}

impl EdamamSource {
    /// Create a new Edamam source from configuration
    pub fn new(config: &EdamamConfig) -> Result<Self> {
        if config.app_id.is_empty() {
            return Err(FoodyError::Configuration(
                "edamam: missing app id".to_string(),
            ));
        }
        if config.app_key.is_empty() {
            return Err(FoodyError::Configuration(
                "edamam: missing app key".to_string(),
            ));
        }

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(EdamamSource {
            client: Client::new(),
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            base_url,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(app_id: String, app_key: String, base_url: String) -> Result<Self> {
        Self::new(&EdamamConfig {
            app_id,
            app_key,
            base_url: Some(base_url),
        })
    }

    fn build_request_url(&self, query: &str) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/search", self.base_url.trim_end_matches('/')),
            &[
                ("app_key", self.app_key.as_str()),
                ("app_id", self.app_id.as_str()),
                ("from", "0"),
                ("to", "100"),
                ("q", query),
            ],
        )
        .map_err(|e| FoodyError::Configuration(format!("edamam: invalid base url: {}", e)))
    }
}

impl RecipeSource for EdamamSource {
    fn source_name(&self) -> &str {
        "edamam"
    }

    fn fetch_recipes(&self, query: &str) -> Result<Vec<Recipe>> {
        let url = self.build_request_url(query)?;
        debug!(
            "making request to edamam API with url: {}",
            redacted(&url, &["app_key", "app_id"])
        );

        let body = get_ok_body(&self.client, url)?;
        let response: EdamamResponse = serde_json::from_str(&body)?;

        info!(
            "found {} total results for query {}",
            response.hits.len(),
            query
        );

        Ok(response
            .hits
            .into_iter()
            .map(|hit| Recipe::from(hit.recipe))
            .collect())
    }
}
