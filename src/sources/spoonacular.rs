use crate::config::SpoonacularConfig;
use crate::error::{FoodyError, Result};
use crate::model::Recipe;
use crate::sources::{get_ok_body, redacted, RecipeSource};
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;

// https://spoonacular.com/food-api/docs

const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

pub struct SpoonacularSource {
    client: Client,
    app_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SpoonacularResponse {
    #[serde(default)]
    results: Vec<SpoonacularResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SpoonacularResult {
    title: Option<String>,
    image: Option<String>,
    #[serde(rename = "sourceUrl")]
    source_url: Option<String>,
    servings: Option<i64>,
}

impl From<SpoonacularResult> for Recipe {
    fn from(r: SpoonacularResult) -> Self {
        Recipe {
            name: r.title.unwrap_or_default(),
            url: r.source_url.unwrap_or_default(),
            image_url: r.image.unwrap_or_default(),
            yields: r.servings.and_then(|s| u32::try_from(s).ok()).unwrap_or(0),
            ..Default::default()
        }
    }
}

impl SpoonacularSource {
    /// Create a new Spoonacular source from configuration
    pub fn new(config: &SpoonacularConfig) -> Result<Self> {
        if config.app_key.is_empty() {
            return Err(FoodyError::Configuration(
                "spoonacular: missing app key".to_string(),
            ));
        }

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(SpoonacularSource {
            client: Client::new(),
            app_key: config.app_key.clone(),
            base_url,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(app_key: String, base_url: String) -> Result<Self> {
        Self::new(&SpoonacularConfig {
            app_key,
            base_url: Some(base_url),
        })
    }

    fn build_request_url(&self, query: &str) -> Result<Url> {
        Url::parse_with_params(
            &format!(
                "{}/recipes/complexSearch",
                self.base_url.trim_end_matches('/')
            ),
            &[
                ("apiKey", self.app_key.as_str()),
                ("addRecipeInformation", "true"),
                ("number", "100"),
                ("query", query),
            ],
        )
        .map_err(|e| FoodyError::Configuration(format!("spoonacular: invalid base url: {}", e)))
    }
}

impl RecipeSource for SpoonacularSource {
    fn source_name(&self) -> &str {
        "spoonacular"
    }

    /// Unlike the other sources, zero results is reported as
    /// [`FoodyError::EmptyResults`].
    fn fetch_recipes(&self, query: &str) -> Result<Vec<Recipe>> {
        let url = self.build_request_url(query)?;
        debug!(
            "making request to spoonacular API with url: {}",
            redacted(&url, &["apiKey"])
        );

        let body = get_ok_body(&self.client, url)?;
        let response: SpoonacularResponse = serde_json::from_str(&body)?;

        if response.results.is_empty() {
            return Err(FoodyError::EmptyResults {
                query: query.to_string(),
            });
        }

        info!(
            "found {} total results for query {}",
            response.results.len(),
            query
        );

        Ok(response.results.into_iter().map(Recipe::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_app_key() {
        let result = SpoonacularSource::new(&SpoonacularConfig::default());
        assert!(matches!(result, Err(FoodyError::Configuration(ref m)) if m.contains("app key")));
    }

    #[test]
    fn test_build_request_url() {
        let source =
            SpoonacularSource::with_base_url("k".to_string(), "http://localhost:1/".to_string())
                .unwrap();
        let url = source.build_request_url("pad thai").unwrap();

        assert_eq!(url.path(), "/recipes/complexSearch");
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            query,
            vec![
                ("apiKey".to_string(), "k".to_string()),
                ("addRecipeInformation".to_string(), "true".to_string()),
                ("number".to_string(), "100".to_string()),
                ("query".to_string(), "pad thai".to_string()),
            ]
        );
    }

    #[test]
    fn test_map_result() {
        let raw: SpoonacularResult = serde_json::from_str(
            r#"{
                "title": "Pad Thai",
                "image": "https://img/padthai.jpg",
                "sourceUrl": "https://example.com/padthai",
                "servings": 2
            }"#,
        )
        .unwrap();

        let recipe = Recipe::from(raw);
        assert_eq!(recipe.name, "Pad Thai");
        assert_eq!(recipe.url, "https://example.com/padthai");
        assert_eq!(recipe.image_url, "https://img/padthai.jpg");
        assert_eq!(recipe.yields, 2);
        assert_eq!(recipe.num_ingredients, 0);
    }

    #[test]
    fn test_negative_servings_treated_as_absent() {
        let raw: SpoonacularResult =
            serde_json::from_str(r#"{"title": "Odd", "servings": -1}"#).unwrap();
        assert_eq!(Recipe::from(raw).yields, 0);
    }
}
