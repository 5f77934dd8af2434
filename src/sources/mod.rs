mod csv_file;
mod edamam;
mod registry;
mod spoonacular;

pub use csv_file::CsvSource;
pub use edamam::EdamamSource;
pub use registry::{SourceKind, SourceRegistry};
pub use spoonacular::SpoonacularSource;

use crate::error::{FoodyError, Result};
use crate::model::Recipe;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};

/// Unified trait for all recipe sources
pub trait RecipeSource {
    /// Get the source name (e.g., "edamam", "csv")
    fn source_name(&self) -> &str;

    /// Search the source with a trimmed, non-empty query.
    ///
    /// An empty list is a valid answer unless the source documents otherwise.
    fn fetch_recipes(&self, query: &str) -> Result<Vec<Recipe>>;
}

/// Issue a GET and return the body of a 200 response.
///
/// The body is read before the status is checked so that a failure carries
/// what the server said. Transport errors are stripped of the request URL,
/// which holds the credentials.
fn get_ok_body(client: &Client, url: Url) -> Result<String> {
    let response = client.get(url).send().map_err(without_url)?;
    let status = response.status();
    let body = response.text().map_err(without_url)?;

    if status != StatusCode::OK {
        return Err(FoodyError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

fn without_url(err: reqwest::Error) -> FoodyError {
    FoodyError::Transport(err.without_url())
}

/// Request URL with the given credential parameters masked, for logging
fn redacted(url: &Url, secret_params: &[&str]) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if secret_params.iter().any(|p| *p == k) {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
