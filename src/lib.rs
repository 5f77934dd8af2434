pub mod browser;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod selection;
pub mod session;
pub mod sources;
pub mod testing;

pub use browser::{NavCommand, ResultBrowser, Transition};
pub use crate::config::{load_config, ConfigOverrides, FoodyConfig};
pub use display::{DisplaySettings, ImageRenderer, Jp2aRenderer};
pub use error::{FoodyError, Result};
pub use model::Recipe;
pub use selection::Selection;
pub use session::{Session, SessionOutcome, SessionState, StdTerminal, Terminal};
pub use sources::{RecipeSource, SourceKind, SourceRegistry};

/// Search the source selected by `config` without any interaction.
///
/// # Example
/// ```no_run
/// use foody::{search, FoodyConfig};
///
/// let config = FoodyConfig::load().unwrap();
/// for recipe in search(&config, "thai curry").unwrap() {
///     println!("{}", recipe.name);
/// }
/// ```
pub fn search(config: &FoodyConfig, query: &str) -> Result<Vec<Recipe>> {
    let source = SourceRegistry::create(config)?;
    source.fetch_recipes(query.trim())
}
