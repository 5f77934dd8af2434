use colored::Colorize;
use serde::Serialize;
use std::fmt;

/// A recipe as produced by any source.
///
/// Optional text fields are empty when the source did not supply them, and
/// the numeric fields are 0 when the value was absent or unparsable. A 0 is
/// omitted from display rather than shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recipe {
    pub name: String,
    pub url: String,
    /// Provenance tag, set only by the CSV source (e.g. `recipes.csv: row 3`)
    pub location: String,
    pub image_url: String,
    pub time: String,
    pub num_ingredients: u32,
    pub yields: u32,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Recipe {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Lines of the detail view shown once a recipe is chosen, without the
    /// image. Empty url and location are skipped.
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines = vec![String::new(), self.name.bright_green().to_string()];
        if !self.url.is_empty() {
            lines.push(self.url.clone());
        }
        if !self.location.is_empty() {
            lines.push(self.location.clone());
        }
        lines.push(String::new());
        lines
    }

    pub fn has_jpeg_image(&self) -> bool {
        self.image_url.ends_with(".jpg")
    }
}

/// Browse-list summary: the highlighted name followed by one line per field
/// that is present.
impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name.bright_green())?;
        if !self.image_url.is_empty() {
            writeln!(f, "picture → {}", self.image_url)?;
        }
        if !self.url.is_empty() {
            writeln!(f, "url → {}", self.url)?;
        }
        if !self.time.is_empty() {
            writeln!(f, "time → {}", self.time)?;
        }
        if self.num_ingredients > 0 {
            writeln!(f, "# ingredients → {}", self.num_ingredients)?;
        }
        if self.yields > 0 {
            writeln!(f, "# yield → {}", self.yields)?;
        }
        Ok(())
    }
}
