use crate::error::{FoodyError, Result};
use crate::model::Recipe;
use crate::sources::RecipeSource;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use std::path::PathBuf;

/// Header row every recipe file must start with, in this order
const EXPECTED_HEADERS: [&str; 6] = [
    "name",
    "url",
    "time",
    "num_ingredients",
    "ingredients",
    "directions",
];

/// Searches a local CSV file of recipes by name.
///
/// The file is re-read on every search.
#[derive(Debug)]
pub struct CsvSource {
    location: PathBuf,
}

/// One data row, read positionally
#[derive(Debug)]
struct CsvRow {
    name: String,
    url: String,
    time: String,
    num_ingredients: String,
    location: String,
}

impl CsvRow {
    fn from_record(record: &StringRecord, location: String) -> Option<Self> {
        if record.len() != EXPECTED_HEADERS.len() {
            return None;
        }
        // Columns 4 and 5 (ingredients, directions) are required but unused
        Some(CsvRow {
            name: record[0].to_string(),
            url: record[1].to_string(),
            time: record[2].to_string(),
            num_ingredients: record[3].to_string(),
            location,
        })
    }
}

impl From<CsvRow> for Recipe {
    fn from(row: CsvRow) -> Self {
        Recipe {
            name: row.name,
            url: row.url,
            time: row.time,
            num_ingredients: row.num_ingredients.parse().unwrap_or(0),
            location: row.location,
            ..Default::default()
        }
    }
}

impl CsvSource {
    /// The file must be named `*.csv` and exist when the source is created
    pub fn new(location: impl Into<PathBuf>) -> Result<Self> {
        let location = location.into();

        if location.as_os_str().is_empty() {
            return Err(FoodyError::Configuration(
                "recipe csv: missing file location".to_string(),
            ));
        }
        if !location.to_string_lossy().ends_with(".csv") {
            return Err(FoodyError::Configuration(
                "recipe csv must have .csv extension".to_string(),
            ));
        }
        if !location.is_file() {
            return Err(FoodyError::Configuration(format!(
                "recipe csv: {} does not exist",
                location.display()
            )));
        }

        Ok(CsvSource { location })
    }
}

fn validate_header(row: &StringRecord) -> Result<()> {
    if row.len() != EXPECTED_HEADERS.len() {
        return Err(FoodyError::Configuration(format!(
            "csv contains {} cols in the first row, expected {}",
            row.len(),
            EXPECTED_HEADERS.len()
        )));
    }

    for (idx, (got, want)) in row.iter().zip(EXPECTED_HEADERS).enumerate() {
        if got != want {
            return Err(FoodyError::Configuration(format!(
                "expected header {} for col {}, got header {}",
                want, idx, got
            )));
        }
    }

    Ok(())
}

impl RecipeSource for CsvSource {
    fn source_name(&self) -> &str {
        "csv"
    }

    /// Returns every row whose lower-cased name contains any word of the
    /// query. A row is included once per word it matches, so a name matching
    /// two words appears twice. Rows that are not six valid UTF-8 fields are
    /// skipped but still counted in the row numbers.
    fn fetch_recipes(&self, query: &str) -> Result<Vec<Recipe>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.location)?;
        let mut records = reader.byte_records();

        let header = records.next().transpose()?.ok_or_else(|| {
            FoodyError::Configuration(format!(
                "{} is empty, expected a header row",
                self.location.display()
            ))
        })?;
        let header = StringRecord::from_byte_record(header).map_err(|e| {
            FoodyError::Configuration(format!(
                "{} has a header row that is not valid UTF-8: {}",
                self.location.display(),
                e
            ))
        })?;
        validate_header(&header)?;

        let search_words: Vec<&str> = query.split(' ').collect();
        let mut hits = Vec::new();

        for (idx, record) in records.enumerate() {
            let row_number = idx + 1;
            let record = match StringRecord::from_byte_record(record?) {
                Ok(record) => record,
                Err(e) => {
                    debug!("skipping row {}: {}", row_number, e);
                    continue;
                }
            };
            let location = format!("{}: row {}", self.location.display(), row_number);

            let Some(row) = CsvRow::from_record(&record, location) else {
                debug!(
                    "skipping row {} with {} fields",
                    row_number,
                    record.len()
                );
                continue;
            };

            let title = row.name.to_lowercase();
            let matches = search_words
                .iter()
                .filter(|word| title.contains(*word))
                .count();
            if matches > 0 {
                hits.extend(std::iter::repeat(Recipe::from(row)).take(matches));
            }
        }

        info!("found {} total results for query {}", hits.len(), query);

        Ok(hits)
    }
}
