//! Data Cleaner Module
//! Normalizes the raw movie dataset and renames columns to fixed labels.

use polars::prelude::*;
use thiserror::Error;

/// Fixed output column labels, applied positionally after cleaning.
pub const COLUMN_LABELS: [&str; 11] = [
    "Movie Title",
    "Year",
    "Certificate",
    "Genre 1",
    "Genre 2",
    "Genre 3",
    "IMDB Rating",
    "Metascore",
    "Runtime(Minutes)",
    "Votes",
    "Gross Earnings",
];

/// The three genre slot columns of a cleaned frame.
pub const GENRE_SLOTS: [&str; 3] = ["Genre 1", "Genre 2", "Genre 3"];

pub const COL_CERTIFICATE: &str = "Certificate";
pub const COL_RATING: &str = "IMDB Rating";

/// Characters stripped from every column except the title.
const STRIP_PATTERNS: [&str; 4] = ["(", ")", "I", " "];
/// Placeholder sequence stripped from the certificate column onwards.
const MISSING_MARKER: &str = "'-";

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Expected {expected} columns in the dataset, found {found}")]
    SchemaMismatch { expected: usize, found: usize },
}

/// Handles normalization of the raw movie dataset.
pub struct DataCleaner;

impl DataCleaner {
    /// Clean a freshly loaded DataFrame and rename its columns.
    ///
    /// All columns but the first get parentheses, the stray "I" marker and
    /// spaces stripped; from the certificate column onwards the `'-`
    /// missing-value sequence is stripped as well. Only string columns are
    /// touched, the rules are no-ops on numeric data. Columns are then
    /// renamed positionally to [`COLUMN_LABELS`], whatever the file's
    /// original headers were.
    pub fn clean(df: &DataFrame) -> Result<DataFrame, CleanerError> {
        let found = df.width();
        if found != COLUMN_LABELS.len() {
            return Err(CleanerError::SchemaMismatch {
                expected: COLUMN_LABELS.len(),
                found,
            });
        }

        let mut exprs: Vec<Expr> = Vec::new();
        for (idx, column) in df.get_columns().iter().enumerate() {
            if idx == 0 || column.dtype() != &DataType::String {
                continue;
            }

            let mut expr = col(column.name().clone());
            for pattern in STRIP_PATTERNS {
                expr = expr.str().replace_all(lit(pattern), lit(""), true);
            }
            // Space removal above can join a quote and a hyphen, so the
            // marker is stripped last.
            if idx >= 2 {
                expr = expr.str().replace_all(lit(MISSING_MARKER), lit(""), true);
            }
            exprs.push(expr);
        }

        let mut cleaned = df.clone().lazy().with_columns(exprs).collect()?;
        cleaned.set_column_names(COLUMN_LABELS)?;
        Ok(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_frame() -> DataFrame {
        df!(
            "title" => ["I Am Legend (2007)", "Inside Man"],
            "year" => ["(I) (2007)", "(2012)"],
            "cert" => ["PG- 13", "'-"],
            "g1" => ["Drama ", "Action"],
            "g2" => ["Sci-Fi", "'-"],
            "g3" => ["", "Crime I"],
            "rating" => [7.2_f64, 6.5],
            "meta" => [65_i64, 40],
            "runtime" => [101_i64, 95],
            "votes" => [700_000_i64, 50_000],
            "gross" => [256.4_f64, 10.1],
        )
        .unwrap()
    }

    #[test]
    fn test_columns_renamed_positionally() {
        let cleaned = DataCleaner::clean(&raw_frame()).unwrap();
        let names: Vec<String> = cleaned
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, COLUMN_LABELS.to_vec());
    }

    #[test]
    fn test_title_column_untouched() {
        let cleaned = DataCleaner::clean(&raw_frame()).unwrap();
        let titles = cleaned.column("Movie Title").unwrap();
        assert_eq!(
            titles.get(0).unwrap().to_string().trim_matches('"'),
            "I Am Legend (2007)"
        );
    }

    #[test]
    fn test_strip_rules() {
        let cleaned = DataCleaner::clean(&raw_frame()).unwrap();

        let year = cleaned.column("Year").unwrap();
        assert_eq!(year.get(0).unwrap().to_string().trim_matches('"'), "2007");
        assert_eq!(year.get(1).unwrap().to_string().trim_matches('"'), "2012");

        let cert = cleaned.column("Certificate").unwrap();
        assert_eq!(cert.get(0).unwrap().to_string().trim_matches('"'), "PG-13");
        assert_eq!(cert.get(1).unwrap().to_string().trim_matches('"'), "");

        let g2 = cleaned.column("Genre 2").unwrap();
        assert_eq!(g2.get(0).unwrap().to_string().trim_matches('"'), "Sci-Fi");
        let g3 = cleaned.column("Genre 3").unwrap();
        assert_eq!(g3.get(1).unwrap().to_string().trim_matches('"'), "Crime");
    }

    #[test]
    fn test_no_forbidden_chars_after_clean() {
        let cleaned = DataCleaner::clean(&raw_frame()).unwrap();
        for name in GENRE_SLOTS.iter().chain([COL_CERTIFICATE].iter()) {
            let column = cleaned.column(name).unwrap();
            for i in 0..column.len() {
                let value = column.get(i).unwrap().to_string();
                let value = value.trim_matches('"');
                assert!(
                    !value.contains(['(', ')', 'I', ' ']),
                    "column {name} row {i} still dirty: {value:?}"
                );
                assert!(!value.contains("'-"));
            }
        }
    }

    #[test]
    fn test_numeric_columns_pass_through() {
        let cleaned = DataCleaner::clean(&raw_frame()).unwrap();
        let rating = cleaned.column("IMDB Rating").unwrap();
        assert_eq!(rating.dtype(), &DataType::Float64);
        let votes = cleaned.column("Votes").unwrap();
        assert_eq!(votes.get(0).unwrap(), AnyValue::Int64(700_000));
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let narrow = df!("a" => ["x"], "b" => ["y"]).unwrap();
        let err = DataCleaner::clean(&narrow).unwrap_err();
        assert!(matches!(
            err,
            CleanerError::SchemaMismatch {
                expected: 11,
                found: 2
            }
        ));
    }
}
