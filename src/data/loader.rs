//! CSV Data Loader Module
//! Loads the movie dataset with Polars, cleans it, and memoizes the result.

use crate::data::cleaner::{CleanerError, DataCleaner, COL_CERTIFICATE, GENRE_SLOTS};
use crate::data::filter::CERTIFICATE_ALL;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error(transparent)]
    CleanError(#[from] CleanerError),
    #[error("No data loaded")]
    NoData,
}

/// Owns the cleaned movie table for the lifetime of the process.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load and clean a CSV file, memoized by path.
    ///
    /// A repeat call for the file already held returns the cached frame
    /// without touching the filesystem again.
    pub fn load_csv(&mut self, file_path: &str) -> Result<&DataFrame, LoaderError> {
        if self.df.is_some() && self.file_path.as_deref() == Some(Path::new(file_path)) {
            debug!(path = file_path, "dataset cache hit");
            return self.df.as_ref().ok_or(LoaderError::NoData);
        }

        let df = Self::read_and_clean(file_path)?;
        self.file_path = Some(PathBuf::from(file_path));
        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// One-shot read plus clean, also used by the background load thread.
    pub fn read_and_clean(file_path: &str) -> Result<DataFrame, LoaderError> {
        // Lazy scan keeps peak memory down on wide files
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let cleaned = DataCleaner::clean(&df)?;
        info!(
            path = file_path,
            rows = cleaned.height(),
            "movie dataset loaded"
        );
        Ok(cleaned)
    }

    /// Install an already-cleaned DataFrame (used for async loading).
    pub fn set_dataframe(&mut self, df: DataFrame, file_path: PathBuf) {
        self.df = Some(df);
        self.file_path = Some(file_path);
    }

    /// Unique genres across the three genre slots, empties dropped, sorted.
    pub fn genre_options(&self) -> Vec<String> {
        let mut genres: Vec<String> = GENRE_SLOTS
            .iter()
            .flat_map(|slot| self.get_unique_values(slot))
            .filter(|genre| !genre.is_empty())
            .collect();
        genres.sort();
        genres.dedup();
        genres
    }

    /// Unique certificates with the "All" sentinel first, empties dropped.
    pub fn certificate_options(&self) -> Vec<String> {
        let mut certificates = vec![CERTIFICATE_ALL.to_string()];
        let mut found: Vec<String> = self
            .get_unique_values(COL_CERTIFICATE)
            .into_iter()
            .filter(|certificate| !certificate.is_empty())
            .collect();
        found.sort();
        certificates.extend(found);
        certificates
    }

    /// Get unique values from a column.
    pub fn get_unique_values(&self, column: &str) -> Vec<String> {
        let Some(df) = &self.df else {
            return Vec::new();
        };

        df.column(column)
            .ok()
            .and_then(|col| col.unique().ok())
            .map(|unique| {
                let series = unique.as_materialized_series();
                (0..series.len())
                    .filter_map(|i| {
                        let val = series.get(i).ok()?;
                        if val.is_null() {
                            None
                        } else {
                            Some(val.to_string().trim_matches('"').to_string())
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the cleaned DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const HEADER: &str = "Title,Released,Rated,G1,G2,G3,Score,Meta,Mins,Count,Gross";

    fn write_dataset(name: &str, rows: &[&str]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}.csv", name, std::process::id()));
        let mut contents = String::from(HEADER);
        for row in rows {
            contents.push('\n');
            contents.push_str(row);
        }
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_renames_and_cleans() {
        let path = write_dataset(
            "imdb_explorer_load",
            &[
                "Alpha,(2001),PG- 13,Drama ,Sci-Fi,,7.5,60,120,1000,10.0",
                "Beta,(I) (2005),R,Action,'-,'-,8.1,75,110,2000,20.0",
            ],
        );

        let mut loader = DataLoader::new();
        let df = loader.load_csv(path.to_str().unwrap()).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, crate::data::cleaner::COLUMN_LABELS.to_vec());

        let year = df.column("Year").unwrap();
        assert_eq!(year.get(1).unwrap().to_string().trim_matches('"'), "2005");
        let cert = df.column("Certificate").unwrap();
        assert_eq!(cert.get(0).unwrap().to_string().trim_matches('"'), "PG-13");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_second_load_is_memoized() {
        let path = write_dataset(
            "imdb_explorer_memo",
            &["Alpha,(2001),PG-13,Drama,,,7.5,60,120,1000,10.0"],
        );
        let path_str = path.to_str().unwrap().to_string();

        let mut loader = DataLoader::new();
        loader.load_csv(&path_str).unwrap();
        assert_eq!(loader.get_row_count(), 1);

        // Rewrite the file; a memoized loader must not notice.
        fs::write(
            &path,
            format!(
                "{HEADER}\nBeta,(2005),R,Action,,,8.1,75,110,2000,20.0\n\
                 Gamma,(2010),R,Comedy,,,6.9,50,95,500,5.0"
            ),
        )
        .unwrap();

        loader.load_csv(&path_str).unwrap();
        assert_eq!(loader.get_row_count(), 1);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_option_lists() {
        let mut loader = DataLoader::new();
        let df = df!(
            "Movie Title" => ["Alpha", "Beta"],
            "Year" => ["2001", "2005"],
            "Certificate" => ["PG-13", ""],
            "Genre 1" => ["Drama", "Action"],
            "Genre 2" => ["", "Drama"],
            "Genre 3" => ["", ""],
            "IMDB Rating" => [7.5_f64, 8.1],
            "Metascore" => [60_i64, 75],
            "Runtime(Minutes)" => [120_i64, 110],
            "Votes" => [1000_i64, 2000],
            "Gross Earnings" => [10.0_f64, 20.0],
        )
        .unwrap();
        loader.set_dataframe(df, PathBuf::from("in-memory.csv"));

        assert_eq!(loader.genre_options(), vec!["Action", "Drama"]);
        assert_eq!(loader.certificate_options(), vec!["All", "PG-13"]);
    }
}
