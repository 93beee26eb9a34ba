//! Movie Filter Module
//! Boolean-mask filtering of the cleaned movie table.

use crate::data::cleaner::{COL_CERTIFICATE, COL_RATING, GENRE_SLOTS};
use polars::prelude::*;
use thiserror::Error;

/// Certificate selection meaning "no certificate restriction".
pub const CERTIFICATE_ALL: &str = "All";

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Inclusive IMDB rating range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for RatingBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
        }
    }
}

impl RatingBounds {
    /// Parse user-supplied bound text.
    ///
    /// If either field is not a number, BOTH bounds fall back to the
    /// (0, 10) defaults and a warning message is returned for the UI.
    pub fn parse(min_text: &str, max_text: &str) -> (Self, Option<String>) {
        match (
            min_text.trim().parse::<f64>(),
            max_text.trim().parse::<f64>(),
        ) {
            (Ok(min), Ok(max)) => (Self { min, max }, None),
            _ => (
                Self::default(),
                Some("Please enter valid numbers for ratings".to_string()),
            ),
        }
    }
}

/// Filter criteria for one UI interaction.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub genres: Vec<String>,
    pub certificate: String,
    pub bounds: RatingBounds,
}

/// Applies filter criteria to the cleaned table.
pub struct MovieFilter;

impl MovieFilter {
    /// Return the rows matching the criteria as a fresh DataFrame.
    ///
    /// A row matches when any of its three genre slots is in the selected
    /// set, its certificate equals the selection (or the selection is
    /// "All"), and its rating lies within the bounds inclusive. Row order
    /// is preserved from the source; the source is never mutated.
    pub fn apply(df: &DataFrame, criteria: &FilterCriteria) -> Result<DataFrame, FilterError> {
        let genre_mask = Self::genre_mask(&criteria.genres);

        let certificate_mask = if criteria.certificate == CERTIFICATE_ALL {
            lit(true)
        } else {
            col(COL_CERTIFICATE).eq(lit(criteria.certificate.clone()))
        };

        let rating = col(COL_RATING).cast(DataType::Float64);
        let rating_mask = rating
            .clone()
            .gt_eq(lit(criteria.bounds.min))
            .and(rating.lt_eq(lit(criteria.bounds.max)));

        let filtered = df
            .clone()
            .lazy()
            .filter(genre_mask.and(certificate_mask).and(rating_mask))
            .collect()?;
        Ok(filtered)
    }

    /// True when any genre slot holds one of the selected genres.
    /// An empty selection matches nothing.
    fn genre_mask(genres: &[String]) -> Expr {
        GENRE_SLOTS
            .iter()
            .flat_map(|slot| {
                genres
                    .iter()
                    .map(move |genre| col(*slot).eq(lit(genre.clone())))
            })
            .fold(lit(false), |mask, term| mask.or(term))
    }
}
