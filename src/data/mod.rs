//! Data module - CSV loading, cleaning and filtering

mod cleaner;
mod filter;
mod loader;

pub use cleaner::COLUMN_LABELS;
pub use filter::{FilterCriteria, MovieFilter, RatingBounds, CERTIFICATE_ALL};
pub use loader::DataLoader;
