use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::Validate;

/// The qualitative rating levels the catalogue uses, worst to best.
pub const RATING_LEVELS: [&str; 5] = ["One", "Two", "Three", "Four", "Five"];

/// One book as listed on the catalogue page.
///
/// Constructed as a plain aggregate by the parser, then checked through
/// [`Validate`] before it is allowed into the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub rating: String,
    pub availability: String,
}

impl Validate for Book {
    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ScrapeError::ValidationError {
                message: "book title is empty".to_string(),
            });
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ScrapeError::ValidationError {
                message: format!("price {} is not a non-negative number", self.price),
            });
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ScrapeError::ValidationError {
                message: format!("currency '{}' is not a 3-letter code", self.currency),
            });
        }

        if !RATING_LEVELS.contains(&self.rating.as_str()) {
            return Err(ScrapeError::ValidationError {
                message: format!("rating '{}' is not a known level", self.rating),
            });
        }

        Ok(())
    }
}
