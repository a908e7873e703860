use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("fetch of {url} failed with status {status}")]
    FetchFailed { url: String, status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ScrapeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ScrapeError::HttpError(e) => {
                format!("Failed to retrieve the website: {}", e)
            }
            ScrapeError::FetchFailed { url, status } => {
                format!("Failed to retrieve the website: {} answered {}", url, status)
            }
            ScrapeError::CsvError(e) => format!("Could not write the output file: {}", e),
            ScrapeError::IoError(e) => format!("File system error: {}", e),
            ScrapeError::ValidationError { message } => {
                format!("Scraped data failed validation: {}", message)
            }
            ScrapeError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Configuration value '{}' for {} is invalid: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScrapeError::HttpError(_) | ScrapeError::FetchFailed { .. } => {
                "Check the network connection and the catalogue URL, then rerun"
            }
            ScrapeError::CsvError(_) | ScrapeError::IoError(_) => {
                "Check that the output directory is writable; partial output should be discarded"
            }
            ScrapeError::ValidationError { .. } => {
                "The page markup may have changed; inspect the catalogue page"
            }
            ScrapeError::InvalidConfigValueError { .. } => {
                "Fix the flagged option and rerun"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
