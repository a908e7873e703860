use crate::core::parser;
use crate::core::{Book, ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;

pub const OUTPUT_FILE: &str = "books_data.csv";
const CSV_HEADER: [&str; 5] = ["Title", "Price", "Currency", "Rating", "Status"];

pub struct ScrapePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> ScrapePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ScrapePipeline<S, C> {
    async fn extract(&self) -> Result<String> {
        let url = self.config.base_url();
        tracing::debug!("Requesting catalogue page: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout_secs()))
            .send()
            .await?;

        tracing::debug!("Catalogue response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ScrapeError::FetchFailed {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    async fn transform(&self, html: String) -> Result<Vec<Book>> {
        let books = parser::parse_catalogue(&html);
        tracing::debug!("Parsed {} book entries", books.len());
        Ok(books)
    }

    async fn load(&self, books: &[Book]) -> Result<String> {
        let csv_data = {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(CSV_HEADER)?;
            for book in books {
                writer.write_record([
                    book.title.as_str(),
                    &book.price.to_string(),
                    &book.currency,
                    &book.rating,
                    &book.availability,
                ])?;
            }
            writer
                .into_inner()
                .map_err(|e| ScrapeError::IoError(e.into_error()))?
        };

        tracing::debug!("Writing {} bytes of CSV to storage", csv_data.len());
        self.storage.write_file(OUTPUT_FILE, &csv_data).await?;

        Ok(format!("{}/{}", self.config.output_path(), OUTPUT_FILE))
    }
}
