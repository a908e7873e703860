pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{etl::EtlEngine, pipeline::ScrapePipeline};
pub use domain::model::Book;
pub use utils::error::{Result, ScrapeError};
