pub mod etl;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::Book;
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
