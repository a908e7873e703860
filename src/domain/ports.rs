use crate::domain::model::Book;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout_secs(&self) -> u64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Fetch the raw catalogue page markup.
    async fn extract(&self) -> Result<String>;
    /// Turn markup into validated book records, document order.
    async fn transform(&self, html: String) -> Result<Vec<Book>>;
    /// Persist the records; returns the output file path.
    async fn load(&self, books: &[Book]) -> Result<String>;
}
