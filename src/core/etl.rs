use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RunSummary {
    pub record_count: usize,
    pub output_path: String,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        println!("Connecting to the catalogue...");
        let html = self.pipeline.extract().await?;
        println!("Retrieved catalogue page ({} bytes)", html.len());

        println!("Extracting book data...");
        let books = self.pipeline.transform(html).await?;
        println!("Found {} books", books.len());

        let output_path = self.pipeline.load(&books).await?;
        println!("Output saved to: {}", output_path);

        Ok(RunSummary {
            record_count: books.len(),
            output_path,
        })
    }
}
