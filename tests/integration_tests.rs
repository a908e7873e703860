use book_scrape::{Book, CliConfig, EtlEngine, LocalStorage, ScrapeError, ScrapePipeline};
use httpmock::prelude::*;
use tempfile::TempDir;

const CATALOGUE_PAGE: &str = r#"
<html>
    <body>
        <article class="product_pod">
            <h3><a title="A Light in the Attic">A Light...</a></h3>
            <p class="price_color">£51.77</p>
            <p class="instock availability">
                <i class="icon-ok"></i> In stock
            </p>
            <p class="star-rating Three"></p>
        </article>
        <article class="product_pod">
            <h3><a title="Tipping the Velvet">Tipping...</a></h3>
            <p class="price_color">£53.74</p>
            <p class="instock availability">
                <i class="icon-ok"></i> In stock
            </p>
            <p class="star-rating One"></p>
        </article>
    </body>
</html>
"#;

fn config_for(url: String, output_path: String) -> CliConfig {
    CliConfig {
        base_url: url,
        output_path,
        timeout_secs: 2,
        verbose: false,
    }
}

fn engine_for(
    url: String,
    output_path: String,
) -> EtlEngine<ScrapePipeline<LocalStorage, CliConfig>> {
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = ScrapePipeline::new(storage, config_for(url, output_path));
    EtlEngine::new(pipeline)
}

#[tokio::test]
async fn scrapes_catalogue_page_into_csv() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(CATALOGUE_PAGE);
    });

    let engine = engine_for(server.url("/"), output_path.clone());
    let summary = engine.run().await.unwrap();

    page.assert();
    assert_eq!(summary.record_count, 2);

    let csv_path = temp_dir.path().join("books_data.csv");
    assert!(csv_path.exists());

    let content = std::fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Title,Price,Currency,Rating,Status");
    assert_eq!(lines[1], "A Light in the Attic,51.77,GBP,Three,In stock");
    assert_eq!(lines[2], "Tipping the Velvet,53.74,GBP,One,In stock");
}

#[tokio::test]
async fn csv_output_round_trips_back_to_records() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(CATALOGUE_PAGE);
    });

    let engine = engine_for(server.url("/"), output_path);
    engine.run().await.unwrap();

    let csv_path = temp_dir.path().join("books_data.csv");
    let mut reader = csv::Reader::from_path(&csv_path).unwrap();

    let books: Vec<Book> = reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            Book {
                title: record[0].to_string(),
                price: record[1].parse().unwrap(),
                currency: record[2].to_string(),
                rating: record[3].to_string(),
                availability: record[4].to_string(),
            }
        })
        .collect();

    assert_eq!(books.len(), 2);
    assert_eq!(books[0].title, "A Light in the Attic");
    assert_eq!(books[0].price, 51.77);
    assert_eq!(books[0].currency, "GBP");
    assert_eq!(books[1].rating, "One");
    assert_eq!(books[1].availability, "In stock");
}

#[tokio::test]
async fn server_error_produces_no_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(503);
    });

    let engine = engine_for(server.url("/"), output_path);
    let result = engine.run().await;

    page.assert();
    assert!(matches!(
        result,
        Err(ScrapeError::FetchFailed { status: 503, .. })
    ));
    assert!(!temp_dir.path().join("books_data.csv").exists());
}

#[tokio::test]
async fn unreachable_server_produces_no_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    // Nothing is listening on this port.
    let engine = engine_for("http://127.0.0.1:1".to_string(), output_path);
    let result = engine.run().await;

    assert!(matches!(result, Err(ScrapeError::HttpError(_))));
    assert!(!temp_dir.path().join("books_data.csv").exists());
}

#[tokio::test]
async fn empty_catalogue_writes_header_only() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("<html><body><p>No books today</p></body></html>");
    });

    let engine = engine_for(server.url("/"), output_path);
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.record_count, 0);

    let content = std::fs::read_to_string(temp_dir.path().join("books_data.csv")).unwrap();
    assert_eq!(content.trim_end(), "Title,Price,Currency,Rating,Status");
}

#[tokio::test]
async fn malformed_entry_is_skipped_rest_are_kept() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    // Second entry has no price element.
    let page = CATALOGUE_PAGE.replace(r#"<p class="price_color">£53.74</p>"#, "");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body(page);
    });

    let engine = engine_for(server.url("/"), output_path);
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.record_count, 1);

    let content = std::fs::read_to_string(temp_dir.path().join("books_data.csv")).unwrap();
    assert!(content.contains("A Light in the Attic"));
    assert!(!content.contains("Tipping the Velvet"));
}
