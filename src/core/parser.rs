use scraper::{ElementRef, Html, Selector};

use crate::domain::model::Book;
use crate::utils::error::{Result, ScrapeError};
use crate::utils::validation::Validate;

// Checked in order, first match wins.
const CURRENCY_CODES: [(&str, &str); 3] = [("£", "GBP"), ("$", "USD"), ("€", "EUR")];

/// Maps the currency symbol found in a raw price string to a 3-letter code.
pub fn currency_code(price_text: &str) -> &'static str {
    for (symbol, code) in CURRENCY_CODES {
        if price_text.contains(symbol) {
            return code;
        }
    }
    "UNK"
}

/// Extracts every book listed on a catalogue page, in document order.
///
/// Parsing is lenient: an entry missing one of its expected sub-elements, or
/// whose extracted fields fail validation, is logged and skipped rather than
/// failing the whole page.
pub fn parse_catalogue(html: &str) -> Vec<Book> {
    let document = Html::parse_document(html);
    let fragment_selector = Selector::parse("article.product_pod").unwrap();

    let mut books = Vec::new();
    for (index, fragment) in document.select(&fragment_selector).enumerate() {
        match parse_book_fragment(fragment) {
            Ok(book) => books.push(book),
            Err(e) => tracing::warn!("Skipping malformed book entry #{}: {}", index + 1, e),
        }
    }
    books
}

fn parse_book_fragment(fragment: ElementRef) -> Result<Book> {
    let title_selector = Selector::parse("h3 a").unwrap();
    let price_selector = Selector::parse("p.price_color").unwrap();
    let rating_selector = Selector::parse("p.star-rating").unwrap();
    let stock_selector = Selector::parse("p.instock.availability").unwrap();

    let title = fragment
        .select(&title_selector)
        .next()
        .and_then(|a| a.value().attr("title"))
        .ok_or_else(|| missing_element("title link"))?
        .to_string();

    let price_text: String = fragment
        .select(&price_selector)
        .next()
        .map(|p| p.text().collect())
        .ok_or_else(|| missing_element("price"))?;
    let currency = currency_code(&price_text).to_string();
    let price = parse_price(&price_text)?;

    // Class list is "star-rating <Level>"; the level is the second token.
    let rating = fragment
        .select(&rating_selector)
        .next()
        .and_then(|p| p.value().attr("class"))
        .and_then(|classes| classes.split_whitespace().nth(1))
        .ok_or_else(|| missing_element("star rating"))?
        .to_string();

    // Text nodes only, so the stock icon markup falls away; collapse the
    // surrounding indentation whitespace.
    let availability = fragment
        .select(&stock_selector)
        .next()
        .map(|p| {
            p.text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .ok_or_else(|| missing_element("availability"))?;

    let book = Book {
        title,
        price,
        currency,
        rating,
        availability,
    };
    book.validate()?;
    Ok(book)
}

fn parse_price(price_text: &str) -> Result<f64> {
    let numeric: String = price_text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric
        .parse::<f64>()
        .map_err(|_| ScrapeError::ValidationError {
            message: format!("price text '{}' is not numeric", price_text.trim()),
        })
}

fn missing_element(what: &str) -> ScrapeError {
    ScrapeError::ValidationError {
        message: format!("missing {} element", what),
    }
}
