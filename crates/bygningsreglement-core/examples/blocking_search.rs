use bygningsreglement_core::blocking::SearchClient;
use bygningsreglement_core::{SearchError, SearchQuery};

/// Search and report each failure kind separately
fn search_with_error_handling(client: &SearchClient, term: &str) {
    println!("=== Search with error handling for '{}' ===", term);

    match client.search(&SearchQuery::new(term)) {
        Ok(page) => println!("Success! Found {} results", page.pagination.total_results),
        Err(SearchError::Timeout(_)) => println!("Request timed out"),
        Err(SearchError::Connection(e)) => println!("Connection error: {}", e),
        Err(SearchError::HttpStatus(status)) => println!("HTTP error: {}", status),
        Err(SearchError::Application(message)) => println!("API error: {}", message),
        Err(e) => println!("Unexpected error: {}", e),
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let client = SearchClient::new()?;

    search_with_error_handling(&client, "brand");
    search_with_error_handling(&client, "");

    println!("=== Guidelines about ventilation ===");
    let query = SearchQuery::new("ventilation")
        .with_category("vejledninger")
        .with_page_size(3);
    let page = client.search(&query)?;
    println!("Found {} guidelines", page.pagination.total_results);
    for (i, result) in page.results.iter().enumerate() {
        println!("{}. {}", i + 1, result.title);
        println!("   URL: {}", result.url);
        if let Some(preview) = result.preview(100) {
            println!("   {}", preview);
        }
    }
    println!();

    println!("=== Pagination (stops after 3 pages) ===");
    let mut fetched = 0;
    for page in client.iterate_pages(SearchQuery::new("brand").with_page_size(5)).take(3) {
        let page = page?;
        fetched += page.results.len();
        println!(
            "Page {} of {}: {} results",
            page.pagination.page_number,
            page.pagination.total_pages,
            page.results.len()
        );
    }
    println!("Total results fetched: {}", fetched);
    println!();

    println!("=== Index for several terms ===");
    for term in ["brand", "energi", "ventilation"] {
        let page = client.search(&SearchQuery::new(term))?;
        println!("{}: {} results on first page", term, page.results.len());
    }

    Ok(())
}
