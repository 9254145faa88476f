use bygningsreglement_core::analysis::{above_score, pdf_results, unique_urls, DocumentKinds, ScoreSummary};
use bygningsreglement_core::{SearchClient, SearchQuery, DEFAULT_MAX_PAGES};
use futures::StreamExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let client = SearchClient::new()?;

    println!("=== Simple search: 'brand' ===\n");
    let page = client.search(&SearchQuery::new("brand")).await?;
    println!("Found {} results", page.pagination.total_results);
    if let Some(first) = page.results.first() {
        println!("First result: {}", first.title);
    }

    println!("\n=== Category search: 'energi' in kravbestemmelser ===\n");
    let query = SearchQuery::new("energi").with_category("kravbestemmelser");
    for (i, result) in client.search(&query).await?.results.iter().enumerate() {
        println!("{}. {}", i + 1, result.title);
        println!("   Score: {}", result.score);
    }

    println!("\n=== Pagination: 'brand', 5 per page, first 3 pages ===\n");
    let mut pages = client
        .iterate_pages(SearchQuery::new("brand").with_page_size(5))
        .into_stream()
        .take(3)
        .boxed_local();
    while let Some(page) = pages.next().await {
        let page = page?;
        println!(
            "Page {} of {}: {} results",
            page.pagination.page_number,
            page.pagination.total_pages,
            page.results.len()
        );
    }

    println!("\n=== Collect all pages: 'ventilation' ===\n");
    let all = client
        .search_all(&SearchQuery::new("ventilation"), DEFAULT_MAX_PAGES)
        .await?;
    println!("Collected {} results", all.len());

    println!("\n=== Analysis: 'konstruktion', 100 per page ===\n");
    let results = client
        .search(&SearchQuery::new("konstruktion").with_page_size(100))
        .await?
        .results;
    let summary = ScoreSummary::from_results(&results);
    let kinds = DocumentKinds::from_results(&results);
    println!("Total results: {}", summary.count);
    println!("Average score: {:.4}", summary.average);
    println!("Max score: {:.4}", summary.max);
    println!("Min score: {:.4}", summary.min);
    println!("PDFs: {}", kinds.pdf);
    println!("HTML pages: {}", kinds.html);
    println!("High relevance (> 0.02): {}", above_score(&results, 0.02).len());
    println!("PDF documents: {}", pdf_results(&results).len());
    println!("Unique URLs: {}", unique_urls(&results).len());

    println!("\n=== Available categories ===\n");
    for filter in client.get_categories().await? {
        let key = filter.category_key().unwrap_or_else(|| "(all)".to_string());
        println!("- {}: category_c={}", filter.name, key);
    }

    Ok(())
}
