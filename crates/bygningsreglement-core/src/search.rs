//! Main search API for Bygningsreglementet.dk
//!
//! This module combines the HTTP client with the response decoder and adds
//! pagination on top of single-page search: eager aggregation with
//! [`SearchClient::search_all`] and lazy page-by-page consumption with
//! [`SearchClient::iterate_pages`]. Pages are always fetched one after
//! another, since the next request depends on the previous page's metadata.

use futures::Stream;
use tracing::{debug, info};

use crate::client::{ApiClient, ClientConfig};
use crate::decode::decode_search_page;
use crate::error::{Result, SearchError};
use crate::types::{CategoryFilter, SearchPage, SearchQuery, SearchResult};

/// Term used for the minimal probe search in [`SearchClient::get_categories`]
const CATEGORY_PROBE_TERM: &str = "test";

/// Default upper bound on pages fetched by `search_all`
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Async client for the Bygningsreglementet.dk search endpoint
///
/// # Example
/// ```no_run
/// use bygningsreglement_core::{SearchClient, SearchQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SearchClient::new()?;
///
///     let page = client.search(&SearchQuery::new("brand")).await?;
///     println!("Found {} results", page.pagination.total_results);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: ApiClient,
}

impl SearchClient {
    /// Create a new search client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: ApiClient::new()?,
        })
    }

    /// Create a new search client with custom configuration.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: ApiClient::with_config(config)?,
        })
    }

    /// Create a new search client around a pre-configured HTTP client.
    pub fn with_client(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch one page of results.
    ///
    /// Sends exactly one request. No retries are made.
    ///
    /// # Returns
    /// * `Ok(SearchPage)` with results in the order the service returned them
    /// * `Err(SearchError::InvalidQuery)` if the query is invalid (nothing is sent)
    /// * `Err(SearchError::HttpStatus)` on a non-2xx status, whatever the body
    /// * `Err(SearchError::Application)` if the body carries an `errorMessage`
    /// * `Err(SearchError::Decode)` if the body is not a search page
    ///
    /// # Example
    /// ```no_run
    /// use bygningsreglement_core::{SearchClient, SearchQuery};
    ///
    /// # async fn example() -> Result<(), bygningsreglement_core::SearchError> {
    /// let client = SearchClient::new()?;
    /// let query = SearchQuery::new("ventilation")
    ///     .with_category("vejledninger")
    ///     .with_page_size(3);
    /// for result in client.search(&query).await?.results {
    ///     println!("{} ({})", result.title, result.url);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        query.validate()?;
        let body = self.client.get(&query.to_params()).await?;
        decode_search_page(&body)
    }

    /// Fetch consecutive pages and concatenate their results.
    ///
    /// Starts at `query.page_number` and stops after the first page without
    /// a `nextPageUrl`, or once `max_pages` pages have been fetched. The
    /// first failing page aborts the call.
    ///
    /// # Errors
    /// `SearchError::InvalidQuery` if `max_pages` is zero, plus any error of
    /// [`SearchClient::search`].
    pub async fn search_all(&self, query: &SearchQuery, max_pages: u32) -> Result<Vec<SearchResult>> {
        if max_pages == 0 {
            return Err(SearchError::InvalidQuery(
                "max_pages must be at least 1".to_string(),
            ));
        }
        query.validate()?;

        let mut results = Vec::new();
        let mut pages = self.iterate_pages(query.clone());
        let mut fetched = 0;

        while fetched < max_pages {
            let Some(page) = pages.next_page().await else {
                break;
            };
            let page = page?;
            fetched += 1;
            results.extend(page.results);
        }

        info!(
            term = %query.term,
            pages = fetched,
            results = results.len(),
            "collected search results"
        );
        Ok(results)
    }

    /// Lazily walk the result pages of a query.
    ///
    /// Nothing is sent until the first page is requested. The sequence has
    /// no page bound of its own: against a service that never stops
    /// returning `nextPageUrl`, callers must limit consumption themselves.
    ///
    /// # Example
    /// ```no_run
    /// use bygningsreglement_core::{SearchClient, SearchQuery};
    ///
    /// # async fn example() -> Result<(), bygningsreglement_core::SearchError> {
    /// let client = SearchClient::new()?;
    /// let mut pages = client.iterate_pages(SearchQuery::new("brand").with_page_size(5));
    /// while let Some(page) = pages.next_page().await {
    ///     let page = page?;
    ///     println!("Page {} of {}", page.pagination.page_number, page.pagination.total_pages);
    ///     if page.pagination.page_number >= 3 {
    ///         break;
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn iterate_pages(&self, query: SearchQuery) -> Pages<'_> {
        let next_page = Some(query.page_number);
        Pages {
            client: self,
            query,
            next_page,
        }
    }

    /// List the category filters offered by the service.
    ///
    /// Runs one minimal search (page size 1) and returns its `filters`.
    /// This relies on the service reporting full filter metadata for any
    /// query, which it does not document.
    pub async fn get_categories(&self) -> Result<Vec<CategoryFilter>> {
        let probe = SearchQuery::new(CATEGORY_PROBE_TERM).with_page_size(1);
        let page = self.search(&probe).await?;
        debug!(count = page.filters.len(), "fetched category filters");
        Ok(page.filters)
    }
}

/// Lazy sequence of result pages, one request per page.
///
/// Created by [`SearchClient::iterate_pages`]. The sequence ends after the
/// page without a `nextPageUrl`, or right after yielding an error. Dropping
/// it between pages leaves no request in flight.
#[derive(Debug)]
pub struct Pages<'a> {
    client: &'a SearchClient,
    query: SearchQuery,
    /// Page to request next; None once the sequence is exhausted
    next_page: Option<u32>,
}

impl<'a> Pages<'a> {
    /// Fetch the next page, or None when the sequence is exhausted.
    ///
    /// The position only moves once a response has been handled, so a
    /// cancelled call leaves the same page to be requested again.
    pub async fn next_page(&mut self) -> Option<Result<SearchPage>> {
        let page_number = self.next_page?;
        debug!(term = %self.query.term, page = page_number, "fetching page");

        let page = match self.client.search(&self.query.at_page(page_number)).await {
            Ok(page) => page,
            Err(e) => {
                self.next_page = None;
                return Some(Err(e));
            }
        };

        self.next_page = if page.has_next_page() {
            let next = page_number.checked_add(1);
            if next.is_none() {
                debug!(page = page_number, "page number limit reached, ending page sequence");
            }
            next
        } else {
            None
        };
        Some(Ok(page))
    }

    /// Whether the sequence has been exhausted
    pub fn is_done(&self) -> bool {
        self.next_page.is_none()
    }

    /// Adapt into a [`futures::Stream`] of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<SearchPage>> + 'a {
        futures::stream::unfold(self, |mut pages| async move {
            let item = pages.next_page().await?;
            Some((item, pages))
        })
    }
}
