//! Blocking search client
//!
//! Each call blocks the calling thread until its request(s) complete. The
//! client drives the async [`crate::SearchClient`] on a private
//! current-thread runtime, so it must not be used from within an async
//! context.

use tokio::runtime::Runtime;

use crate::client::{ApiClient, ClientConfig};
use crate::error::Result;
use crate::search::{self, Pages};
use crate::types::{CategoryFilter, SearchPage, SearchQuery, SearchResult};

/// Blocking client for the Bygningsreglementet.dk search endpoint
///
/// # Example
/// ```no_run
/// use bygningsreglement_core::blocking::SearchClient;
/// use bygningsreglement_core::SearchQuery;
///
/// # fn main() -> Result<(), bygningsreglement_core::SearchError> {
/// let client = SearchClient::new()?;
/// for page in client.iterate_pages(SearchQuery::new("brand").with_page_size(5)).take(3) {
///     let page = page?;
///     println!("Page {}: {} results", page.pagination.page_number, page.results.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct SearchClient {
    inner: search::SearchClient,
    runtime: Runtime,
}

impl SearchClient {
    /// Create a new blocking client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or the runtime cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new blocking client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_client(ApiClient::with_config(config)?)
    }

    /// Create a new blocking client around a pre-configured HTTP client.
    pub fn with_client(client: ApiClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            inner: search::SearchClient::with_client(client),
            runtime,
        })
    }

    /// Fetch one page of results. See [`search::SearchClient::search`].
    pub fn search(&self, query: &SearchQuery) -> Result<SearchPage> {
        self.runtime.block_on(self.inner.search(query))
    }

    /// Fetch up to `max_pages` consecutive pages and concatenate their
    /// results. See [`search::SearchClient::search_all`].
    pub fn search_all(&self, query: &SearchQuery, max_pages: u32) -> Result<Vec<SearchResult>> {
        self.runtime.block_on(self.inner.search_all(query, max_pages))
    }

    /// Lazily walk the result pages of a query, one blocking request per
    /// call to `next`. See [`search::SearchClient::iterate_pages`].
    pub fn iterate_pages(&self, query: SearchQuery) -> PageIter<'_> {
        PageIter {
            runtime: &self.runtime,
            pages: self.inner.iterate_pages(query),
        }
    }

    /// List the category filters offered by the service.
    /// See [`search::SearchClient::get_categories`].
    pub fn get_categories(&self) -> Result<Vec<CategoryFilter>> {
        self.runtime.block_on(self.inner.get_categories())
    }
}

/// Blocking iterator over result pages
pub struct PageIter<'a> {
    runtime: &'a Runtime,
    pages: Pages<'a>,
}

impl Iterator for PageIter<'_> {
    type Item = Result<SearchPage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pages.is_done() {
            return None;
        }
        self.runtime.block_on(self.pages.next_page())
    }
}

impl std::iter::FusedIterator for PageIter<'_> {}
