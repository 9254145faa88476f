//! Data types for the Bygningsreglement search client
//!
//! Request and response records. Response types mirror the camelCase JSON
//! of the search endpoint; optional wire fields are modeled as `Option`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// Default number of results per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameter carrying the category filter key
pub const CATEGORY_PARAM: &str = "category_c";

/// Language of the search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Culture {
    /// Danish (default)
    #[default]
    Da,
    /// English
    En,
}

impl Culture {
    /// Wire value sent as the `culture` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Culture::Da => "da",
            Culture::En => "en",
        }
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a single search request
///
/// # Example
/// ```
/// use bygningsreglement_core::{Culture, SearchQuery};
///
/// let query = SearchQuery::new("brand")
///     .with_culture(Culture::En)
///     .with_page_size(5)
///     .with_category("vejledninger");
/// assert_eq!(query.page_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Search text
    pub term: String,
    /// Language of the search
    pub culture: Culture,
    /// Page to fetch (1-based)
    pub page_number: u32,
    /// Results per page
    pub page_size: u32,
    /// Category filter key, sent as `category_c` only when set
    pub category: Option<String>,
}

impl SearchQuery {
    /// Create a query for the first page with default culture and size
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            culture: Culture::default(),
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
            category: None,
        }
    }

    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = culture;
        self
    }

    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Same query pointed at another page
    pub fn at_page(&self, page_number: u32) -> Self {
        Self {
            page_number,
            ..self.clone()
        }
    }

    /// Check the input constraints of the search endpoint.
    ///
    /// # Errors
    /// `SearchError::InvalidQuery` if the term is empty or whitespace-only,
    /// or if page number or page size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.term.trim().is_empty() {
            return Err(SearchError::InvalidQuery(
                "Search term cannot be empty".to_string(),
            ));
        }
        if self.page_number == 0 {
            return Err(SearchError::InvalidQuery(
                "Page number must be at least 1".to_string(),
            ));
        }
        if self.page_size == 0 {
            return Err(SearchError::InvalidQuery(
                "Page size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Query string pairs in wire order.
    ///
    /// The category is omitted entirely when unset or blank.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("term", self.term.trim().to_string()),
            ("culture", self.culture.as_str().to_string()),
            ("pageNumber", self.page_number.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(category) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            params.push((CATEGORY_PARAM, category.to_string()));
        }
        params
    }
}

/// Single search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Document title
    pub title: String,
    /// Absolute or site-relative URL of the document
    pub url: String,
    /// Relevance score
    pub score: f64,
    /// Text excerpt, when the service includes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl SearchResult {
    /// Whether the hit points at a PDF document
    pub fn is_pdf(&self) -> bool {
        self.url.to_ascii_lowercase().ends_with(".pdf")
    }

    /// First `max_chars` characters of the excerpt, with an ellipsis when cut
    pub fn preview(&self, max_chars: usize) -> Option<String> {
        let text = self.text.as_deref()?;
        if text.chars().count() <= max_chars {
            return Some(text.to_string());
        }
        let cut: String = text.chars().take(max_chars).collect();
        Some(format!("{cut}..."))
    }
}

/// Pagination metadata of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Page number of this page (1-based)
    pub page_number: u32,
    /// Total pages reported by the service
    pub total_pages: u32,
    /// Total hits reported by the service
    pub total_results: u64,
    /// URL of the following page; absent on the last page
    #[serde(default)]
    pub next_page_url: Option<String>,
}

impl Pagination {
    /// Whether a further page exists.
    ///
    /// Only `next_page_url` is consulted; `total_pages` is informational.
    pub fn has_next_page(&self) -> bool {
        self.next_page_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// Category facet offered by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    /// Display name
    pub name: String,
    /// Search URL with this category applied
    pub url: String,
}

impl CategoryFilter {
    /// The `category_c` value encoded in the filter URL.
    ///
    /// Returns None for the catch-all filter or an unparsable URL.
    pub fn category_key(&self) -> Option<String> {
        // Filter URLs may be site-relative; any base works for reading the query
        let url = reqwest::Url::parse(&self.url)
            .or_else(|_| {
                reqwest::Url::parse("https://localhost/").and_then(|base| base.join(&self.url))
            })
            .ok()?;
        url.query_pairs()
            .find(|(key, value)| key == CATEGORY_PARAM && !value.is_empty())
            .map(|(_, value)| value.into_owned())
    }
}

/// One decoded page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Hits in service order
    #[serde(rename = "data")]
    pub results: Vec<SearchResult>,
    /// Pagination metadata
    pub pagination: Pagination,
    /// Category facets
    #[serde(default)]
    pub filters: Vec<CategoryFilter>,
}

impl SearchPage {
    /// Whether a further page exists
    pub fn has_next_page(&self) -> bool {
        self.pagination.has_next_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_query_defaults() {
        let query = SearchQuery::new("brand");
        assert_eq!(query.culture, Culture::Da);
        assert_eq!(query.page_number, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert!(query.category.is_none());
    }

    #[test]
    fn test_culture_serialization() {
        assert_eq!(serde_json::to_string(&Culture::Da).unwrap(), "\"da\"");
        assert_eq!(serde_json::to_string(&Culture::En).unwrap(), "\"en\"");
        assert_eq!(Culture::En.to_string(), "en");
    }

    #[test]
    fn test_validate_rejects_empty_term() {
        let result = SearchQuery::new("   ").validate();
        match result {
            Err(SearchError::InvalidQuery(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidQuery error"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_page_number() {
        let result = SearchQuery::new("brand").with_page_number(0).validate();
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let result = SearchQuery::new("brand").with_page_size(0).validate();
        assert!(matches!(result, Err(SearchError::InvalidQuery(_))));
    }

    #[test]
    fn test_params_without_category() {
        let params = SearchQuery::new("brand").to_params();
        assert_eq!(
            params,
            vec![
                ("term", "brand".to_string()),
                ("culture", "da".to_string()),
                ("pageNumber", "1".to_string()),
                ("pageSize", "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_with_category() {
        let params = SearchQuery::new("energi")
            .with_category("kravbestemmelser")
            .to_params();
        assert_eq!(
            params.last(),
            Some(&("category_c", "kravbestemmelser".to_string()))
        );
    }

    #[test]
    fn test_params_blank_category_omitted() {
        let params = SearchQuery::new("energi").with_category("").to_params();
        assert!(params.iter().all(|(key, _)| *key != CATEGORY_PARAM));
    }

    #[test]
    fn test_at_page_keeps_other_fields() {
        let query = SearchQuery::new("brand").with_page_size(5).with_category("x");
        let next = query.at_page(3);
        assert_eq!(next.page_number, 3);
        assert_eq!(next.page_size, 5);
        assert_eq!(next.category.as_deref(), Some("x"));
        assert_eq!(query.page_number, 1);
    }

    #[test]
    fn test_pagination_next_page_signal() {
        let mut pagination = Pagination {
            page_number: 1,
            total_pages: 1,
            total_results: 3,
            next_page_url: Some("/api/search?term=brand&pageNumber=2".to_string()),
        };
        // total_pages is ignored
        assert!(pagination.has_next_page());

        pagination.next_page_url = Some(String::new());
        assert!(!pagination.has_next_page());

        pagination.next_page_url = None;
        assert!(!pagination.has_next_page());
    }

    #[test]
    fn test_search_page_deserialization() {
        let json = r#"{
            "data": [{"title": "Brandforhold", "url": "https://example.dk/a.pdf", "score": 0.05}],
            "pagination": {"pageNumber": 1, "totalPages": 1, "totalResults": 1, "nextPageUrl": null},
            "filters": [{"name": "Alle", "url": "https://example.dk/api/search?term=brand"}]
        }"#;
        let page: SearchPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Brandforhold");
        assert!(page.results[0].text.is_none());
        assert!(!page.has_next_page());
        assert_eq!(page.filters[0].name, "Alle");
    }

    #[test]
    fn test_category_key_extraction() {
        let filter = CategoryFilter {
            name: "Vejledninger".to_string(),
            url: "https://www.bygningsreglementet.dk/api/search?term=test&category_c=vejledninger"
                .to_string(),
        };
        assert_eq!(filter.category_key().as_deref(), Some("vejledninger"));

        let relative = CategoryFilter {
            name: "Vejledninger".to_string(),
            url: "/api/search?term=test&category_c=vejledninger".to_string(),
        };
        assert_eq!(relative.category_key().as_deref(), Some("vejledninger"));

        let all = CategoryFilter {
            name: "Alle".to_string(),
            url: "https://www.bygningsreglementet.dk/api/search?term=test".to_string(),
        };
        assert_eq!(all.category_key(), None);
    }

    #[test]
    fn test_result_is_pdf() {
        let result = SearchResult {
            title: "Bilag".to_string(),
            url: "https://example.dk/Bilag.PDF".to_string(),
            score: 0.1,
            text: None,
        };
        assert!(result.is_pdf());
    }

    #[test]
    fn test_result_preview() {
        let result = SearchResult {
            title: "Ventilation".to_string(),
            url: "/ventilation".to_string(),
            score: 0.1,
            text: Some("Bygninger skal ventileres".to_string()),
        };
        assert_eq!(result.preview(9).as_deref(), Some("Bygninger..."));
        assert_eq!(result.preview(100).as_deref(), Some("Bygninger skal ventileres"));
    }

    proptest! {
        #[test]
        fn prop_params_carry_query_fields(
            term in "[a-zæøå]{1,12}",
            page_number in 1u32..1000,
            page_size in 1u32..200,
            category in proptest::option::of("[a-z]{1,10}"),
        ) {
            let mut query = SearchQuery::new(term.clone())
                .with_page_number(page_number)
                .with_page_size(page_size);
            if let Some(category) = &category {
                query = query.with_category(category.clone());
            }
            let params = query.to_params();

            prop_assert_eq!(&params[0], &("term", term));
            prop_assert_eq!(&params[2], &("pageNumber", page_number.to_string()));
            prop_assert_eq!(&params[3], &("pageSize", page_size.to_string()));
            let sent_category = params
                .iter()
                .find(|(key, _)| *key == CATEGORY_PARAM)
                .map(|(_, value)| value.clone());
            prop_assert_eq!(sent_category, category);
            prop_assert!(query.validate().is_ok());
        }
    }
}
