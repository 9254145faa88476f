//! Bygningsreglement Search Client
//!
//! This crate provides a client for the search endpoint of
//! Bygningsreglementet.dk (the Danish building regulations).
//!
//! # Features
//! - Single-page search with category and language filters
//! - Multi-page aggregation bounded by a page limit
//! - Lazy page iteration (async stream or blocking iterator)
//! - Category filter discovery
//! - Client-side filtering and score statistics

pub mod analysis;
pub mod blocking;
pub mod client;
pub mod decode;
pub mod error;
pub mod search;
pub mod types;

// Re-export main types for convenience
pub use client::{ApiClient, ClientConfig};
pub use error::{Result, SearchError};
pub use search::{Pages, SearchClient, DEFAULT_MAX_PAGES};
pub use types::{CategoryFilter, Culture, Pagination, SearchPage, SearchQuery, SearchResult};
