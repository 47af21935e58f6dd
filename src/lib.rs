/// Startup configuration (API token, endpoint, timeouts)
pub mod config;

/// Markdown rendering of the search input and results views
pub mod formatter;

/// GitHub GraphQL client implementing the paginated repository search
pub mod github;

/// Results route parsing and construction
pub mod navigation;

/// Pagination controller and the session driving it
pub mod services;

/// Core type definitions and domain models used throughout the library
pub mod types;
