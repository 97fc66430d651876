pub mod analyzer;
pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
