//! Section Schema Editor Library
//!
//! This library extracts the `{% schema %}` JSON block from a Shopify section
//! template, normalizes its settings against a fixed type registry while they
//! are edited, and writes the block back without touching the rest of the file.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
