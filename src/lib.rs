//! tripplan - Terminal-based travel itinerary planning application
//!
//! This library provides the core functionality for tripplan: a catalog of
//! travel destinations, an itinerary that tracks one traveler's selections,
//! and a cost ledger that keeps the running total against a budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (destinations, ledger, itinerary)
//! - `catalog`: The destination catalog and line-oriented import
//! - `display`: Terminal formatting (pure string builders)
//! - `export`: Text and JSON plan export
//! - `config`: Configuration and path management
//! - `cli`: Command handlers and the interactive menu session
//!
//! # Example
//!
//! ```rust
//! use tripplan::catalog::DestinationCatalog;
//! use tripplan::models::{Itinerary, Money};
//!
//! let catalog = DestinationCatalog::with_defaults();
//!
//! let mut plan = Itinerary::new("Alice");
//! plan.set_budget(Money::from_major(1_000))?;
//! plan.add_destination(catalog.get(0)?.clone())?;
//! # Ok::<(), tripplan::TripError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;

pub use error::{TripError, TripResult};
