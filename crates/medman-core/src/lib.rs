//! medman-core: measurement store and controller for medman-rs.
//!
//! The central design principle: one `MeasurementController` per session is
//! the single authority over the in-memory collection, and every mutation
//! persists the full collection before returning. Reads from storage are
//! fail-soft (absent or corrupt data degrades to an empty collection);
//! writes are reported, never silently dropped.

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod models;
pub mod storage;
pub mod validate;

pub use config::{AppConfig, NamePolicy};
pub use controller::{MeasurementController, StoreEvent};
pub use error::MedmanError;
pub use filter::FilterCriteria;
pub use models::{Measurement, Theme};
pub use storage::LocalStore;
