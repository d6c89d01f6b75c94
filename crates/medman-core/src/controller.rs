//! The measurement controller: single authority over the in-memory
//! collection, constructed once per session and handed to whatever
//! presentation code needs it.
//!
//! Every mutation persists the full collection before returning, so the
//! in-memory state and the stored copy never diverge: if the write fails,
//! the mutation is rolled back and the error propagates.

use tracing::info;

use crate::config::AppConfig;
use crate::error::{MedmanError, Result};
use crate::filter::{self, FilterCriteria};
use crate::models::{Measurement, Theme};
use crate::storage::{self, LocalStore};

/// Emitted after a successful mutation. Carries no payload: observers only
/// learn that the operation succeeded, in the original UI this drives a
/// transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added,
    Removed,
}

type Observer = Box<dyn FnMut(StoreEvent)>;

pub struct MeasurementController {
    store: LocalStore,
    config: AppConfig,
    measurements: Vec<Measurement>,
    observers: Vec<Observer>,
}

impl MeasurementController {
    /// Populate the in-memory collection from the store. This is the only
    /// point at which the collection is sourced from storage; afterwards
    /// the controller's copy is authoritative.
    pub fn initialize(store: LocalStore, config: AppConfig) -> Self {
        let measurements = storage::load_measurements(&store);
        info!(count = measurements.len(), "measurement store loaded");
        Self {
            store,
            config,
            measurements,
            observers: Vec::new(),
        }
    }

    /// Read-only view of the live collection, in insertion order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn subscribe(&mut self, observer: impl FnMut(StoreEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, event: StoreEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }

    /// Append a well-formed measurement and persist. Validation is the
    /// caller's responsibility and happens before this call.
    pub fn add(&mut self, measurement: Measurement) -> Result<()> {
        self.measurements.push(measurement);
        if let Err(e) = storage::save_measurements(&mut self.store, &self.measurements) {
            self.measurements.pop();
            return Err(e);
        }
        info!(count = self.measurements.len(), "measurement added");
        self.notify(StoreEvent::Added);
        Ok(())
    }

    /// Remove the element at `index` (0-based, against the current
    /// collection) and persist. An out-of-range index is rejected and
    /// leaves the collection unchanged.
    pub fn remove(&mut self, index: usize) -> Result<Measurement> {
        let len = self.measurements.len();
        if index >= len {
            return Err(MedmanError::IndexOutOfRange { index, len });
        }
        let removed = self.measurements.remove(index);
        if let Err(e) = storage::save_measurements(&mut self.store, &self.measurements) {
            self.measurements.insert(index, removed);
            return Err(e);
        }
        info!(index, count = self.measurements.len(), "measurement removed");
        self.notify(StoreEvent::Removed);
        Ok(removed)
    }

    /// Narrow the collection by the criteria without mutating it. Stable:
    /// matches keep their relative order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<Measurement> {
        self.measurements
            .iter()
            .filter(|m| filter::matches(m, criteria, &self.config.all_units_label))
            .cloned()
            .collect()
    }

    /// Current theme preference; defaults to light when none was persisted.
    pub fn theme(&self) -> Theme {
        storage::load_theme(&self.store).unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        storage::save_theme(&mut self.store, theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let next = self.theme().toggle();
        self.set_theme(next)?;
        Ok(next)
    }
}
