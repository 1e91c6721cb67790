use log::{debug, error, info, warn};

use crate::content::{ContentSource, SpeciesUnit};
use crate::species::{SpeciesCollection, SpeciesRecord};

/// The outcome of loading a single species unit.
#[derive(Debug)]
pub enum UnitLoad {
    Loaded(SpeciesRecord),
    /// The species was read, but its data links were not.
    WithoutLinks { record: SpeciesRecord, reason: String },
    Skipped { reason: String },
}

#[derive(Debug, PartialEq)]
pub struct SkippedUnit {
    pub unit: String,
    pub reason: String,
}

/// What happened while loading a collection.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedUnit>,
    pub without_links: Vec<String>,
    /// Why the units could not be listed, if they could not.
    pub listing_error: Option<String>,
}

impl LoadReport {
    pub fn listing_failed(&self) -> bool {
        self.listing_error.is_some()
    }

    pub fn log_summary(&self) {
        if let Some(listing_error) = &self.listing_error {
            error!(
                "Unable to list species units, the collection is empty: {}",
                listing_error
            );
            return;
        }

        for skipped in &self.skipped {
            warn!("Skipped species unit `{}`: {}", skipped.unit, skipped.reason);
        }

        info!(
            "Loaded {} species units ({} without data links), skipped {}",
            self.loaded,
            self.without_links.len(),
            self.skipped.len()
        );
    }
}

/// Load and parse a single species unit.
pub fn load_unit<S: ContentSource + ?Sized>(source: &S, unit_id: &str) -> UnitLoad {
    let unit = source
        .load_unit(unit_id)
        .and_then(|value| Ok(SpeciesUnit::from_json(unit_id, value)?));

    match unit {
        Ok(unit) => match unit.into_record(unit_id) {
            (record, None) => UnitLoad::Loaded(record),
            (record, Some(reason)) => UnitLoad::WithoutLinks { record, reason },
        },
        Err(e) => UnitLoad::Skipped {
            reason: e.to_string(),
        },
    }
}

/// Load all species units of a source into a collection sorted by group.
///
/// Nothing here is fatal: a failed listing yields an empty collection, a broken
/// unit is left out and broken data links leave a species without links.
pub fn load_collection<S: ContentSource + ?Sized>(source: &S) -> (SpeciesCollection, LoadReport) {
    let mut collection = SpeciesCollection::new();
    let mut report = LoadReport::default();

    let units = match source.list_units() {
        Ok(units) => units,
        Err(e) => {
            report.listing_error = Some(e.to_string());
            return (collection, report);
        }
    };

    for unit_id in units {
        match load_unit(source, &unit_id) {
            UnitLoad::Loaded(record) => {
                debug!(
                    "Loaded `{}` from `{}` (group {})",
                    record.name(),
                    record.source_uri(),
                    record.group_number()
                );
                report.loaded += 1;
                collection.add_record(record);
            }
            UnitLoad::WithoutLinks { record, reason } => {
                warn!("Unable to read data links of `{}`: {}", unit_id, reason);
                report.loaded += 1;
                report.without_links.push(unit_id);
                collection.add_record(record);
            }
            UnitLoad::Skipped { reason } => {
                report.skipped.push(SkippedUnit {
                    unit: unit_id,
                    reason,
                });
            }
        }
    }

    collection.sort_by_group();

    (collection, report)
}
