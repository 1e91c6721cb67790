use std::cmp::Ordering;

use crate::report::{SpeciesTable, TableOptions};
use crate::species::SpeciesRecord;

/// All species records of a site, plus the distinct locations and names among them.
#[derive(Debug, Default)]
pub struct SpeciesCollection {
    locations: Vec<String>,
    names: Vec<String>,
    records: Vec<SpeciesRecord>,
}

impl SpeciesCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record and merge its name and locations into the distinct lists.
    pub fn add_record(&mut self, record: SpeciesRecord) {
        if !self.names.iter().any(|name| name == record.name()) {
            self.names.push(record.name().into());
        }

        for location in record.distinct_locations() {
            if !self.locations.iter().any(|known| known == location) {
                self.locations.push(location.into());
            }
        }

        self.records.push(record);
    }

    /// Sort by group number, and by name within a group.
    pub fn sort_by_group(&mut self) {
        self.sort_by(SpeciesRecord::cmp_by_group_number);
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&SpeciesRecord, &SpeciesRecord) -> Ordering,
    {
        self.records.sort_by(compare);
    }

    /// Aggregate the records into a table with one row per location.
    pub fn build_table(&self, options: &TableOptions) -> SpeciesTable {
        SpeciesTable::build(self, options)
    }

    /// Distinct locations, in first-seen order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Distinct species names, in first-seen order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn records(&self) -> &[SpeciesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::EcologicalFlags;

    fn record(name: &str, flags: EcologicalFlags, locations: &[Option<&str>]) -> SpeciesRecord {
        let mut record = SpeciesRecord::new(name, "", flags);
        for location in locations {
            record.add_data_link(*location, "Population", "http://example.org", "10", None);
        }
        record
    }

    fn assert_caches_consistent(collection: &SpeciesCollection) {
        let mut names: Vec<String> = Vec::new();
        let mut locations: Vec<String> = Vec::new();
        for record in collection.records() {
            if !names.iter().any(|name| name == record.name()) {
                names.push(record.name().into());
            }
            for link in record.data_links() {
                if let Some(location) = link.location() {
                    if !locations.iter().any(|known| known == location) {
                        locations.push(location.into());
                    }
                }
            }
        }

        assert_eq!(collection.names(), names.as_slice());
        assert_eq!(collection.locations(), locations.as_slice());
    }

    #[test]
    fn caches_follow_every_add() {
        let flags = EcologicalFlags::default();
        let records = vec![
            record("Uria aalge", flags, &[Some("Hornøya"), None, Some("Røst")]),
            record("Alle alle", flags, &[]),
            record("Uria aalge", flags, &[Some("Sklinna"), Some("Hornøya")]),
            record("Rissa tridactyla", flags, &[None, Some("Bjørnøya"), Some("Røst")]),
        ];

        let mut collection = SpeciesCollection::new();
        assert_caches_consistent(&collection);

        for record in records {
            collection.add_record(record);
            assert_caches_consistent(&collection);
        }

        assert_eq!(collection.len(), 4);
        assert_eq!(
            collection.names(),
            &["Uria aalge", "Alle alle", "Rissa tridactyla"]
        );
        assert_eq!(
            collection.locations(),
            &["Hornøya", "Røst", "Sklinna", "Bjørnøya"]
        );
    }

    #[test]
    fn sort_by_group_then_name() {
        let pelagic_diving = EcologicalFlags {
            pelagic: true,
            diving: true,
            ..Default::default()
        };
        let coastal_surface = EcologicalFlags {
            surface_bound: true,
            ..Default::default()
        };

        let mut collection = SpeciesCollection::new();
        collection.add_record(record("Larus marinus", coastal_surface, &[Some("Røst")]));
        collection.add_record(record("Uria lomvia", pelagic_diving, &[Some("Hornøya")]));
        collection.add_record(record("Unclassified", EcologicalFlags::default(), &[]));
        collection.add_record(record("Alle alle", pelagic_diving, &[]));
        collection.add_record(record("Larus argentatus", coastal_surface, &[]));
        assert_caches_consistent(&collection);

        let names_before = collection.names().to_vec();
        let locations_before = collection.locations().to_vec();

        collection.sort_by_group();

        let order: Vec<(i32, &str)> = collection
            .records()
            .iter()
            .map(|record| (record.group_number(), record.name()))
            .collect();
        assert_eq!(
            order,
            vec![
                (-1, "Unclassified"),
                (0, "Alle alle"),
                (0, "Uria lomvia"),
                (5, "Larus argentatus"),
                (5, "Larus marinus"),
            ]
        );
        for pair in order.windows(2) {
            assert!(pair[0] <= pair[1]);
        }

        // the caches keep the order in which records were added
        assert_eq!(collection.names(), names_before.as_slice());
        assert_eq!(collection.locations(), locations_before.as_slice());
        assert_eq!(collection.locations(), &["Røst", "Hornøya"]);
    }

    #[test]
    fn sort_by_custom_comparator() {
        let mut collection = SpeciesCollection::new();
        collection.add_record(record("Fulmarus glacialis", EcologicalFlags::default(), &[]));
        collection.add_record(record("Alca torda", EcologicalFlags::default(), &[]));
        collection.add_record(record("Cepphus grylle", EcologicalFlags::default(), &[]));

        collection.sort_by(|a, b| b.name().cmp(a.name()));

        let names: Vec<&str> = collection.records().iter().map(SpeciesRecord::name).collect();
        assert_eq!(names, vec!["Fulmarus glacialis", "Cepphus grylle", "Alca torda"]);
        assert_eq!(
            collection.names(),
            &["Fulmarus glacialis", "Alca torda", "Cepphus grylle"]
        );
    }
}
