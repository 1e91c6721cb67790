use std::cmp::Ordering;

use crate::species::DataLink;

/// Resource type of species data units in the content store.
pub const RESOURCE_TYPE_NAME: &str = "seapop_species_data";

/// The ecological traits of a species that determine its display group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EcologicalFlags {
    pub pelagic: bool,
    pub surface_bound: bool,
    pub diving: bool,
    pub coastal_bound: bool,
    pub ice_bound: bool,
}

/// All data about a single species, including the links to its raw data.
#[derive(Clone, Debug)]
pub struct SpeciesRecord {
    name: String,
    source_uri: String,
    flags: EcologicalFlags,
    data_links: Vec<DataLink>,
}

impl SpeciesRecord {
    pub fn new(name: &str, source_uri: &str, flags: EcologicalFlags) -> Self {
        Self {
            name: name.into(),
            source_uri: source_uri.into(),
            flags,
            data_links: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the record was loaded from.
    pub fn source_uri(&self) -> &str {
        &self.source_uri
    }

    pub fn flags(&self) -> EcologicalFlags {
        self.flags
    }

    pub fn data_links(&self) -> &[DataLink] {
        &self.data_links
    }

    /// The display group of this species:
    ///
    /// * `0`: pelagic and diving
    /// * `1`: pelagic and diving / surface bound
    /// * `2`: pelagic and surface bound
    /// * `3`: pelagic / ice bound
    /// * `4`: pelagic / coastal bound (wins over ice bound)
    /// * `5`: coastal and surface bound
    /// * `6`: coastal and diving / surface bound
    /// * `7`: coastal and diving
    /// * `-1`: unclassified
    pub fn group_number(&self) -> i32 {
        let flags = self.flags();
        let mut group = -1;

        if flags.pelagic {
            if flags.diving {
                group = 0;
                if flags.surface_bound {
                    group = 1;
                }
            } else if flags.surface_bound {
                group = 2;
            }

            if flags.ice_bound {
                group = 3;
            }
            if flags.coastal_bound {
                group = 4;
            }
        } else if flags.surface_bound {
            group = 5;
            if flags.diving {
                group = 6;
            }
        } else if flags.diving {
            group = 7;
        }

        group
    }

    /// Append a data link built from raw fields.
    pub fn add_data_link(
        &mut self,
        location: Option<&str>,
        type_name: &str,
        url: &str,
        num_years: &str,
        comment: Option<&str>,
    ) -> &mut Self {
        self.data_links
            .push(DataLink::new(location, type_name, url, num_years, comment));
        self
    }

    /// All data links for exactly this location. Links without a location never match.
    pub fn data_links_for(&self, location: &str) -> Vec<&DataLink> {
        self.data_links
            .iter()
            .filter(|link| link.location() == Some(location))
            .collect()
    }

    /// The locations of this record's data links, in first-seen order.
    pub fn distinct_locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> = Vec::new();
        for location in self.data_links.iter().filter_map(DataLink::location) {
            if !locations.contains(&location) {
                locations.push(location);
            }
        }
        locations
    }

    /// Order by group number first and by name for identical group numbers.
    pub fn cmp_by_group_number(&self, other: &Self) -> Ordering {
        self.group_number()
            .cmp(&other.group_number())
            .then_with(|| self.name.cmp(&other.name))
    }

    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
