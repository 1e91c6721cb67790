use crate::report::Footnotes;
use crate::species::{DataTypeCategory, SpeciesCollection, TYPES_ORDER_DEFAULT};

/// Identifier of the combined total column.
pub const COMBINED_TOTAL_IDENTIFIER: &str = "total";
/// Identifier of the total column in a single category table.
pub const SINGLE_TOTAL_IDENTIFIER: &str = "t";

/// Controls which categories a table shows and totals.
#[derive(Clone, Debug)]
pub struct TableOptions {
    /// Show only this category. `None` shows all categories.
    pub data_type: Option<String>,
    /// The categories to total, in column order.
    pub data_type_totals: Vec<String>,
    /// Categories left out when all categories are shown.
    pub excluded_data_types: Vec<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            data_type: None,
            data_type_totals: TYPES_ORDER_DEFAULT.iter().map(|name| name.to_string()).collect(),
            excluded_data_types: Vec::new(),
        }
    }
}

impl TableOptions {
    fn is_excluded(&self, type_name: &str) -> bool {
        self.excluded_data_types.iter().any(|excluded| excluded == type_name)
    }
}

/// One data link, placed in a table cell.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkEntry {
    pub species: String,
    pub location: String,
    pub data_type: DataTypeCategory,
    pub url: String,
    pub num_years: String,
    /// The link text; the number of years in a single category table, empty otherwise.
    pub text: String,
    pub footnote: Option<usize>,
}

/// A total column of the table. `data_type` is `None` for the combined total.
#[derive(Clone, Debug, PartialEq)]
pub struct TotalColumn {
    pub data_type: Option<String>,
    pub identifier: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TotalCell {
    pub identifier: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub location: String,
    /// One cell per species, in collection order.
    pub cells: Vec<Vec<LinkEntry>>,
    pub totals: Vec<TotalCell>,
}

/// Data links aggregated per location and species, with per-category sums.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeciesTable {
    pub data_type: Option<String>,
    pub species: Vec<String>,
    pub total_columns: Vec<TotalColumn>,
    pub rows: Vec<TableRow>,
    pub footnotes: Vec<String>,
}

impl SpeciesTable {
    pub fn build(collection: &SpeciesCollection, options: &TableOptions) -> Self {
        let totals = &options.data_type_totals;
        let combined_slot = totals.len();
        let mut footnotes = Footnotes::new();
        let mut rows = Vec::with_capacity(collection.locations().len());

        for location in collection.locations() {
            // one slot per totaled category plus the combined total
            let mut sums = vec![0; totals.len() + 1];
            let mut cells = Vec::with_capacity(collection.len());

            for record in collection.records() {
                let mut cell = Vec::new();

                for link in record.data_links_for(location) {
                    let type_name = link.data_type().name();

                    let included = match &options.data_type {
                        Some(data_type) => data_type == type_name,
                        None => !options.is_excluded(type_name),
                    };
                    if !included {
                        continue;
                    }

                    if let Some(slot) = totals.iter().position(|total| total == type_name) {
                        sums[slot] += 1;
                    }
                    sums[combined_slot] += 1;

                    let (text, footnote) = if options.data_type.is_some() {
                        let footnote = link
                            .comment()
                            .filter(|comment| !comment.is_empty())
                            .map(|comment| footnotes.number_for(comment));
                        (link.num_years().to_string(), footnote)
                    } else {
                        (String::new(), None)
                    };

                    cell.push(LinkEntry {
                        species: record.name().into(),
                        location: location.clone(),
                        data_type: link.data_type().clone(),
                        url: link.url().into(),
                        num_years: link.num_years().into(),
                        text,
                        footnote,
                    });
                }

                cells.push(cell);
            }

            let row_totals = match &options.data_type {
                None => totals
                    .iter()
                    .enumerate()
                    .filter(|(_, name)| !options.is_excluded(name))
                    .map(|(slot, name)| TotalCell {
                        identifier: DataTypeCategory::identifier_for(name),
                        count: sums[slot],
                    })
                    .chain(std::iter::once(TotalCell {
                        identifier: COMBINED_TOTAL_IDENTIFIER.into(),
                        count: sums[combined_slot],
                    }))
                    .collect(),
                // only links of this category were counted
                Some(_) => vec![TotalCell {
                    identifier: SINGLE_TOTAL_IDENTIFIER.into(),
                    count: sums[combined_slot],
                }],
            };

            rows.push(TableRow {
                location: location.clone(),
                cells,
                totals: row_totals,
            });
        }

        let footnotes = if options.data_type.is_some() && !footnotes.is_empty() {
            footnotes.into_vec()
        } else {
            Vec::new()
        };

        Self {
            data_type: options.data_type.clone(),
            species: collection
                .records()
                .iter()
                .map(|record| record.name().to_string())
                .collect(),
            total_columns: Self::total_columns(options),
            rows,
            footnotes,
        }
    }

    fn total_columns(options: &TableOptions) -> Vec<TotalColumn> {
        match &options.data_type {
            None => options
                .data_type_totals
                .iter()
                .filter(|name| !options.is_excluded(name))
                .map(|name| TotalColumn {
                    data_type: Some(name.clone()),
                    identifier: DataTypeCategory::identifier_for(name),
                })
                .chain(std::iter::once(TotalColumn {
                    data_type: None,
                    identifier: COMBINED_TOTAL_IDENTIFIER.into(),
                }))
                .collect(),
            Some(data_type) => vec![TotalColumn {
                data_type: Some(data_type.clone()),
                identifier: SINGLE_TOTAL_IDENTIFIER.into(),
            }],
        }
    }

    pub fn is_single_data_type(&self) -> bool {
        self.data_type.is_some()
    }
}
