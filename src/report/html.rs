use std::collections::HashMap;

use askama::Template;
use failure::Error;
use serde::Deserialize;

use crate::report::{LinkEntry, SpeciesTable};
use crate::species::DataTypeCategory;

/// Display labels for categories and the unit word of the year count.
#[derive(Clone, Debug, Deserialize)]
pub struct Labels {
    #[serde(default = "Labels::default_year")]
    pub year: String,
    #[serde(default = "Labels::default_total")]
    pub total: String,
    /// Category identifier to label.
    #[serde(default)]
    pub categories: HashMap<String, String>,
}

impl Labels {
    fn default_year() -> String {
        "years".into()
    }

    fn default_total() -> String {
        "Total".into()
    }

    /// The label of a category, falling back to its name.
    pub fn category(&self, type_name: &str) -> String {
        let identifier = DataTypeCategory::identifier_for(type_name);
        self.categories
            .get(&identifier)
            .cloned()
            .unwrap_or_else(|| type_name.to_string())
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            year: Self::default_year(),
            total: Self::default_total(),
            categories: HashMap::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "species_table.html")]
struct SpeciesTableTemplate {
    single: bool,
    species: Vec<String>,
    total_headers: Vec<HeaderView>,
    rows: Vec<RowView>,
    footnotes: Vec<String>,
}

struct HeaderView {
    identifier: String,
    label: String,
}

struct RowView {
    location: String,
    cells: Vec<Vec<LinkView>>,
    totals: Vec<TotalView>,
}

struct TotalView {
    identifier: String,
    count: usize,
}

struct LinkView {
    url: String,
    identifier: String,
    class: String,
    title: String,
    text: String,
    footnote: String,
}

impl LinkView {
    fn from_entry(entry: &LinkEntry, single: bool, labels: &Labels) -> Self {
        let identifier = entry.data_type.identifier().to_string();

        let class = if single {
            format!("rel-data-type-{}", identifier)
        } else {
            format!("rel-data-type-{} species-data-link", identifier)
        };

        let mut title = format!(
            "{}: {}, {}",
            entry.species,
            labels.category(entry.data_type.name()),
            entry.location
        );
        if !entry.num_years.is_empty() {
            title.push_str(&format!(" ({} {})", entry.num_years, labels.year));
        }

        Self {
            url: entry.url.clone(),
            identifier,
            class,
            title,
            text: entry.text.clone(),
            footnote: entry.footnote.map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

impl SpeciesTableTemplate {
    fn new(table: &SpeciesTable, labels: &Labels) -> Self {
        let single = table.is_single_data_type();

        let total_headers = table
            .total_columns
            .iter()
            .map(|column| HeaderView {
                identifier: column.identifier.clone(),
                label: match &column.data_type {
                    Some(type_name) => labels.category(type_name),
                    None => labels.total.clone(),
                },
            })
            .collect();

        let rows = table
            .rows
            .iter()
            .map(|row| RowView {
                location: row.location.clone(),
                cells: row
                    .cells
                    .iter()
                    .map(|cell| {
                        cell.iter()
                            .map(|entry| LinkView::from_entry(entry, single, labels))
                            .collect()
                    })
                    .collect(),
                totals: row
                    .totals
                    .iter()
                    .map(|total| TotalView {
                        identifier: total.identifier.clone(),
                        count: total.count,
                    })
                    .collect(),
            })
            .collect();

        Self {
            single,
            species: table.species.clone(),
            total_headers,
            rows,
            footnotes: table.footnotes.clone(),
        }
    }
}

/// Render a table as HTML, followed by its footnote list if there is one.
pub fn render_html(table: &SpeciesTable, labels: &Labels) -> Result<String, Error> {
    Ok(SpeciesTableTemplate::new(table, labels).render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TableOptions;
    use crate::species::{EcologicalFlags, SpeciesCollection, SpeciesRecord};

    fn collection() -> SpeciesCollection {
        let mut record = SpeciesRecord::new("Uria lomvia", "", EcologicalFlags::default());
        record
            .add_data_link(Some("Bjornoya"), "Population", "http://p", "25", Some("counts"))
            .add_data_link(Some("Bjornoya"), "Survival", "http://s", "", None)
            .add_data_link(Some("Hornoya"), "Survival", "http://s2", "14", Some("counts"));

        let mut collection = SpeciesCollection::new();
        collection.add_record(record);
        collection
    }

    fn labels() -> Labels {
        let mut labels = Labels::default();
        labels.year = "yrs".into();
        labels.categories.insert("survival".into(), "Adult survival".into());
        labels
    }

    #[test]
    fn all_categories() {
        let table = collection().build_table(&TableOptions::default());

        let html = render_html(&table, &labels()).unwrap();

        assert!(html.contains(r#"<th scope="row">Bjornoya</th>"#));
        assert!(html.contains(r#"class="rel-data-type-population species-data-link""#));
        assert!(html.contains("Uria lomvia: Population, Bjornoya (25 yrs)"));
        assert!(html.contains(r#"title="Uria lomvia: Adult survival, Bjornoya""#));
        assert!(html.contains(r#"<td class="rel-data-type-total"><span>2</span></td>"#));
        assert!(html.contains(r#"<td class="rel-data-type-survival"><span>1</span></td>"#));
        assert!(html.contains(">Adult survival</th>"));
        assert_eq!(html.matches("<a ").count(), 3);
        assert!(!html.contains("<sup>"));
        assert!(!html.contains("species-data-table-comments"));
    }

    #[test]
    fn single_category_with_footnotes() {
        let table = collection().build_table(&TableOptions {
            data_type: Some("Survival".into()),
            ..Default::default()
        });

        let html = render_html(&table, &labels()).unwrap();

        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains(r#"<div class="rel-data-type-survival">"#));
        assert!(html.contains("14<sup>1</sup></a>"));
        assert!(html.contains(r#"<td class="rel-data-type-t"><span>1</span></td>"#));
        assert!(html.contains("<li>counts</li>"));
        assert!(!html.contains("species-data-link"));
    }

    #[test]
    fn escapes_content() {
        let mut record = SpeciesRecord::new("<b>Gull</b>", "", EcologicalFlags::default());
        record.add_data_link(Some("A & B"), "Diet", "http://d", "1", None);
        let mut collection = SpeciesCollection::new();
        collection.add_record(record);

        let html = render_html(&collection.build_table(&TableOptions::default()), &Labels::default())
            .unwrap();

        assert!(html.contains("A &amp; B"));
        assert!(!html.contains("<b>Gull</b>"));
    }
}
