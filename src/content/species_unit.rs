use failure::Fail;
use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

use crate::species::{EcologicalFlags, SpeciesRecord};

/// This error occurs when a species unit cannot be read as a species record.
#[derive(Debug, Fail)]
#[fail(display = "Species unit {} is malformed: {}", unit, reason)]
pub struct MalformedUnit {
    unit: String,
    reason: String,
}

impl MalformedUnit {
    pub fn new(unit: &str, reason: &str) -> Self {
        Self {
            unit: unit.into(),
            reason: reason.into(),
        }
    }
}

/// The fields of one species unit of the content store.
#[derive(Debug, Deserialize, PartialEq)]
pub struct SpeciesUnit {
    #[serde(rename = "SpeciesName")]
    pub name: String,
    #[serde(rename = "Pelagic", default, deserialize_with = "flag")]
    pub pelagic: bool,
    #[serde(rename = "SurfaceBound", default, deserialize_with = "flag")]
    pub surface_bound: bool,
    #[serde(rename = "Diving", default, deserialize_with = "flag")]
    pub diving: bool,
    #[serde(rename = "CoastalBound", default, deserialize_with = "flag")]
    pub coastal_bound: bool,
    #[serde(rename = "IceBound", default, deserialize_with = "flag")]
    pub ice_bound: bool,
    /// Read separately, so that a broken section does not discard the species.
    #[serde(rename = "DataLinks", default)]
    pub data_links: Option<JsonValue>,
}

/// The data links of one location.
#[derive(Debug, Deserialize, PartialEq)]
struct LocationSection {
    #[serde(rename = "Location", default)]
    location: Option<String>,
    #[serde(rename = "DataLink", default)]
    data_links: Vec<DataLinkFields>,
}

#[derive(Debug, Deserialize, PartialEq)]
struct DataLinkFields {
    #[serde(rename = "Type")]
    data_type: String,
    #[serde(rename = "URL", default)]
    url: String,
    #[serde(rename = "NumOfYears", default, deserialize_with = "text")]
    num_years: String,
    #[serde(rename = "Comment", default)]
    comment: Option<String>,
}

/// Scalar content values; the store delivers booleans and numbers as text as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ScalarValue>::deserialize(deserializer)? {
        Some(ScalarValue::Bool(value)) => value,
        Some(ScalarValue::Text(value)) => value.trim().eq_ignore_ascii_case("true"),
        Some(ScalarValue::Number(_)) | None => false,
    })
}

fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ScalarValue>::deserialize(deserializer)? {
        Some(ScalarValue::Bool(value)) => value.to_string(),
        Some(ScalarValue::Number(value)) => value.to_string(),
        Some(ScalarValue::Text(value)) => value,
        None => String::new(),
    })
}

impl SpeciesUnit {
    pub fn from_json(unit_id: &str, value: JsonValue) -> Result<Self, MalformedUnit> {
        serde_json::from_value(value).map_err(|e| MalformedUnit::new(unit_id, &e.to_string()))
    }

    pub fn flags(&self) -> EcologicalFlags {
        EcologicalFlags {
            pelagic: self.pelagic,
            surface_bound: self.surface_bound,
            diving: self.diving,
            coastal_bound: self.coastal_bound,
            ice_bound: self.ice_bound,
        }
    }

    /// Create the species record. A malformed data links section yields a record
    /// without links and the reason.
    pub fn into_record(self, unit_id: &str) -> (SpeciesRecord, Option<String>) {
        let mut record = SpeciesRecord::new(&self.name, unit_id, self.flags());

        let sections = match self.data_links {
            None | Some(JsonValue::Null) => return (record, None),
            Some(value) => match serde_json::from_value::<Vec<LocationSection>>(value) {
                Ok(sections) => sections,
                Err(e) => return (record, Some(e.to_string())),
            },
        };

        for section in &sections {
            for fields in &section.data_links {
                let comment = fields
                    .comment
                    .as_deref()
                    .filter(|comment| !comment.trim().is_empty());

                record.add_data_link(
                    section.location.as_deref(),
                    &fields.data_type,
                    &fields.url,
                    &fields.num_years,
                    comment,
                );
            }
        }

        for link in record.data_links() {
            if link.data_type().order_factor() < 0 {
                debug!("Unknown data type `{}` in `{}`", link.data_type(), unit_id);
            }
        }

        (record, None)
    }
}
