use std::path::Path;

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use config::FileFormat;
use serde::Deserialize;

use crate::report::{Labels, TableOptions};
use crate::species::RESOURCE_TYPE_NAME;

#[derive(Debug, Deserialize)]
pub struct GeneralSettings {
    pub log_file: String,
    pub debug: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Directory,
    Cms,
}

#[derive(Debug, Deserialize)]
pub struct SourceSettings {
    pub kind: SourceKind,
    pub directory: String,
    pub cms_url: String,
    pub folder: String,
    #[serde(default = "SourceSettings::default_resource_type")]
    pub resource_type: String,
}

impl SourceSettings {
    fn default_resource_type() -> String {
        RESOURCE_TYPE_NAME.into()
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Group,
    Name,
}

#[derive(Debug, Deserialize)]
pub struct ReportSettings {
    pub data_type: Option<String>,
    pub data_type_totals: Vec<String>,
    pub excluded_data_types: Vec<String>,
    pub sort: SortOrder,
    pub html_file: String,
    pub csv_file: Option<String>,
}

impl ReportSettings {
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            data_type: self.data_type.clone().filter(|data_type| !data_type.is_empty()),
            data_type_totals: self.data_type_totals.clone(),
            excluded_data_types: self.excluded_data_types.clone(),
        }
    }
}

/// This struct stores the program settings.
#[derive(Debug, Deserialize)]
pub struct Settings {
    pub general: GeneralSettings,
    pub source: SourceSettings,
    pub report: ReportSettings,
    #[serde(default)]
    pub labels: Labels,
}

impl Settings {
    pub fn new(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut s = ConfigBuilder::<DefaultState>::default();
        s = s.add_source(File::new("settings-default.toml", FileFormat::Toml));
        s = s.add_source(File::new("settings.toml", FileFormat::Toml).required(false));
        if let Some(path) = path {
            s = s.add_source(File::from(path));
        }

        let config = s.build()?;

        config.try_deserialize()
    }
}
