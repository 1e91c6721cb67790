use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use failure::Error;
use log::debug;
use serde_json::Value as JsonValue;

/// A read-only store of species units.
pub trait ContentSource {
    /// The ids of all species units.
    fn list_units(&self) -> Result<Vec<String>, Error>;

    /// The raw content of a single species unit.
    fn load_unit(&self, unit_id: &str) -> Result<JsonValue, Error>;
}

/// Species units stored as JSON files in a directory.
#[derive(Debug)]
pub struct DirectorySource {
    directory: PathBuf,
}

impl DirectorySource {
    pub fn new(directory: &Path) -> Self {
        Self {
            directory: directory.to_path_buf(),
        }
    }
}

impl ContentSource for DirectorySource {
    fn list_units(&self) -> Result<Vec<String>, Error> {
        let mut units = Vec::new();

        for entry in std::fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
                units.push(path.display().to_string());
            }
        }
        units.sort();

        debug!(
            "Found {} species files in `{}`",
            units.len(),
            self.directory.display()
        );

        Ok(units)
    }

    fn load_unit(&self, unit_id: &str) -> Result<JsonValue, Error> {
        let file = File::open(unit_id)?;
        let reader = BufReader::new(file);

        Ok(serde_json::from_reader(reader)?)
    }
}

/// Species units served by the content management system.
#[derive(Debug)]
pub struct CmsSource {
    client: reqwest::blocking::Client,
    base_url: String,
    folder: String,
    resource_type: String,
}

impl CmsSource {
    pub fn new(base_url: &str, folder: &str, resource_type: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').into(),
            folder: folder.into(),
            resource_type: resource_type.into(),
        }
    }
}

impl ContentSource for CmsSource {
    fn list_units(&self) -> Result<Vec<String>, Error> {
        Ok(self
            .client
            .get(&format!("{}/listing", self.base_url))
            .query(&[("folder", &self.folder), ("type", &self.resource_type)])
            .send()?
            .error_for_status()?
            .json()?)
    }

    fn load_unit(&self, unit_id: &str) -> Result<JsonValue, Error> {
        Ok(self
            .client
            .get(&format!("{}/content", self.base_url))
            .query(&[("uri", unit_id)])
            .send()?
            .error_for_status()?
            .json()?)
    }
}
