use std::fs::File;
use std::path::Path;

use clap::{crate_authors, crate_description, crate_version, Arg, Command};
use failure::Error;
use log::{error, info, warn};
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use settings::{Settings, SortOrder, SourceKind};

use crate::content::{load_collection, CmsSource, ContentSource, DirectorySource};
use crate::report::{render_html, write_totals_csv_to_path};
use crate::species::SpeciesRecord;

mod content;
mod report;
mod settings;
mod species;
#[cfg(test)]
mod test_utils;

fn main() {
    let matches = Command::new("SEAPOP Species Data")
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .value_name("SETTINGS")
                .help("Specify the settings file")
                .takes_value(true),
        )
        .arg(
            Arg::new("data-type")
                .short('t')
                .long("data-type")
                .value_name("DATA_TYPE")
                .help("Render only this data type, e.g. `Population`")
                .takes_value(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Specify the HTML output file")
                .takes_value(true),
        )
        .get_matches();

    let mut settings =
        Settings::new(matches.value_of("settings").map(Path::new)).expect("Unable to use config file.");

    if let Some(data_type) = matches.value_of("data-type") {
        settings.report.data_type = Some(data_type.into());
    }
    if let Some(output) = matches.value_of("output") {
        settings.report.html_file = output.into();
    }

    initialize_logger(Path::new(&settings.general.log_file), &settings)
        .expect("Unable to initialize logger.");

    let source: Box<dyn ContentSource> = match settings.source.kind {
        SourceKind::Directory => {
            info!("Reading species from `{}`", settings.source.directory);
            Box::new(DirectorySource::new(Path::new(&settings.source.directory)))
        }
        SourceKind::Cms => {
            info!(
                "Reading species from `{}` @ `{}`",
                settings.source.folder, settings.source.cms_url
            );
            Box::new(CmsSource::new(
                &settings.source.cms_url,
                &settings.source.folder,
                &settings.source.resource_type,
            ))
        }
    };

    let (mut collection, load_report) = load_collection(source.as_ref());
    load_report.log_summary();

    if collection.is_empty() {
        warn!("No species data found, the table will be empty");
    } else {
        info!(
            "Collected {} distinct species at {} locations",
            collection.names().len(),
            collection.locations().len()
        );
    }

    if settings.report.sort == SortOrder::Name {
        collection.sort_by(SpeciesRecord::cmp_by_name);
    }

    let table = collection.build_table(&settings.report.table_options());
    info!(
        "Aggregated {} species at {} locations",
        table.species.len(),
        table.rows.len()
    );

    let html = match render_html(&table, &settings.labels) {
        Ok(html) => html,
        Err(e) => {
            error!("Unable to render species table: {}", e);
            return; // stop program
        }
    };

    match std::fs::write(&settings.report.html_file, html) {
        Ok(_) => info!("Wrote species table to `{}`", settings.report.html_file),
        Err(e) => {
            error!(
                "Unable to write species table to `{}`: {}",
                settings.report.html_file, e
            );
            return; // stop program
        }
    }

    if let Some(csv_file) = &settings.report.csv_file {
        match write_totals_csv_to_path(&table, Path::new(csv_file)) {
            Ok(_) => info!("Wrote totals to `{}`", csv_file),
            Err(e) => error!("Unable to write totals to `{}`: {}", csv_file, e),
        }
    }
}

/// Initialize the logger.
fn initialize_logger(file_path: &Path, settings: &Settings) -> Result<(), Error> {
    let log_level = if settings.general.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    loggers.push(TermLogger::new(
        log_level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ));

    if let Ok(file) = File::create(file_path) {
        loggers.push(WriteLogger::new(
            log_level,
            simplelog::Config::default(),
            file,
        ));
    }

    CombinedLogger::init(loggers)?;

    Ok(())
}
