use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use failure::Error;

use crate::report::SpeciesTable;

/// Write the total columns of a table as CSV, one record per location.
pub fn write_totals_csv<W: Write>(table: &SpeciesTable, writer: W) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["location"];
    header.extend(table.total_columns.iter().map(|column| column.identifier.as_str()));
    csv_writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![row.location.clone()];
        record.extend(row.totals.iter().map(|total| total.count.to_string()));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;

    Ok(())
}

pub fn write_totals_csv_to_path(table: &SpeciesTable, path: &Path) -> Result<(), Error> {
    let file = File::create(path)?;
    write_totals_csv(table, BufWriter::new(file))
}
