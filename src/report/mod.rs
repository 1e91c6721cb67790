mod footnotes;
mod html;
mod table;
mod totals_csv;

pub use self::footnotes::Footnotes;
pub use self::html::{render_html, Labels};
pub use self::table::{LinkEntry, SpeciesTable, TableOptions};
pub use self::totals_csv::write_totals_csv_to_path;
