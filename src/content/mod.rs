mod loader;
mod source;
mod species_unit;

pub use self::loader::load_collection;
pub use self::source::{CmsSource, ContentSource, DirectorySource};
pub use self::species_unit::SpeciesUnit;
