mod collection;
mod data_link;
mod data_type;
mod species_record;

pub use self::collection::SpeciesCollection;
pub use self::data_link::DataLink;
pub use self::data_type::{DataTypeCategory, TYPES_ORDER_DEFAULT};
pub use self::species_record::{EcologicalFlags, SpeciesRecord, RESOURCE_TYPE_NAME};
