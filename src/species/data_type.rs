use std::fmt;
use std::hash::{Hash, Hasher};

pub const POPULATION: &str = "Population";
pub const REPRODUCTION: &str = "Reproduction";
pub const SURVIVAL: &str = "Survival";
pub const DIET: &str = "Diet";
/// Phenology
pub const TIMING: &str = "Timing";

/// The canonical ordering of the data type categories.
pub const TYPES_ORDER_DEFAULT: [&str; 5] = [POPULATION, REPRODUCTION, SURVIVAL, DIET, TIMING];

/// The subject of a data link, e.g. `Population` or `Survival`.
///
/// Two categories are equal iff their names match exactly.
#[derive(Clone, Debug)]
pub struct DataTypeCategory {
    name: String,
    identifier: String,
    order_factor: i32,
}

impl DataTypeCategory {
    /// Create a category from a raw type name.
    /// Names outside of `TYPES_ORDER_DEFAULT` get an order factor of `-1`.
    pub fn new(name: &str) -> Self {
        let order_factor = TYPES_ORDER_DEFAULT
            .iter()
            .position(|type_name| *type_name == name)
            .map_or(-1, |index| index as i32);

        Self {
            name: name.into(),
            identifier: Self::identifier_for(name),
            order_factor,
        }
    }

    /// The identifier of a type name, regardless of whether it is a known one.
    pub fn identifier_for(name: &str) -> String {
        name.to_lowercase()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn order_factor(&self) -> i32 {
        self.order_factor
    }
}

impl PartialEq for DataTypeCategory {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DataTypeCategory {}

impl Hash for DataTypeCategory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for DataTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
