use crate::species::DataTypeCategory;

/// A link to a data set (typically a time series) for one location and category.
#[derive(Clone, Debug, PartialEq)]
pub struct DataLink {
    location: Option<String>,
    data_type: DataTypeCategory,
    url: String,
    num_years: String,
    comment: Option<String>,
}

impl DataLink {
    /// Create a new data link, wrapping the raw type name into a `DataTypeCategory`.
    pub fn new(
        location: Option<&str>,
        type_name: &str,
        url: &str,
        num_years: &str,
        comment: Option<&str>,
    ) -> Self {
        Self {
            location: location.map(Into::into),
            data_type: DataTypeCategory::new(type_name),
            url: url.into(),
            num_years: num_years.into(),
            comment: comment.map(Into::into),
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn data_type(&self) -> &DataTypeCategory {
        &self.data_type
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// How many years data exists for. May be empty.
    pub fn num_years(&self) -> &str {
        &self.num_years
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}
