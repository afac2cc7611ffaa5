use crate::spec::FilterRange;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The requested bounds are inverted or leave the field's domain.
    #[error("Invalid filter range {requested} for {field}; allowed domain is {domain}")]
    InvalidFilterRange {
        field: String,
        requested: FilterRange,
        domain: FilterRange,
    },
}
