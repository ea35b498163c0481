pub mod error;
pub mod filter;
pub mod json;
pub mod record;
pub mod value;

pub use error::{ModelError, Result};
pub use filter::CaseFilter;
pub use record::{Record, header_union, parse_records, parse_response};
pub use value::FieldValue;
