//! Client for the case search endpoint.
//!
//! Issues `GET <base>/cases?<filters>` with blank filters removed and decodes
//! the `{ "cases": [...] }` response into records.

mod client;
pub mod error;

pub use client::{CASES_PATH, CaseClient, DEFAULT_ENDPOINT, REQUEST_TIMEOUT, decode_cases};
pub use error::{ClientError, Result};
