//! Case search filters.

use serde::{Deserialize, Serialize};

/// Search criteria for the case endpoint.
///
/// Every field is optional; blank values are dropped before a query is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFilter {
    pub litigation_id: Option<String>,
    pub status_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Lower bound on the creation date (`YYYY-MM-DD`).
    pub date_from: Option<String>,
    /// Upper bound on the creation date (`YYYY-MM-DD`).
    pub date_to: Option<String>,
    /// Comma-separated tag list, passed through verbatim.
    pub tags: Option<String>,
    pub limit: Option<String>,
}

impl CaseFilter {
    /// Query parameters with values trimmed and blanks removed, in a fixed
    /// field order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let fields: [(&'static str, &Option<String>); 10] = [
            ("litigation_id", &self.litigation_id),
            ("status_id", &self.status_id),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("date_from", &self.date_from),
            ("date_to", &self.date_to),
            ("tags", &self.tags),
            ("limit", &self.limit),
        ];
        fields
            .into_iter()
            .filter_map(|(name, value)| {
                let trimmed = value.as_deref()?.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some((name, trimmed.to_string()))
                }
            })
            .collect()
    }

    /// True when no field would reach the query string.
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}
