use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::search::Searchable;

/// An on-site technician visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Visit {
    pub id: i64,
    pub client_id: i64,
    pub client_name: Option<String>,
    pub scheduled_on: Option<NaiveDate>,
    pub technician: Option<String>,
    pub report: Option<String>,
    pub done: bool,
}

impl Searchable for Visit {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.technician.as_deref(),
            self.client_name.as_deref(),
            self.report.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NewVisit {
    pub client_id: i64,
    pub scheduled_on: Option<NaiveDate>,
    pub technician: Option<String>,
    pub report: Option<String>,
    pub done: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct VisitPatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub scheduled_on: Option<Option<NaiveDate>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub technician: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub report: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}
