use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::search::Searchable;

/// An equipment-lease agreement financed through a lessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Lease {
    pub id: i64,
    pub client_id: i64,
    pub client_name: Option<String>,
    pub lessor: String,
    pub monthly_payment: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Searchable for Lease {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.lessor.as_str()), self.client_name.as_deref()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NewLease {
    pub client_id: i64,
    pub lessor: String,
    pub monthly_payment: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct LeasePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessor: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub monthly_payment: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub end_date: Option<Option<NaiveDate>>,
}
