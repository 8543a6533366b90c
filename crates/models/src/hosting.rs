use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::search::Searchable;

/// A web-hosting subscription managed for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Hosting {
    pub id: i64,
    pub client_id: i64,
    pub client_name: Option<String>,
    pub domain: String,
    pub provider: Option<String>,
    pub plan: Option<String>,
    pub expires_on: Option<NaiveDate>,
    pub monthly_cost: Option<f64>,
}

impl Searchable for Hosting {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.domain.as_str()),
            self.provider.as_deref(),
            self.client_name.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NewHosting {
    pub client_id: i64,
    pub domain: String,
    pub provider: Option<String>,
    pub plan: Option<String>,
    pub expires_on: Option<NaiveDate>,
    pub monthly_cost: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct HostingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub provider: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub plan: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub expires_on: Option<Option<NaiveDate>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub monthly_cost: Option<Option<f64>>,
}
