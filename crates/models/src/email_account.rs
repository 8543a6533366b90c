use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::search::Searchable;

/// A managed mailbox belonging to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct EmailAccount {
    pub id: i64,
    pub client_id: i64,
    pub client_name: Option<String>,
    pub address: String,
    pub provider: Option<String>,
    pub quota_mb: Option<i64>,
    pub expires_on: Option<NaiveDate>,
}

impl Searchable for EmailAccount {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.address.as_str()),
            self.provider.as_deref(),
            self.client_name.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NewEmailAccount {
    pub client_id: i64,
    pub address: String,
    pub provider: Option<String>,
    pub quota_mb: Option<i64>,
    pub expires_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct EmailAccountPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
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
    pub quota_mb: Option<Option<i64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub expires_on: Option<Option<NaiveDate>>,
}
