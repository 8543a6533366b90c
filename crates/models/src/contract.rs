use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use ts_rs::TS;
use utils::search::Searchable;

use crate::client::Client;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, Display, EnumString, AsRefStr, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Active,
    Suspended,
    Terminated,
}

/// A maintenance contract.
///
/// List rows embed only the client's display name; the detail endpoint
/// inlines the full client record instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Contract {
    pub id: i64,
    pub client_id: i64,
    pub reference: String,
    pub status: ContractStatus,
    pub client_name: Option<String>,
    pub client: Option<Client>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_amount: Option<f64>,
}

impl Contract {
    /// Display name regardless of which shape the backend sent.
    pub fn client_display_name(&self) -> Option<&str> {
        self.client
            .as_ref()
            .map(|c| c.name.as_str())
            .or(self.client_name.as_deref())
    }
}

impl Searchable for Contract {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.reference.as_str()),
            self.client_display_name(),
            Some(self.status.as_ref()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NewContract {
    pub client_id: i64,
    pub reference: String,
    pub status: ContractStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub monthly_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct ContractPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContractStatus>,
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
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub monthly_amount: Option<Option<f64>>,
}
