use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::search::Searchable;

/// A piece of equipment installed at a client site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Hardware {
    pub id: i64,
    pub client_id: i64,
    pub client_name: Option<String>,
    pub label: String,
    pub serial_number: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
}

impl Searchable for Hardware {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.label.as_str()),
            self.serial_number.as_deref(),
            self.client_name.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NewHardware {
    pub client_id: i64,
    pub label: String,
    pub serial_number: Option<String>,
    pub purchased_on: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct HardwarePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub serial_number: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub purchased_on: Option<Option<NaiveDate>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub warranty_until: Option<Option<NaiveDate>>,
}
