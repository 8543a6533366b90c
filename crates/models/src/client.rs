use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utils::search::Searchable;

/// A client of the field-service business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.city.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct NewClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub notes: Option<String>,
}

/// Partial update for PUT. A field wrapped in `Some(None)` serializes as an
/// explicit JSON `null` (clear the value); an absent field is omitted
/// (leave unchanged).
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct ClientPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub email: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub phone: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub address: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub postal_code: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub city: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub notes: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_distinguishes_clear_from_leave_unchanged() {
        let patch = ClientPatch {
            email: Some(None),
            city: Some(Some("Paris".to_string())),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();

        // Explicit clear serializes as null.
        assert_eq!(value.get("email"), Some(&serde_json::Value::Null));
        assert_eq!(value["city"], "Paris");
        // Untouched fields are omitted entirely.
        assert!(value.get("phone").is_none());
        assert!(value.get("name").is_none());
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let value = serde_json::to_value(ClientPatch::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn search_fields_cover_name_email_phone_city() {
        let client = Client {
            id: 1,
            name: "Dupont SARL".to_string(),
            email: Some("contact@dupont.fr".to_string()),
            phone: None,
            address: Some("4 rue des Lilas".to_string()),
            postal_code: Some("75011".to_string()),
            city: Some("Paris".to_string()),
            notes: None,
        };
        let fields = client.search_fields();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0], Some("Dupont SARL"));
        assert_eq!(fields[3], Some("Paris"));
        // Address is deliberately not searchable.
        assert!(!fields.contains(&Some("4 rue des Lilas")));
    }
}
