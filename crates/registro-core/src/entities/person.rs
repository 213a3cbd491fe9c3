//! The person record kind.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, NewRecord, SortOrder, Unfiltered};
use crate::error::InvalidInputError;
use crate::types::RecordId;

/// A registered person.
///
/// Every field except the identifier is optional; the gateway stores them as
/// nullable columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: RecordId,
    pub created_at: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<i64>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub profession: Option<String>,
    pub education_level: Option<String>,
    pub role: Option<String>,
    pub organization_id: Option<i64>,
    pub photo_url: Option<String>,
    pub leadership: Option<bool>,
    pub collaborator: Option<bool>,
    pub active: Option<bool>,
    pub registered_by: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Creation shape for a person. The name is required; everything else is
/// optional and omitted from the request body when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewPerson {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadership: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_by: Option<String>,
}

impl NewRecord for NewPerson {
    fn validate(&self) -> Result<(), InvalidInputError> {
        if self.name.trim().is_empty() {
            return Err(InvalidInputError::MissingField { field: "name" });
        }
        if let Some(ref email) = self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

/// Partial-update shape for a person; only present fields are serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadership: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl PersonPatch {
    /// True when no field is set, i.e. the patch would be a no-op.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Entity for Person {
    const COLLECTION: &'static str = "people";
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "email", "phone"];

    type Insert = NewPerson;
    type Patch = PersonPatch;
    type Filter = Unfiltered;

    fn sort() -> SortOrder {
        SortOrder::descending("created_at")
    }

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Minimal shape check for an email address: one `@` with a non-empty local
/// part and a dotted domain. Anything stricter belongs to the gateway.
pub(crate) fn validate_email(value: &str) -> Result<(), InvalidInputError> {
    let invalid = || InvalidInputError::Email { value: value.to_string() };
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_person_requires_a_name() {
        let new = NewPerson { name: "  ".into(), ..Default::default() };
        assert!(matches!(
            new.validate(),
            Err(InvalidInputError::MissingField { field: "name" })
        ));
    }

    #[test]
    fn new_person_rejects_malformed_email() {
        for bad in ["maria", "maria@", "@example.org", "maria@nodot", "a b@example.org"] {
            let new = NewPerson {
                name: "Maria".into(),
                email: Some(bad.into()),
                ..Default::default()
            };
            assert!(new.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn new_person_accepts_plain_email() {
        let new = NewPerson {
            name: "Maria".into(),
            email: Some("maria@example.org".into()),
            ..Default::default()
        };
        new.validate().unwrap();
    }

    #[test]
    fn insert_body_omits_absent_fields() {
        let new = NewPerson {
            name: "Maria".into(),
            phone: Some("5599123".into()),
            ..Default::default()
        };
        let body = serde_json::to_value(&new).unwrap();
        assert_eq!(body, json!({"name": "Maria", "phone": "5599123"}));
    }

    #[test]
    fn empty_patch_detected() {
        assert!(PersonPatch::default().is_empty());
        let patch = PersonPatch { city: Some("Caxias".into()), ..Default::default() };
        assert!(!patch.is_empty());
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"city": "Caxias"})
        );
    }

    #[test]
    fn person_deserializes_with_missing_columns() {
        let row: Person = serde_json::from_value(json!({
            "id": 3,
            "name": "Maria Souza",
            "email": null
        }))
        .unwrap();
        assert_eq!(row.id, RecordId::new(3));
        assert_eq!(row.name.as_deref(), Some("Maria Souza"));
        assert_eq!(row.email, None);
        assert_eq!(row.created_at, None);
    }

    #[test]
    fn search_fields_exist_on_the_record_shape() {
        let row = serde_json::to_value(Person {
            id: RecordId::new(1),
            created_at: None,
            name: None,
            nickname: None,
            email: None,
            phone: None,
            street: None,
            house_number: None,
            district: None,
            city: None,
            address: None,
            birth_date: None,
            gender: None,
            marital_status: None,
            profession: None,
            education_level: None,
            role: None,
            organization_id: None,
            photo_url: None,
            leadership: None,
            collaborator: None,
            active: None,
            registered_by: None,
            latitude: None,
            longitude: None,
        })
        .unwrap();
        for field in Person::SEARCH_FIELDS {
            assert!(row.get(field).is_some(), "unknown search field {field}");
        }
    }
}
