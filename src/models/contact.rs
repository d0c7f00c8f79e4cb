//! Contact model shared by the API server and the client state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Mobile and work phone numbers of a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
}

impl Phone {
    /// Both numbers present but empty, as shown in an empty form.
    pub fn blank() -> Self {
        Self {
            mobile: Some(String::new()),
            work: Some(String::new()),
        }
    }
}

/// A persisted contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Assigned by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
}

impl Contact {
    /// Fill in a missing phone with empty numbers.
    pub fn with_default_phone(mut self) -> Self {
        if self.phone.is_none() {
            self.phone = Some(Phone::blank());
        }
        self
    }

    /// The body sent back to the server when this contact is replaced.
    pub fn to_input(&self) -> ContactInput {
        ContactInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            create_date: self.create_date,
        }
    }
}

/// Request body for creating or replacing a contact.
///
/// Every field defaults, so a body without `name` is rejected by
/// [`ContactInput::validate`] instead of by the JSON extractor. Any `id`
/// in the body is dropped here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Ignored on create; echoed back on replace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
}

impl ContactInput {
    /// A blank unsaved contact, as selected by the "New" action.
    pub fn draft() -> Self {
        Self {
            name: String::new(),
            email: Some(String::new()),
            phone: Some(Phone::blank()),
            create_date: None,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Must provide a name.".to_string()));
        }
        Ok(())
    }

    /// Attach an id to the submitted fields.
    pub fn into_contact(self, id: String) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            create_date: self.create_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_name_fails_validation() {
        let input: ContactInput = serde_json::from_value(json!({ "email": "a@x.com" })).unwrap();
        assert_eq!(input.name, "");
        assert!(matches!(input.validate(), Err(AppError::Validation(_))));

        let blank: ContactInput = serde_json::from_value(json!({ "name": "   " })).unwrap();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_id_in_body_is_ignored() {
        let input: ContactInput =
            serde_json::from_value(json!({ "id": "abc", "_id": "def", "name": "A" })).unwrap();
        assert!(input.validate().is_ok());

        let contact = input.into_contact("real-id".to_string());
        assert_eq!(contact.id, "real-id");
        assert_eq!(contact.name, "A");
    }

    #[test]
    fn test_contact_json_shape() {
        let contact = ContactInput {
            name: "A".into(),
            email: Some("a@x.com".into()),
            phone: Some(Phone {
                mobile: Some("123".into()),
                work: None,
            }),
            create_date: None,
        }
        .into_contact("I1".into());

        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "I1",
                "name": "A",
                "email": "a@x.com",
                "phone": { "mobile": "123" }
            })
        );
    }

    #[test]
    fn test_create_date_is_camel_case() {
        let contact: Contact = serde_json::from_value(json!({
            "id": "I1",
            "name": "A",
            "createDate": "2018-07-10T12:00:00Z"
        }))
        .unwrap();
        assert!(contact.create_date.is_some());
        assert!(contact.phone.is_none());
    }

    #[test]
    fn test_default_phone() {
        let contact = ContactInput {
            name: "A".into(),
            ..Default::default()
        }
        .into_contact("I1".into())
        .with_default_phone();
        assert_eq!(contact.phone, Some(Phone::blank()));

        let kept = ContactInput {
            name: "B".into(),
            phone: Some(Phone {
                mobile: Some("1".into()),
                work: None,
            }),
            ..Default::default()
        }
        .into_contact("I2".into())
        .with_default_phone();
        assert_eq!(kept.phone.unwrap().mobile.as_deref(), Some("1"));
    }
}
