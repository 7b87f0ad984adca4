use core::str::FromStr;

use serde::{Deserialize, Serialize};

use varahi_core::{DomainError, ValueObject};

use crate::field_store::{FormField, FormSchema};

/// Inputs of the contact form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];
}

impl FormField for ContactField {
    fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| DomainError::unknown_field(s))
    }
}

/// Snapshot of the contact form. Every field is required by the host form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSnapshot {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ValueObject for ContactSnapshot {}

impl ContactSnapshot {
    /// True when every field is non-empty.
    ///
    /// The host's required-field gate normally guarantees this before submit;
    /// the submission pipeline does not refuse an incomplete snapshot.
    pub fn is_complete(&self) -> bool {
        ContactField::ALL.into_iter().all(|f| !self.get(f).is_empty())
    }
}

impl FormSchema for ContactSnapshot {
    type Field = ContactField;

    const FORM: &'static str = "contact";

    fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Message => self.message = value,
        }
    }
}
